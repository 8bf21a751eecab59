//! Repository implementation for listed companies.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use diesel::upsert::excluded;

use crate::{
    db::fold_case,
    domain::{
        company::{Company, CompanySummary, NewCompany, SitemapEntry},
        types::Slug,
    },
    models::company::{
        Company as DbCompany, CompanySummary as DbCompanySummary, NewCompany as DbNewCompany,
        SitemapEntry as DbSitemapEntry,
    },
    repository::{
        CompanyListQuery, CompanyReader, CompanyWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
        like_pattern,
    },
    schema::companies,
};

/// Builds the filtered query shared by the page and the count.
fn filtered(query: &CompanyListQuery) -> companies::BoxedQuery<'static, Sqlite> {
    let mut items: companies::BoxedQuery<'static, Sqlite> = companies::table.into_boxed();

    if let Some(term) = &query.search {
        items = items.filter(
            fold_case(companies::name)
                .like(like_pattern(&term.to_lowercase()))
                .escape('\\'),
        );
    }

    if let Some(category) = &query.category {
        items = items.filter(companies::category.eq(category.clone()));
    }

    items
}

impl CompanyReader for DieselRepository {
    fn list_companies(
        &self,
        query: CompanyListQuery,
    ) -> RepositoryResult<(usize, Vec<CompanySummary>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered(&query).count().get_result(&mut conn)?;

        let items = filtered(&query)
            .select(DbCompanySummary::as_select())
            .order((companies::name.asc(), companies::id.asc()))
            .limit(query.pagination.sql_limit())
            .offset(query.pagination.sql_offset())
            .load::<DbCompanySummary>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, items))
    }

    fn get_company_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Company>> {
        let mut conn = self.conn()?;

        let company = companies::table
            .filter(companies::slug.eq(slug.as_str()))
            .select(DbCompany::as_select())
            .first::<DbCompany>(&mut conn)
            .optional()?;

        company
            .map(Company::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_sitemap_entries(&self, limit: i64) -> RepositoryResult<Vec<SitemapEntry>> {
        let mut conn = self.conn()?;

        let entries = companies::table
            .select(DbSitemapEntry::as_select())
            .order((companies::created_at.desc(), companies::id.desc()))
            .limit(limit.max(0))
            .load::<DbSitemapEntry>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(entries)
    }
}

impl CompanyWriter for DieselRepository {
    fn upsert_companies(&self, new_companies: &[NewCompany]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let mut affected = 0;
            for company in new_companies {
                let insertable = DbNewCompany::from_domain(company, now);
                affected += diesel::insert_into(companies::table)
                    .values(&insertable)
                    .on_conflict(companies::slug)
                    .do_update()
                    .set((
                        companies::name.eq(excluded(companies::name)),
                        companies::website.eq(excluded(companies::website)),
                        companies::category.eq(excluded(companies::category)),
                        companies::description.eq(excluded(companies::description)),
                        companies::logo_url.eq(excluded(companies::logo_url)),
                        companies::updated_at.eq(excluded(companies::updated_at)),
                    ))
                    .execute(conn)?;
            }
            Ok(affected)
        })
    }
}
