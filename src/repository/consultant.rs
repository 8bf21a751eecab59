//! Repository implementation for consultants and their testimonials.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use diesel::upsert::excluded;

use crate::{
    db::fold_case,
    domain::{
        consultant::{Consultant, ConsultantImport, NewConsultant, RawConsultant},
        testimonial::{NewTestimonial, Testimonial},
        types::ConsultantId,
    },
    models::{
        case_study::NewCaseStudy as DbNewCaseStudy,
        consultant::{Consultant as DbConsultant, NewConsultant as DbNewConsultant},
        portfolio_item::NewPortfolioItem as DbNewPortfolioItem,
        testimonial::{NewTestimonial as DbNewTestimonial, Testimonial as DbTestimonial},
    },
    normalize::{normalize_consultant, normalize_consultants},
    repository::{
        ConsultantListQuery, ConsultantReader, ConsultantWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
        like_pattern, tag_pattern,
    },
    schema::{case_studies, consultants, portfolio_items, testimonials},
};

fn filtered(query: &ConsultantListQuery) -> consultants::BoxedQuery<'static, Sqlite> {
    let mut items: consultants::BoxedQuery<'static, Sqlite> = consultants::table.into_boxed();

    if query.approved_only {
        items = items.filter(consultants::is_approved.eq(true));
    }

    if query.featured_only {
        items = items.filter(consultants::is_featured.eq(true));
    }

    if let Some(region) = &query.region {
        items = items.filter(
            fold_case(consultants::region)
                .like(like_pattern(&region.to_lowercase()))
                .escape('\\'),
        );
    }

    // A free-text search already covers the tag columns and replaces the
    // expertise filter.
    if let Some(term) = &query.search {
        let term = term.to_lowercase();
        let text = like_pattern(&term);
        let tag = tag_pattern(&term);
        items = items.filter(
            fold_case(consultants::name)
                .like(text.clone())
                .escape('\\')
                .or(fold_case(consultants::description)
                    .like(text.clone())
                    .escape('\\'))
                .or(fold_case(consultants::short_description.assume_not_null())
                    .like(text)
                    .escape('\\'))
                .or(fold_case(consultants::services.assume_not_null())
                    .like(tag.clone())
                    .escape('\\'))
                .or(fold_case(consultants::industries.assume_not_null())
                    .like(tag)
                    .escape('\\')),
        );
    } else if let Some(tag) = &query.expertise {
        let pattern = tag_pattern(&tag.to_lowercase());
        items = items.filter(
            fold_case(consultants::services.assume_not_null())
                .like(pattern.clone())
                .escape('\\')
                .or(fold_case(consultants::industries.assume_not_null())
                    .like(pattern)
                    .escape('\\')),
        );
    }

    items
}

fn into_domain(db_consultants: Vec<DbConsultant>) -> RepositoryResult<Vec<Consultant>> {
    let raw = db_consultants
        .into_iter()
        .map(RawConsultant::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(normalize_consultants(raw))
}

impl ConsultantReader for DieselRepository {
    fn list_consultants(
        &self,
        query: ConsultantListQuery,
    ) -> RepositoryResult<(usize, Vec<Consultant>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered(&query).count().get_result(&mut conn)?;

        let rows = filtered(&query)
            .select(DbConsultant::as_select())
            .order((
                consultants::is_featured.desc(),
                consultants::created_at.desc(),
                consultants::id.desc(),
            ))
            .limit(query.pagination.sql_limit())
            .offset(query.pagination.sql_offset())
            .load::<DbConsultant>(&mut conn)?;

        Ok((total as usize, into_domain(rows)?))
    }

    fn get_consultant_by_id(&self, id: ConsultantId) -> RepositoryResult<Option<Consultant>> {
        let mut conn = self.conn()?;

        let row = consultants::table
            .find(id.get())
            .select(DbConsultant::as_select())
            .first::<DbConsultant>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(Some(normalize_consultant(RawConsultant::try_from(row)?))),
            None => Ok(None),
        }
    }

    fn list_approved_testimonials(
        &self,
        consultant_ids: &[ConsultantId],
    ) -> RepositoryResult<Vec<Testimonial>> {
        if consultant_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let ids: Vec<i32> = consultant_ids.iter().map(|id| id.get()).collect();

        testimonials::table
            .filter(testimonials::consultant_id.eq_any(ids))
            .filter(testimonials::is_approved.eq(true))
            .order((testimonials::created_at.desc(), testimonials::id.desc()))
            .select(DbTestimonial::as_select())
            .load::<DbTestimonial>(&mut conn)?
            .into_iter()
            .map(|t| Testimonial::try_from(t).map_err(RepositoryError::from))
            .collect()
    }
}

impl ConsultantWriter for DieselRepository {
    fn create_consultant(&self, consultant: &NewConsultant) -> RepositoryResult<Consultant> {
        let mut conn = self.conn()?;

        let row = diesel::insert_into(consultants::table)
            .values(&DbNewConsultant::from(consultant))
            .returning(DbConsultant::as_returning())
            .get_result::<DbConsultant>(&mut conn)?;

        Ok(normalize_consultant(RawConsultant::try_from(row)?))
    }

    fn create_testimonial(
        &self,
        consultant_id: ConsultantId,
        testimonial: &NewTestimonial,
    ) -> RepositoryResult<Testimonial> {
        let mut conn = self.conn()?;

        let row = diesel::insert_into(testimonials::table)
            .values(&DbNewTestimonial::from_domain(consultant_id, testimonial))
            .returning(DbTestimonial::as_returning())
            .get_result::<DbTestimonial>(&mut conn)?;

        Ok(Testimonial::try_from(row)?)
    }

    fn import_consultant(&self, import: &ConsultantImport) -> RepositoryResult<Consultant> {
        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let row = diesel::insert_into(consultants::table)
                .values(&DbNewConsultant::from(&import.profile))
                .on_conflict(consultants::email)
                .do_update()
                .set((
                    consultants::name.eq(excluded(consultants::name)),
                    consultants::description.eq(excluded(consultants::description)),
                    consultants::short_description.eq(excluded(consultants::short_description)),
                    consultants::website.eq(excluded(consultants::website)),
                    consultants::phone.eq(excluded(consultants::phone)),
                    consultants::region.eq(excluded(consultants::region)),
                    consultants::services.eq(excluded(consultants::services)),
                    consultants::industries.eq(excluded(consultants::industries)),
                    consultants::logo.eq(excluded(consultants::logo)),
                    consultants::hourly_rate.eq(excluded(consultants::hourly_rate)),
                    consultants::project_rate_min.eq(excluded(consultants::project_rate_min)),
                    consultants::project_rate_max.eq(excluded(consultants::project_rate_max)),
                    consultants::show_rates.eq(excluded(consultants::show_rates)),
                    consultants::is_approved.eq(excluded(consultants::is_approved)),
                    consultants::is_featured.eq(excluded(consultants::is_featured)),
                    consultants::updated_at.eq(now),
                ))
                .returning(DbConsultant::as_returning())
                .get_result::<DbConsultant>(conn)?;

            let consultant = normalize_consultant(RawConsultant::try_from(row)?);
            let id = consultant.id;

            diesel::delete(testimonials::table.filter(testimonials::consultant_id.eq(id.get())))
                .execute(conn)?;
            diesel::delete(case_studies::table.filter(case_studies::consultant_id.eq(id.get())))
                .execute(conn)?;
            diesel::delete(
                portfolio_items::table.filter(portfolio_items::consultant_id.eq(id.get())),
            )
            .execute(conn)?;

            for testimonial in &import.testimonials {
                diesel::insert_into(testimonials::table)
                    .values(&DbNewTestimonial::from_domain(id, testimonial))
                    .execute(conn)?;
            }
            for study in &import.case_studies {
                diesel::insert_into(case_studies::table)
                    .values(&DbNewCaseStudy::from_domain(id, study))
                    .execute(conn)?;
            }
            for item in &import.portfolio_items {
                diesel::insert_into(portfolio_items::table)
                    .values(&DbNewPortfolioItem::from_domain(id, item))
                    .execute(conn)?;
            }

            Ok(consultant)
        })
    }
}
