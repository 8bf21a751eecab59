//! Repository implementation for case studies and portfolio items.

use diesel::prelude::*;

use crate::{
    domain::{
        showcase::{CaseStudy, NewCaseStudy, NewPortfolioItem, PortfolioItem},
        types::{CaseStudyId, ConsultantId},
    },
    models::{
        case_study::{CaseStudy as DbCaseStudy, NewCaseStudy as DbNewCaseStudy},
        portfolio_item::{NewPortfolioItem as DbNewPortfolioItem, PortfolioItem as DbPortfolioItem},
    },
    repository::{
        DieselRepository, ShowcaseReader, ShowcaseWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{case_studies, portfolio_items},
};

impl ShowcaseReader for DieselRepository {
    fn list_public_case_studies(
        &self,
        consultant_ids: &[ConsultantId],
    ) -> RepositoryResult<Vec<CaseStudy>> {
        if consultant_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let ids: Vec<i32> = consultant_ids.iter().map(|id| id.get()).collect();

        case_studies::table
            .filter(case_studies::consultant_id.eq_any(ids))
            .filter(case_studies::is_public.eq(true))
            .order((case_studies::created_at.desc(), case_studies::id.desc()))
            .select(DbCaseStudy::as_select())
            .load::<DbCaseStudy>(&mut conn)?
            .into_iter()
            .map(|s| CaseStudy::try_from(s).map_err(RepositoryError::from))
            .collect()
    }

    fn list_public_portfolio_items(
        &self,
        consultant_ids: &[ConsultantId],
    ) -> RepositoryResult<Vec<PortfolioItem>> {
        if consultant_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let ids: Vec<i32> = consultant_ids.iter().map(|id| id.get()).collect();

        portfolio_items::table
            .filter(portfolio_items::consultant_id.eq_any(ids))
            .filter(portfolio_items::is_public.eq(true))
            .order((portfolio_items::display_order.asc(), portfolio_items::id.asc()))
            .select(DbPortfolioItem::as_select())
            .load::<DbPortfolioItem>(&mut conn)?
            .into_iter()
            .map(|i| PortfolioItem::try_from(i).map_err(RepositoryError::from))
            .collect()
    }

    fn get_case_study_by_id(&self, id: CaseStudyId) -> RepositoryResult<Option<CaseStudy>> {
        let mut conn = self.conn()?;

        let row = case_studies::table
            .find(id.get())
            .select(DbCaseStudy::as_select())
            .first::<DbCaseStudy>(&mut conn)
            .optional()?;

        row.map(CaseStudy::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl ShowcaseWriter for DieselRepository {
    fn create_case_study(
        &self,
        consultant_id: ConsultantId,
        study: &NewCaseStudy,
    ) -> RepositoryResult<CaseStudy> {
        let mut conn = self.conn()?;

        let row = diesel::insert_into(case_studies::table)
            .values(&DbNewCaseStudy::from_domain(consultant_id, study))
            .returning(DbCaseStudy::as_returning())
            .get_result::<DbCaseStudy>(&mut conn)?;

        Ok(CaseStudy::try_from(row)?)
    }

    fn create_portfolio_item(
        &self,
        consultant_id: ConsultantId,
        item: &NewPortfolioItem,
    ) -> RepositoryResult<PortfolioItem> {
        let mut conn = self.conn()?;

        let row = diesel::insert_into(portfolio_items::table)
            .values(&DbNewPortfolioItem::from_domain(consultant_id, item))
            .returning(DbPortfolioItem::as_returning())
            .get_result::<DbPortfolioItem>(&mut conn)?;

        Ok(PortfolioItem::try_from(row)?)
    }
}
