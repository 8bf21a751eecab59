//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::company::{Company, CompanySummary, NewCompany, SitemapEntry};
use crate::domain::consultant::{Consultant, ConsultantImport, NewConsultant};
use crate::domain::showcase::{CaseStudy, NewCaseStudy, NewPortfolioItem, PortfolioItem};
use crate::domain::testimonial::{NewTestimonial, Testimonial};
use crate::domain::types::{CaseStudyId, ConsultantId, Slug};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CompanyListQuery, CompanyReader, CompanyWriter, ConsultantListQuery, ConsultantReader,
    ConsultantWriter, ShowcaseReader, ShowcaseWriter,
};

mock! {
    pub Repository {}

    impl CompanyReader for Repository {
        fn list_companies(
            &self,
            query: CompanyListQuery,
        ) -> RepositoryResult<(usize, Vec<CompanySummary>)>;
        fn get_company_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Company>>;
        fn list_sitemap_entries(&self, limit: i64) -> RepositoryResult<Vec<SitemapEntry>>;
    }

    impl CompanyWriter for Repository {
        fn upsert_companies(&self, companies: &[NewCompany]) -> RepositoryResult<usize>;
    }

    impl ConsultantReader for Repository {
        fn list_consultants(
            &self,
            query: ConsultantListQuery,
        ) -> RepositoryResult<(usize, Vec<Consultant>)>;
        fn get_consultant_by_id(&self, id: ConsultantId) -> RepositoryResult<Option<Consultant>>;
        fn list_approved_testimonials(
            &self,
            consultant_ids: &[ConsultantId],
        ) -> RepositoryResult<Vec<Testimonial>>;
    }

    impl ConsultantWriter for Repository {
        fn create_consultant(&self, consultant: &NewConsultant) -> RepositoryResult<Consultant>;
        fn create_testimonial(
            &self,
            consultant_id: ConsultantId,
            testimonial: &NewTestimonial,
        ) -> RepositoryResult<Testimonial>;
        fn import_consultant(&self, import: &ConsultantImport) -> RepositoryResult<Consultant>;
    }

    impl ShowcaseReader for Repository {
        fn list_public_case_studies(
            &self,
            consultant_ids: &[ConsultantId],
        ) -> RepositoryResult<Vec<CaseStudy>>;
        fn list_public_portfolio_items(
            &self,
            consultant_ids: &[ConsultantId],
        ) -> RepositoryResult<Vec<PortfolioItem>>;
        fn get_case_study_by_id(&self, id: CaseStudyId) -> RepositoryResult<Option<CaseStudy>>;
    }

    impl ShowcaseWriter for Repository {
        fn create_case_study(
            &self,
            consultant_id: ConsultantId,
            study: &NewCaseStudy,
        ) -> RepositoryResult<CaseStudy>;
        fn create_portfolio_item(
            &self,
            consultant_id: ConsultantId,
            item: &NewPortfolioItem,
        ) -> RepositoryResult<PortfolioItem>;
    }
}
