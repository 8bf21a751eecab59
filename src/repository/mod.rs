use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        company::{Company, CompanySummary, NewCompany, SitemapEntry},
        consultant::{Consultant, ConsultantImport, NewConsultant},
        showcase::{CaseStudy, NewCaseStudy, NewPortfolioItem, PortfolioItem},
        testimonial::{NewTestimonial, Testimonial},
        types::{CaseStudyId, ConsultantId, Slug},
    },
    pagination::PageRequest,
    repository::errors::RepositoryResult,
};

pub mod company;
pub mod consultant;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod showcase;

/// Repository backed by a pooled SQLite connection.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Trims a filter value, treating blank input as absent.
fn filter_value(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Escapes `LIKE` wildcards so user input only matches literally.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// Pattern matching a whole tag inside a JSON-encoded string array.
pub(crate) fn tag_pattern(tag: &str) -> String {
    let encoded = serde_json::to_string(tag).unwrap_or_default();
    like_pattern(&encoded)
}

#[derive(Debug, Clone, Default)]
pub struct CompanyListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub pagination: PageRequest,
}

impl CompanyListQuery {
    pub fn new(pagination: PageRequest) -> Self {
        Self {
            search: None,
            category: None,
            pagination,
        }
    }

    /// Case-insensitive substring filter on the company name.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = filter_value(term);
        self
    }

    /// Exact category filter.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = filter_value(category);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ConsultantListQuery {
    pub search: Option<String>,
    pub region: Option<String>,
    pub expertise: Option<String>,
    pub featured_only: bool,
    pub approved_only: bool,
    pub pagination: PageRequest,
}

impl ConsultantListQuery {
    /// Approved consultants only, unless [`Self::include_unapproved`] is called.
    pub fn new(pagination: PageRequest) -> Self {
        Self {
            search: None,
            region: None,
            expertise: None,
            featured_only: false,
            approved_only: true,
            pagination,
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = filter_value(term);
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = filter_value(region);
        self
    }

    pub fn expertise(mut self, tag: impl Into<String>) -> Self {
        self.expertise = filter_value(tag);
        self
    }

    pub fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    pub fn include_unapproved(mut self) -> Self {
        self.approved_only = false;
        self
    }
}

pub trait CompanyReader {
    /// Returns the total number of matches and the requested page, ordered by name.
    fn list_companies(
        &self,
        query: CompanyListQuery,
    ) -> RepositoryResult<(usize, Vec<CompanySummary>)>;
    fn get_company_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Company>>;
    /// Newest companies first, at most `limit` of them.
    fn list_sitemap_entries(&self, limit: i64) -> RepositoryResult<Vec<SitemapEntry>>;
}

pub trait CompanyWriter {
    /// Inserts companies, updating existing rows that share a slug.
    fn upsert_companies(&self, companies: &[NewCompany]) -> RepositoryResult<usize>;
}

pub trait ConsultantReader {
    fn list_consultants(
        &self,
        query: ConsultantListQuery,
    ) -> RepositoryResult<(usize, Vec<Consultant>)>;
    fn get_consultant_by_id(&self, id: ConsultantId) -> RepositoryResult<Option<Consultant>>;
    /// Approved testimonials of the given consultants, newest first.
    fn list_approved_testimonials(
        &self,
        consultant_ids: &[ConsultantId],
    ) -> RepositoryResult<Vec<Testimonial>>;
}

pub trait ConsultantWriter {
    fn create_consultant(&self, consultant: &NewConsultant) -> RepositoryResult<Consultant>;
    fn create_testimonial(
        &self,
        consultant_id: ConsultantId,
        testimonial: &NewTestimonial,
    ) -> RepositoryResult<Testimonial>;
    /// Upserts the profile on its e-mail address and replaces its testimonials,
    /// case studies and portfolio items, all in one transaction.
    fn import_consultant(&self, import: &ConsultantImport) -> RepositoryResult<Consultant>;
}

pub trait ShowcaseReader {
    /// Public case studies of the given consultants, newest first.
    fn list_public_case_studies(
        &self,
        consultant_ids: &[ConsultantId],
    ) -> RepositoryResult<Vec<CaseStudy>>;
    /// Public portfolio items of the given consultants in display order.
    fn list_public_portfolio_items(
        &self,
        consultant_ids: &[ConsultantId],
    ) -> RepositoryResult<Vec<PortfolioItem>>;
    /// Any case study, public or not.
    fn get_case_study_by_id(&self, id: CaseStudyId) -> RepositoryResult<Option<CaseStudy>>;
}

pub trait ShowcaseWriter {
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
