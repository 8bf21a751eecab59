//! DTOs exposed by the consultants endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::consultant::Consultant;
use crate::domain::showcase::{CaseStudy, PortfolioItem};
use crate::domain::testimonial::{RatingSummary, Testimonial};
use crate::dto::first_value;

#[derive(Debug, Default, Deserialize)]
pub struct ConsultantsQueryParams {
    pub search: Option<String>,
    pub region: Option<String>,
    pub expertise: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub featured: Option<String>,
    pub approved: Option<String>,
}

impl ConsultantsQueryParams {
    /// Builds the parameters from raw query pairs, keeping the first
    /// occurrence of a repeated key.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            search: first_value(pairs, "search"),
            region: first_value(pairs, "region"),
            expertise: first_value(pairs, "expertise"),
            page: first_value(pairs, "page"),
            limit: first_value(pairs, "limit"),
            featured: first_value(pairs, "featured"),
            approved: first_value(pairs, "approved"),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantListing {
    #[serde(flatten)]
    pub consultant: Consultant,
    #[serde(flatten)]
    pub rating: RatingSummary,
    pub pricing: String,
    /// First public portfolio items in display order.
    pub portfolio_items: Vec<PortfolioItem>,
    /// Latest public case studies.
    pub case_studies: Vec<CaseStudy>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

#[derive(Debug, Serialize)]
pub struct ConsultantsPage {
    pub consultants: Vec<ConsultantListing>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantProfile {
    #[serde(flatten)]
    pub consultant: Consultant,
    pub testimonials: Vec<Testimonial>,
    pub portfolio_items: Vec<PortfolioItem>,
    pub case_studies: Vec<CaseStudy>,
    #[serde(flatten)]
    pub rating: RatingSummary,
    pub pricing: String,
}

#[derive(Debug, Serialize)]
pub struct ConsultantDetail {
    pub consultant: ConsultantProfile,
}
