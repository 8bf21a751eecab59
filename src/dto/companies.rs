//! DTOs exposed by the companies endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::company::{Company, CompanySummary};
use crate::dto::first_value;

/// Raw query string of `GET /api/companies`; every value is untrusted text.
#[derive(Debug, Default, Deserialize)]
pub struct CompaniesQueryParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

impl CompaniesQueryParams {
    /// Builds the parameters from raw query pairs, keeping the first
    /// occurrence of a repeated key.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            search: first_value(pairs, "search"),
            category: first_value(pairs, "category"),
            page: first_value(pairs, "page"),
            page_size: first_value(pairs, "pageSize"),
        }
    }
}

/// Listing envelope returned by [`crate::services::companies::list_companies`].
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompaniesEnvelope {
    pub data: Vec<CompanySummary>,
    /// Matches across all pages.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Serialize)]
pub struct CompanyDetail {
    pub company: Company,
    /// schema.org `BreadcrumbList` for the company page.
    pub breadcrumbs: serde_json::Value,
}
