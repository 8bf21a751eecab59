use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CompanyId, CompanyName, Slug, TypeConstraintError, WebsiteUrl};

/// A SaaS company listed in the directory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: CompanyId,
    pub name: CompanyName,
    pub slug: Slug,
    pub website: String,
    pub category: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Public columns returned by the companies listing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CompanySummary {
    pub name: String,
    pub website: String,
    pub category: String,
    pub description: String,
    pub logo_url: Option<String>,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            name: company.name.to_string(),
            website: company.website.clone(),
            category: company.category.clone(),
            description: company.description.clone(),
            logo_url: company.logo_url.clone(),
        }
    }
}

/// Minimal data needed to emit a sitemap entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitemapEntry {
    pub name: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewCompany {
    pub name: CompanyName,
    pub slug: Slug,
    pub website: String,
    pub category: String,
    pub description: String,
    pub logo_url: Option<String>,
}

impl NewCompany {
    /// Validates the website (when present) and derives the slug from the name.
    pub fn new(
        name: CompanyName,
        website: Option<String>,
        category: Option<String>,
        description: Option<String>,
        logo_url: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        let slug = Slug::from_name(name.as_str())?;
        let website = match website.map(|s| s.trim().to_string()) {
            Some(url) if !url.is_empty() => WebsiteUrl::new(url)?.into_inner(),
            _ => String::new(),
        };
        Ok(Self {
            name,
            slug,
            website,
            category: category.map(|s| s.trim().to_string()).unwrap_or_default(),
            description: description
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            logo_url: logo_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }
}
