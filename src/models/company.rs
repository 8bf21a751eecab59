use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::company::{
    Company as DomainCompany, CompanySummary as DomainCompanySummary,
    NewCompany as DomainNewCompany, SitemapEntry as DomainSitemapEntry,
};
use crate::domain::types::{CompanyId, CompanyName, Slug, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::companies)]
/// Diesel model for [`crate::domain::company::Company`].
pub struct Company {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub website: String,
    pub category: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::companies)]
/// Listing projection of [`Company`].
pub struct CompanySummary {
    pub name: String,
    pub website: String,
    pub category: String,
    pub description: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::companies)]
pub struct SitemapEntry {
    pub name: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::companies)]
/// Insertable form of [`Company`].
pub struct NewCompany<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub website: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub logo_url: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Company> for DomainCompany {
    type Error = TypeConstraintError;

    fn try_from(company: Company) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CompanyId::new(company.id)?,
            name: CompanyName::new(company.name)?,
            slug: Slug::parse(&company.slug)?,
            website: company.website,
            category: company.category,
            description: company.description,
            logo_url: company.logo_url,
            created_at: company.created_at,
            updated_at: company.updated_at,
        })
    }
}

impl From<CompanySummary> for DomainCompanySummary {
    fn from(summary: CompanySummary) -> Self {
        Self {
            name: summary.name,
            website: summary.website,
            category: summary.category,
            description: summary.description,
            logo_url: summary.logo_url,
        }
    }
}

impl From<SitemapEntry> for DomainSitemapEntry {
    fn from(entry: SitemapEntry) -> Self {
        Self {
            name: entry.name,
            slug: entry.slug,
            created_at: entry.created_at,
        }
    }
}

impl<'a> NewCompany<'a> {
    /// Borrows a domain company, stamping the update time.
    pub fn from_domain(company: &'a DomainNewCompany, now: NaiveDateTime) -> Self {
        Self {
            name: company.name.as_str(),
            slug: company.slug.as_str(),
            website: company.website.as_str(),
            category: company.category.as_str(),
            description: company.description.as_str(),
            logo_url: company.logo_url.as_deref(),
            updated_at: now,
        }
    }
}
