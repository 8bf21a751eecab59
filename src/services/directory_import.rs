//! Import of a JSON directory export into the database.
//!
//! Companies are upserted on their slug. Each consultant is upserted on its
//! e-mail address together with its testimonials, case studies and portfolio
//! items in a single transaction, so importing the same export twice leaves
//! the directory unchanged.

use serde::Deserialize;

use crate::domain::company::NewCompany;
use crate::domain::consultant::{ConsultantImport, NewConsultant};
use crate::domain::showcase::{NewCaseStudy, NewPortfolioItem};
use crate::domain::testimonial::NewTestimonial;
use crate::domain::types::{
    CompanyName, ConsultantName, ContactEmail, ItemTitle, RegionName, TypeConstraintError,
};
use crate::normalize::{ArrayField, parse_array_field};
use crate::pricing::RateCard;
use crate::repository::{CompanyWriter, ConsultantWriter};
use crate::services::ServiceResult;

#[derive(Debug, Default, Deserialize)]
pub struct DirectoryExport {
    #[serde(default)]
    pub companies: Vec<CompanyRecord>,
    #[serde(default)]
    pub consultants: Vec<ConsultantRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub website: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantRecord {
    pub name: String,
    pub email: String,
    pub region: String,
    #[serde(default)]
    pub description: String,
    pub short_description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub logo: Option<String>,
    #[serde(default)]
    pub services: Option<ArrayField>,
    #[serde(default)]
    pub industries: Option<ArrayField>,
    pub hourly_rate: Option<i32>,
    pub project_rate_min: Option<i32>,
    pub project_rate_max: Option<i32>,
    #[serde(default)]
    pub show_rates: bool,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub testimonials: Vec<TestimonialRecord>,
    #[serde(default)]
    pub case_studies: Vec<CaseStudyRecord>,
    #[serde(default)]
    pub portfolio_items: Vec<PortfolioItemRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialRecord {
    pub author_name: String,
    pub content: String,
    pub rating: i32,
    #[serde(default)]
    pub is_approved: bool,
}

fn public_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub results: String,
    #[serde(default)]
    pub technologies: Option<ArrayField>,
    pub industry: Option<String>,
    pub client_size: Option<String>,
    pub duration: Option<String>,
    pub budget: Option<String>,
    #[serde(default)]
    pub attachments: Option<ArrayField>,
    #[serde(default = "public_by_default")]
    pub is_public: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItemRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub metrics: Option<String>,
    #[serde(default)]
    pub technologies: Option<ArrayField>,
    pub project_type: Option<String>,
    pub client_type: Option<String>,
    pub duration: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "public_by_default")]
    pub is_public: bool,
}

impl TryFrom<CompanyRecord> for NewCompany {
    type Error = TypeConstraintError;

    fn try_from(record: CompanyRecord) -> Result<Self, Self::Error> {
        NewCompany::new(
            CompanyName::new(record.name)?,
            record.website,
            record.category,
            record.description,
            record.logo_url,
        )
    }
}

impl TryFrom<CaseStudyRecord> for NewCaseStudy {
    type Error = TypeConstraintError;

    fn try_from(record: CaseStudyRecord) -> Result<Self, Self::Error> {
        Ok(NewCaseStudy::new(
            ItemTitle::new(record.title)?,
            record.description,
            record.challenge,
            record.solution,
            record.results,
            parse_array_field(record.technologies),
        )
        .industry(record.industry)
        .client_size(record.client_size)
        .duration(record.duration)
        .budget(record.budget)
        .attachments(parse_array_field(record.attachments))
        .public(record.is_public))
    }
}

impl TryFrom<PortfolioItemRecord> for NewPortfolioItem {
    type Error = TypeConstraintError;

    fn try_from(record: PortfolioItemRecord) -> Result<Self, Self::Error> {
        Ok(NewPortfolioItem::new(
            ItemTitle::new(record.title)?,
            record.description,
            parse_array_field(record.technologies),
        )
        .metrics(record.metrics)
        .project_type(record.project_type)
        .client_type(record.client_type)
        .duration(record.duration)
        .display_order(record.display_order)
        .public(record.is_public))
    }
}

impl TryFrom<ConsultantRecord> for ConsultantImport {
    type Error = TypeConstraintError;

    /// A record whose profile or any child record fails validation is
    /// rejected as a whole.
    fn try_from(record: ConsultantRecord) -> Result<Self, Self::Error> {
        let profile = NewConsultant::new(
            ConsultantName::new(record.name)?,
            ContactEmail::new(record.email)?,
            RegionName::new(record.region)?,
            record.description,
            parse_array_field(record.services),
            parse_array_field(record.industries),
        )
        .short_description(record.short_description)
        .website(record.website)
        .phone(record.phone)
        .logo(record.logo)
        .rates(RateCard {
            hourly_rate: record.hourly_rate,
            project_rate_min: record.project_rate_min,
            project_rate_max: record.project_rate_max,
            show_rates: record.show_rates,
        })
        .approved(record.is_approved)
        .featured(record.is_featured);

        Ok(ConsultantImport {
            profile,
            testimonials: record
                .testimonials
                .into_iter()
                .map(|t| NewTestimonial::new(t.author_name, t.content, t.rating, t.is_approved))
                .collect(),
            case_studies: record
                .case_studies
                .into_iter()
                .map(NewCaseStudy::try_from)
                .collect::<Result<_, _>>()?,
            portfolio_items: record
                .portfolio_items
                .into_iter()
                .map(NewPortfolioItem::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub companies: usize,
    pub consultants: usize,
    pub testimonials: usize,
    pub case_studies: usize,
    pub portfolio_items: usize,
    pub skipped: usize,
}

/// Writes the export through `repo`, skipping records that fail validation.
pub fn import_directory<R>(repo: &R, export: DirectoryExport) -> ServiceResult<ImportSummary>
where
    R: CompanyWriter + ConsultantWriter + ?Sized,
{
    let mut summary = ImportSummary::default();

    let mut companies = Vec::with_capacity(export.companies.len());
    for record in export.companies {
        let name = record.name.clone();
        match NewCompany::try_from(record) {
            Ok(company) => companies.push(company),
            Err(err) => {
                log::warn!("Skipping company {name:?}: {err}");
                summary.skipped += 1;
            }
        }
    }
    summary.companies = repo.upsert_companies(&companies)?;

    for record in export.consultants {
        let name = record.name.clone();
        let import = match ConsultantImport::try_from(record) {
            Ok(import) => import,
            Err(err) => {
                log::warn!("Skipping consultant {name:?}: {err}");
                summary.skipped += 1;
                continue;
            }
        };
        repo.import_consultant(&import)?;
        summary.consultants += 1;
        summary.testimonials += import.testimonials.len();
        summary.case_studies += import.case_studies.len();
        summary.portfolio_items += import.portfolio_items.len();
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_accepts_both_tag_shapes() {
        let export: DirectoryExport = serde_json::from_str(
            r#"{
                "consultants": [
                    {"name": "A", "email": "a@example.com", "region": "London",
                     "services": ["Strategy", " Strategy ", "Cloud"],
                     "industries": "[\"Retail\"]"},
                    {"name": "B", "email": "b@example.com", "region": "Leeds",
                     "services": "not json"}
                ]
            }"#,
        )
        .unwrap();

        let mut records = export.consultants.into_iter();
        let first = ConsultantImport::try_from(records.next().unwrap()).unwrap();
        assert_eq!(first.profile.services, vec!["Strategy", "Cloud"]);
        assert_eq!(first.profile.industries, vec!["Retail"]);

        let second = ConsultantImport::try_from(records.next().unwrap()).unwrap();
        assert!(second.profile.services.is_empty());
        assert!(second.profile.industries.is_empty());
    }

    #[test]
    fn nested_records_are_carried_with_defaults() {
        let record: ConsultantRecord = serde_json::from_str(
            r#"{
                "name": "Ada Advisory", "email": "Ada@Example.com", "region": "London",
                "testimonials": [{"authorName": "Ann", "content": "Great", "rating": 7}],
                "caseStudies": [{"title": "ERP rollout", "technologies": "[\"NetSuite\"]"}],
                "portfolioItems": [{"title": "Chatbot", "displayOrder": 2, "isPublic": false}]
            }"#,
        )
        .unwrap();

        let import = ConsultantImport::try_from(record).unwrap();
        assert_eq!(import.profile.email.as_str(), "ada@example.com");
        assert_eq!(import.testimonials[0].rating, 5);
        assert!(import.case_studies[0].is_public);
        assert_eq!(import.case_studies[0].technologies, vec!["NetSuite"]);
        assert_eq!(import.portfolio_items[0].display_order, 2);
        assert!(!import.portfolio_items[0].is_public);
    }

    #[test]
    fn untitled_case_study_rejects_the_consultant() {
        let record: ConsultantRecord = serde_json::from_str(
            r#"{"name": "A", "email": "a@example.com", "region": "London",
                "caseStudies": [{"title": "  "}]}"#,
        )
        .unwrap();
        assert!(ConsultantImport::try_from(record).is_err());
    }

    #[test]
    fn invalid_company_record_is_rejected() {
        let record = CompanyRecord {
            name: "   ".to_string(),
            website: None,
            category: None,
            description: None,
            logo_url: None,
        };
        assert!(NewCompany::try_from(record).is_err());

        let record = CompanyRecord {
            name: "Acme".to_string(),
            website: Some("not a url".to_string()),
            category: None,
            description: None,
            logo_url: None,
        };
        assert!(NewCompany::try_from(record).is_err());
    }
}
