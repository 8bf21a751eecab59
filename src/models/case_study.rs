use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::showcase::{CaseStudy as DomainCaseStudy, NewCaseStudy as DomainNewCaseStudy};
use crate::domain::types::{CaseStudyId, ConsultantId, TypeConstraintError};
use crate::models::consultant::Consultant;
use crate::normalize::{ArrayField, encode_array_field, parse_array_field};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::case_studies)]
#[diesel(belongs_to(Consultant, foreign_key = consultant_id))]
/// Diesel model for [`crate::domain::showcase::CaseStudy`].
pub struct CaseStudy {
    pub id: i32,
    pub consultant_id: i32,
    pub title: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub results: String,
    pub technologies: Option<String>,
    pub industry: Option<String>,
    pub client_size: Option<String>,
    pub duration: Option<String>,
    pub budget: Option<String>,
    pub attachments: Option<String>,
    pub is_public: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::case_studies)]
pub struct NewCaseStudy<'a> {
    pub consultant_id: i32,
    pub title: &'a str,
    pub description: &'a str,
    pub challenge: &'a str,
    pub solution: &'a str,
    pub results: &'a str,
    pub technologies: String,
    pub industry: Option<&'a str>,
    pub client_size: Option<&'a str>,
    pub duration: Option<&'a str>,
    pub budget: Option<&'a str>,
    pub attachments: String,
    pub is_public: bool,
}

impl<'a> NewCaseStudy<'a> {
    pub fn from_domain(consultant_id: ConsultantId, study: &'a DomainNewCaseStudy) -> Self {
        Self {
            consultant_id: consultant_id.get(),
            title: study.title.as_str(),
            description: study.description.as_str(),
            challenge: study.challenge.as_str(),
            solution: study.solution.as_str(),
            results: study.results.as_str(),
            technologies: encode_array_field(&study.technologies),
            industry: study.industry.as_deref(),
            client_size: study.client_size.as_deref(),
            duration: study.duration.as_deref(),
            budget: study.budget.as_deref(),
            attachments: encode_array_field(&study.attachments),
            is_public: study.is_public,
        }
    }
}

impl TryFrom<CaseStudy> for DomainCaseStudy {
    type Error = TypeConstraintError;

    fn try_from(study: CaseStudy) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CaseStudyId::new(study.id)?,
            consultant_id: ConsultantId::new(study.consultant_id)?,
            title: study.title,
            description: study.description,
            challenge: study.challenge,
            solution: study.solution,
            results: study.results,
            technologies: parse_array_field(study.technologies.map(ArrayField::Raw)),
            industry: study.industry,
            client_size: study.client_size,
            duration: study.duration,
            budget: study.budget,
            attachments: parse_array_field(study.attachments.map(ArrayField::Raw)),
            is_public: study.is_public,
            created_at: study.created_at,
            updated_at: study.updated_at,
        })
    }
}
