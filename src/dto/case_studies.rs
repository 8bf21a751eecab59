//! DTOs exposed by the case study endpoints.

use serde::Serialize;

use crate::domain::showcase::CaseStudy;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantCaseStudies {
    pub case_studies: Vec<CaseStudy>,
}

/// Contact card of the consultant behind a case study.
#[derive(Debug, Serialize, PartialEq)]
pub struct CaseStudyAuthor {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CaseStudyWithAuthor {
    #[serde(flatten)]
    pub case_study: CaseStudy,
    pub consultant: CaseStudyAuthor,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyDetail {
    pub case_study: CaseStudyWithAuthor,
}
