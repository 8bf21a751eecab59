//! Public case study lookups.

use crate::domain::types::{CaseStudyId, ConsultantId};
use crate::dto::case_studies::{
    CaseStudyAuthor, CaseStudyDetail, CaseStudyWithAuthor, ConsultantCaseStudies,
};
use crate::repository::{ConsultantReader, ShowcaseReader};
use crate::services::{ServiceError, ServiceResult, parse_path_id};

/// Public case studies of one consultant, newest first.
///
/// Fails with [`ServiceError::NotFound`] when the consultant does not exist.
pub fn list_consultant_case_studies<R>(
    repo: &R,
    raw_id: &str,
) -> ServiceResult<ConsultantCaseStudies>
where
    R: ConsultantReader + ShowcaseReader + ?Sized,
{
    let id = parse_path_id(raw_id, ConsultantId::new)?;

    if repo.get_consultant_by_id(id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    Ok(ConsultantCaseStudies {
        case_studies: repo.list_public_case_studies(&[id])?,
    })
}

/// A single case study with its consultant's contact card.
pub fn get_case_study<R>(repo: &R, raw_id: &str) -> ServiceResult<CaseStudyDetail>
where
    R: ConsultantReader + ShowcaseReader + ?Sized,
{
    let id = parse_path_id(raw_id, CaseStudyId::new)?;

    let case_study = repo
        .get_case_study_by_id(id)?
        .ok_or(ServiceError::NotFound)?;

    if !case_study.is_public {
        return Err(ServiceError::Forbidden(
            "Case study is not public".to_string(),
        ));
    }

    let consultant = repo
        .get_consultant_by_id(case_study.consultant_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(CaseStudyDetail {
        case_study: CaseStudyWithAuthor {
            case_study,
            consultant: CaseStudyAuthor {
                id: consultant.id.get(),
                name: consultant.name,
                email: consultant.email,
            },
        },
    })
}
