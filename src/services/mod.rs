//! Request-independent workflows behind the HTTP handlers.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod case_studies;
pub mod companies;
pub mod consultants;
pub mod directory_import;
pub mod seo;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Forbidden(String),

    #[error("Type constraint violated: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Message suitable for a response body; store failures carry only the
    /// store's own message.
    pub fn detail(&self) -> String {
        match self {
            ServiceError::Repository(err) => err.detail().to_string(),
            other => other.to_string(),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Parses a positive integer path segment, treating anything else as a
/// missing record.
pub(crate) fn parse_path_id<T, F>(raw: &str, make: F) -> ServiceResult<T>
where
    F: FnOnce(i32) -> Result<T, TypeConstraintError>,
{
    raw.trim()
        .parse::<i32>()
        .ok()
        .and_then(|id| make(id).ok())
        .ok_or(ServiceError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ConsultantId;

    #[test]
    fn repository_detail_has_no_prefix() {
        let err = ServiceError::from(RepositoryError::DatabaseError(
            "no such table: companies".to_string(),
        ));
        assert_eq!(err.detail(), "no such table: companies");
        assert_eq!(
            ServiceError::Forbidden("Case study is not public".to_string()).detail(),
            "Case study is not public"
        );
    }

    #[test]
    fn path_ids_must_be_positive_integers() {
        assert_eq!(parse_path_id(" 7 ", ConsultantId::new).unwrap().get(), 7);
        for raw in ["0", "-1", "abc", "", "1.5"] {
            assert!(matches!(
                parse_path_id(raw, ConsultantId::new),
                Err(ServiceError::NotFound)
            ));
        }
    }
}
