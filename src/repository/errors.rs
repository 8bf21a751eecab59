use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failures of the data store, with the store's own message preserved.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// The store's message without the category prefix of `Display`.
    pub fn detail(&self) -> &str {
        match self {
            RepositoryError::NotFound => "Entity not found",
            RepositoryError::DatabaseError(message)
            | RepositoryError::ValidationError(message)
            | RepositoryError::ConnectionError(message)
            | RepositoryError::ConstraintViolation(message)
            | RepositoryError::Unexpected(message) => message,
        }
    }
}

fn constraint_label(kind: &DatabaseErrorKind) -> Option<&'static str> {
    match kind {
        DatabaseErrorKind::UniqueViolation => Some("unique"),
        DatabaseErrorKind::ForeignKeyViolation => Some("foreign key"),
        DatabaseErrorKind::NotNullViolation => Some("not null"),
        DatabaseErrorKind::CheckViolation => Some("check"),
        _ => None,
    }
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match constraint_label(&kind) {
                    Some(label) => {
                        RepositoryError::ConstraintViolation(format!("{label}: {message}"))
                    }
                    None => RepositoryError::DatabaseError(message),
                }
            }
            DieselError::SerializationError(e) | DieselError::DeserializationError(e) => {
                RepositoryError::ValidationError(e.to_string())
            }
            DieselError::QueryBuilderError(e) => {
                RepositoryError::ValidationError(format!("Query builder error: {e}"))
            }
            DieselError::RollbackTransaction
            | DieselError::AlreadyInTransaction
            | DieselError::NotInTransaction
            | DieselError::BrokenTransactionManager => {
                RepositoryError::DatabaseError(format!("Transaction error: {err}"))
            }
            _ => RepositoryError::Unexpected(err.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}
