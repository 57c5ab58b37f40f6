//! Errors surfaced by the Diesel-backed record store.

use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("storage failure: {0}")]
    DatabaseError(String),

    #[error("invalid stored data: {0}")]
    ValidationError(String),

    #[error("pool unavailable: {0}")]
    ConnectionError(String),

    #[error("constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("unexpected storage error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Names the SQLite constraint behind a failed write, if any.
fn violated_constraint(kind: &DatabaseErrorKind) -> Option<&'static str> {
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
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(kind, info) => match violated_constraint(&kind) {
                Some(constraint) => {
                    Self::ConstraintViolation(format!("{constraint}: {}", info.message()))
                }
                None => Self::DatabaseError(info.message().to_string()),
            },
            DieselError::SerializationError(e)
            | DieselError::DeserializationError(e)
            | DieselError::QueryBuilderError(e) => Self::ValidationError(e.to_string()),
            DieselError::RollbackTransaction => {
                Self::DatabaseError("transaction rolled back".to_string())
            }
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        Self::ConnectionError(err.to_string())
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        Self::ConnectionError(err.to_string())
    }
}

/// Rows that violate a value-object invariant are reported as invalid data.
impl From<TypeConstraintError> for RepositoryError {
    fn from(err: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(err.to_string())
    }
}
