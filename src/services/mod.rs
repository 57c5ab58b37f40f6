//! Use cases behind the HTTP routes.
//!
//! Services are generic over the repository traits so they can run against
//! [`crate::repository::DieselRepository`] in production and the mockall
//! repository in tests.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod owners;
pub mod pets;
pub mod vets;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("resource not found")]
    NotFound,

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(err.to_string())
    }
}

/// Parses an identifier taken from the request path.
///
/// Zero and negative ids can never exist, so they are reported as missing.
pub(crate) fn path_id<T>(raw: i32) -> ServiceResult<T>
where
    T: TryFrom<i32, Error = TypeConstraintError>,
{
    T::try_from(raw).map_err(|_| ServiceError::NotFound)
}
