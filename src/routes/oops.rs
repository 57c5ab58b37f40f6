use actix_web::{Responder, get};

use crate::routes::error_response;
use crate::services::ServiceError;

pub const OOPS_MESSAGE: &str =
    "Expected: route used to showcase what happens when a request fails";

/// Always fails, so the error logging and the 500 path can be observed.
#[get("/oops")]
pub async fn oops() -> impl Responder {
    error_response(ServiceError::Internal(OOPS_MESSAGE.to_string()))
}
