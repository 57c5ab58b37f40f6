//! Actix handlers mounted under `/api`.

use actix_web::{HttpResponse, web};

use crate::services::ServiceError;

pub mod oops;
pub mod owners;
pub mod pets;
pub mod vets;

/// Translates a service failure into the response the clients expect.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Form(err) => HttpResponse::BadRequest().json(err.field_errors()),
        ServiceError::TypeConstraint(message) => {
            log::warn!("Rejected request: {message}");
            HttpResponse::BadRequest().finish()
        }
        ServiceError::Repository(err) => {
            log::error!("Storage failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
        ServiceError::Internal(message) => {
            log::error!("Unhandled error: {message}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Registers every clinic endpoint on the given scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(owners::list_owners)
        .service(owners::create_owner)
        .service(owners::show_owner)
        .service(owners::update_owner)
        .service(pets::list_pets)
        .service(pets::create_pet)
        .service(pets::show_pet)
        .service(pets::update_pet)
        .service(pets::list_visits)
        .service(pets::create_visit)
        .service(pets::list_pet_types)
        .service(vets::list_vets)
        .service(vets::show_vet)
        .service(oops::oops);
}
