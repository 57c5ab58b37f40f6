use actix_web::{HttpResponse, Responder, get, post, put, web};

use crate::cache::PetTypeCache;
use crate::forms::pet::PetForm;
use crate::forms::visit::VisitForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::pets as pet_service;

#[get("/owners/{owner_id}/pets")]
pub async fn list_pets(
    owner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match pet_service::list_pets(repo.get_ref(), owner_id.into_inner()) {
        Ok(pets) => HttpResponse::Ok().json(pets),
        Err(err) => error_response(err),
    }
}

#[post("/owners/{owner_id}/pets")]
pub async fn create_pet(
    owner_id: web::Path<i32>,
    form: Option<web::Json<PetForm>>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match pet_service::create_pet(
        repo.get_ref(),
        owner_id.into_inner(),
        form.map(web::Json::into_inner),
    ) {
        Ok(pet) => HttpResponse::Created().json(pet),
        Err(err) => error_response(err),
    }
}

#[get("/owners/{owner_id}/pets/{pet_id}")]
pub async fn show_pet(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (owner_id, pet_id) = path.into_inner();

    match pet_service::get_pet(repo.get_ref(), owner_id, pet_id) {
        Ok(pet) => HttpResponse::Ok().json(pet),
        Err(err) => error_response(err),
    }
}

#[put("/owners/{owner_id}/pets/{pet_id}")]
pub async fn update_pet(
    path: web::Path<(i32, i32)>,
    form: Option<web::Json<PetForm>>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (owner_id, pet_id) = path.into_inner();

    match pet_service::update_pet(
        repo.get_ref(),
        owner_id,
        pet_id,
        form.map(web::Json::into_inner),
    ) {
        Ok(pet) => HttpResponse::Ok().json(pet),
        Err(err) => error_response(err),
    }
}

#[get("/owners/{owner_id}/pets/{pet_id}/visits")]
pub async fn list_visits(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (owner_id, pet_id) = path.into_inner();

    match pet_service::list_visits(repo.get_ref(), owner_id, pet_id) {
        Ok(visits) => HttpResponse::Ok().json(visits),
        Err(err) => error_response(err),
    }
}

#[post("/owners/{owner_id}/pets/{pet_id}/visits")]
pub async fn create_visit(
    path: web::Path<(i32, i32)>,
    form: Option<web::Json<VisitForm>>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (owner_id, pet_id) = path.into_inner();

    match pet_service::create_visit(
        repo.get_ref(),
        owner_id,
        pet_id,
        form.map(web::Json::into_inner),
    ) {
        Ok(visit) => HttpResponse::Created().json(visit),
        Err(err) => error_response(err),
    }
}

#[get("/pet/types")]
pub async fn list_pet_types(
    repo: web::Data<DieselRepository>,
    cache: web::Data<PetTypeCache>,
) -> impl Responder {
    match pet_service::list_pet_types(repo.get_ref(), cache.get_ref()) {
        Ok(pet_types) => HttpResponse::Ok().json(pet_types),
        Err(err) => error_response(err),
    }
}
