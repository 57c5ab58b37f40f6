use actix_web::{HttpResponse, Responder, get, post, put, web};

use crate::dto::owners::OwnerListDto;
use crate::forms::SearchParams;
use crate::forms::owner::OwnerForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::owners as owner_service;

#[get("/owners")]
pub async fn list_owners(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match owner_service::search_owners(
        repo.get_ref(),
        params.last_name.as_deref(),
        params.page(),
        params.page_size(),
    ) {
        Ok(page) => HttpResponse::Ok().json(OwnerListDto {
            owner_list: page.items,
            total_pages: page.total_pages,
        }),
        Err(err) => error_response(err),
    }
}

#[get("/owners/{owner_id}")]
pub async fn show_owner(
    owner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match owner_service::get_owner_details(repo.get_ref(), owner_id.into_inner()) {
        Ok(owner) => HttpResponse::Ok().json(owner),
        Err(err) => error_response(err),
    }
}

#[post("/owners")]
pub async fn create_owner(
    form: Option<web::Json<OwnerForm>>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match owner_service::create_owner(repo.get_ref(), form.map(web::Json::into_inner)) {
        Ok(owner) => HttpResponse::Created().json(owner),
        Err(err) => error_response(err),
    }
}

#[put("/owners/{owner_id}")]
pub async fn update_owner(
    owner_id: web::Path<i32>,
    form: Option<web::Json<OwnerForm>>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match owner_service::update_owner(
        repo.get_ref(),
        owner_id.into_inner(),
        form.map(web::Json::into_inner),
    ) {
        Ok(owner) => HttpResponse::Ok().json(owner),
        Err(err) => error_response(err),
    }
}
