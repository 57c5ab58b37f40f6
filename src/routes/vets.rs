use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::vets::VetListDto;
use crate::forms::SearchParams;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::vets as vet_service;

#[get("/vets")]
pub async fn list_vets(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match vet_service::search_vets(
        repo.get_ref(),
        params.last_name.as_deref(),
        params.page(),
        params.page_size(),
    ) {
        Ok(page) => HttpResponse::Ok().json(VetListDto {
            vet_list: page.items,
            total_pages: page.total_pages,
        }),
        Err(err) => error_response(err),
    }
}

#[get("/vets/{vet_id}")]
pub async fn show_vet(vet_id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match vet_service::get_vet(repo.get_ref(), vet_id.into_inner()) {
        Ok(vet) => HttpResponse::Ok().json(vet),
        Err(err) => error_response(err),
    }
}
