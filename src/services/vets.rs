//! Services exposing the veterinarian directory.

use crate::domain::types::VetId;
use crate::dto::vets::VetDto;
use crate::pagination::Page;
use crate::repository::{LastNameQuery, VetReader};
use crate::services::{ServiceError, ServiceResult, path_id};

/// Returns one page of vets whose last name starts with `last_name`.
pub fn search_vets<R>(
    repo: &R,
    last_name: Option<&str>,
    page: i64,
    page_size: i64,
) -> ServiceResult<Page<VetDto>>
where
    R: VetReader + ?Sized,
{
    let query = LastNameQuery::new()
        .last_name(last_name)
        .paginate(page, page_size);
    let pagination = query.pagination.unwrap_or_default();

    let (total, vets) = repo.list_vets(query).map_err(|err| {
        log::error!("Failed to list veterinarians: {err}");
        err
    })?;

    log::info!("Retrieved {} of {total} veterinarians", vets.len());

    let items = vets.into_iter().map(VetDto::from).collect();
    Ok(Page::from_total(items, total, pagination))
}

/// Loads one vet with specialties sorted by name.
pub fn get_vet<R>(repo: &R, vet_id: i32) -> ServiceResult<VetDto>
where
    R: VetReader + ?Sized,
{
    let vet_id: VetId = path_id(vet_id)?;

    let vet = repo.get_vet_by_id(vet_id)?.ok_or_else(|| {
        log::warn!("Veterinarian with ID {vet_id} not found");
        ServiceError::NotFound
    })?;

    Ok(VetDto::from(vet))
}
