//! Services handling owner search, details and registration.

use crate::domain::owner::{NewOwner, UpdateOwner};
use crate::domain::types::OwnerId;
use crate::dto::owners::{OwnerDetailsDto, OwnerDto};
use crate::dto::pets::PetDetailsDto;
use crate::forms::FormError;
use crate::forms::owner::OwnerForm;
use crate::pagination::Page;
use crate::repository::{LastNameQuery, OwnerReader, OwnerWriter, PetReader, VisitReader};
use crate::services::{ServiceError, ServiceResult, path_id};

/// Returns one page of owners whose last name starts with `last_name`.
pub fn search_owners<R>(
    repo: &R,
    last_name: Option<&str>,
    page: i64,
    page_size: i64,
) -> ServiceResult<Page<OwnerDto>>
where
    R: OwnerReader + PetReader + ?Sized,
{
    let query = LastNameQuery::new()
        .last_name(last_name)
        .paginate(page, page_size);
    let pagination = query.pagination.unwrap_or_default();

    let (total, owners) = repo.list_owners(query).map_err(|err| {
        log::error!("Failed to list owners: {err}");
        err
    })?;

    let items = owners
        .into_iter()
        .map(|owner| {
            let pets = repo.list_pets_by_owner(owner.id)?;
            Ok(OwnerDto::new(owner, &pets))
        })
        .collect::<ServiceResult<Vec<_>>>()?;

    log::info!(
        "Retrieved {} of {total} owners matching {last_name:?} (page {page})",
        items.len()
    );

    Ok(Page::from_total(items, total, pagination))
}

/// Loads an owner with every pet and each pet's visits.
pub fn get_owner_details<R>(repo: &R, owner_id: i32) -> ServiceResult<OwnerDetailsDto>
where
    R: OwnerReader + PetReader + VisitReader + ?Sized,
{
    let owner_id: OwnerId = path_id(owner_id)?;

    let owner = repo.get_owner_by_id(owner_id)?.ok_or_else(|| {
        log::warn!("Owner with ID {owner_id} not found");
        ServiceError::NotFound
    })?;

    let pets = repo
        .list_pets_by_owner(owner_id)?
        .into_iter()
        .map(|pet| {
            let visits = repo.list_visits_by_pet(pet.id)?;
            Ok(PetDetailsDto::new(pet, visits))
        })
        .collect::<ServiceResult<Vec<_>>>()?;

    Ok(OwnerDetailsDto::new(owner, pets))
}

/// Validates the submitted owner and stores it under a fresh id.
pub fn create_owner<R>(repo: &R, form: Option<OwnerForm>) -> ServiceResult<OwnerDto>
where
    R: OwnerWriter + ?Sized,
{
    let form = form.ok_or_else(|| FormError::missing_body("owner"))?;
    let new_owner = NewOwner::try_from(form)?;

    let owner = repo.create_owner(&new_owner).map_err(|err| {
        log::error!("Failed to create owner: {err}");
        err
    })?;

    log::info!("Created owner with ID {}", owner.id);
    Ok(OwnerDto::from(owner))
}

/// Overwrites every field of an existing owner.
pub fn update_owner<R>(repo: &R, owner_id: i32, form: Option<OwnerForm>) -> ServiceResult<OwnerDto>
where
    R: OwnerWriter + PetReader + ?Sized,
{
    let form = form.ok_or_else(|| FormError::missing_body("owner"))?;
    let updates = UpdateOwner::try_from(form)?;
    let owner_id: OwnerId = path_id(owner_id)?;

    let owner = repo.update_owner(owner_id, &updates).map_err(|err| {
        log::warn!("Failed to update owner {owner_id}: {err}");
        err
    })?;
    let pets = repo.list_pets_by_owner(owner_id)?;

    log::info!("Updated owner with ID {owner_id}");
    Ok(OwnerDto::new(owner, &pets))
}
