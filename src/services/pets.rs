//! Services handling pets, their visits and the pet-type reference list.

use crate::cache::PetTypeCache;
use crate::domain::pet::{NewPet, Pet, PetType, UpdatePet};
use crate::domain::types::{OwnerId, PetId};
use crate::dto::pets::{PetDto, PetTypeDto, VisitDto};
use crate::forms::FormError;
use crate::forms::pet::{PetForm, PetPayload};
use crate::forms::visit::{VisitForm, VisitPayload};
use crate::repository::{
    OwnerReader, PetReader, PetTypeReader, PetWriter, VisitReader, VisitWriter,
};
use crate::services::{ServiceError, ServiceResult, path_id};

/// Loads a pet only if it belongs to the given owner.
fn owned_pet<R>(repo: &R, owner_id: OwnerId, pet_id: PetId) -> ServiceResult<Pet>
where
    R: PetReader + ?Sized,
{
    match repo.get_pet_by_id(pet_id)? {
        Some(pet) if pet.owner_id == owner_id => Ok(pet),
        _ => {
            log::warn!("No pet found for Pet ID {pet_id} of Owner ID {owner_id}");
            Err(ServiceError::NotFound)
        }
    }
}

fn ensure_owner_exists<R>(repo: &R, owner_id: OwnerId) -> ServiceResult<()>
where
    R: OwnerReader + ?Sized,
{
    if repo.get_owner_by_id(owner_id)?.is_none() {
        log::warn!("Owner with ID {owner_id} not found");
        return Err(ServiceError::NotFound);
    }
    Ok(())
}

/// Resolves a declared type name, falling back to the `unknown` sentinel.
pub fn resolve_pet_type<R>(repo: &R, name: &str) -> ServiceResult<PetType>
where
    R: PetTypeReader + ?Sized,
{
    match repo.find_pet_type_by_name(name)? {
        Some(pet_type) => Ok(pet_type),
        None => {
            log::warn!("Unknown pet type {name:?}, using the unknown type");
            Ok(PetType::unknown())
        }
    }
}

/// Pets of an owner sorted by name. An owner without pets is reported as
/// not found.
pub fn list_pets<R>(repo: &R, owner_id: i32) -> ServiceResult<Vec<PetDto>>
where
    R: PetReader + ?Sized,
{
    let owner_id: OwnerId = path_id(owner_id)?;

    let pets = repo.list_pets_by_owner(owner_id).map_err(|err| {
        log::error!("Failed to list pets for Owner ID {owner_id}: {err}");
        err
    })?;

    if pets.is_empty() {
        log::warn!("No pets found for Owner ID {owner_id}");
        return Err(ServiceError::NotFound);
    }

    log::info!("Retrieved {} pets for Owner ID {owner_id}", pets.len());
    Ok(pets.into_iter().map(PetDto::from).collect())
}

pub fn get_pet<R>(repo: &R, owner_id: i32, pet_id: i32) -> ServiceResult<PetDto>
where
    R: PetReader + ?Sized,
{
    let pet = owned_pet(repo, path_id(owner_id)?, path_id(pet_id)?)?;
    Ok(PetDto::from(pet))
}

/// Registers a new pet for an existing owner.
pub fn create_pet<R>(repo: &R, owner_id: i32, form: Option<PetForm>) -> ServiceResult<PetDto>
where
    R: OwnerReader + PetTypeReader + PetWriter + ?Sized,
{
    let form = form.ok_or_else(|| FormError::missing_body("pet"))?;
    let payload = PetPayload::try_from(form)?;
    let owner_id: OwnerId = path_id(owner_id)?;

    ensure_owner_exists(repo, owner_id)?;
    let pet_type = resolve_pet_type(repo, payload.type_name.as_str())?;

    let pet = repo
        .create_pet(&NewPet {
            owner_id,
            name: payload.name,
            birth_date: payload.birth_date,
            pet_type,
        })
        .map_err(|err| {
            log::error!("Failed to create pet for Owner ID {owner_id}: {err}");
            err
        })?;

    log::info!("Created pet with ID {}", pet.id);
    Ok(PetDto::from(pet))
}

/// Overwrites the name, birth date and type of an owner's pet.
pub fn update_pet<R>(
    repo: &R,
    owner_id: i32,
    pet_id: i32,
    form: Option<PetForm>,
) -> ServiceResult<PetDto>
where
    R: PetReader + PetTypeReader + PetWriter + ?Sized,
{
    let form = form.ok_or_else(|| FormError::missing_body("pet"))?;
    let payload = PetPayload::try_from(form)?;

    let pet = owned_pet(repo, path_id(owner_id)?, path_id(pet_id)?)?;
    let pet_type = resolve_pet_type(repo, payload.type_name.as_str())?;

    let updated = repo.update_pet(
        pet.id,
        &UpdatePet {
            name: payload.name,
            birth_date: payload.birth_date,
            pet_type,
        },
    )?;

    log::info!("Updated pet with ID {}", updated.id);
    Ok(PetDto::from(updated))
}

/// Visits of an owner's pet ordered by date. A pet without visits is
/// reported as not found.
pub fn list_visits<R>(repo: &R, owner_id: i32, pet_id: i32) -> ServiceResult<Vec<VisitDto>>
where
    R: PetReader + VisitReader + ?Sized,
{
    let pet = owned_pet(repo, path_id(owner_id)?, path_id(pet_id)?)?;

    let visits = repo.list_visits_by_pet(pet.id)?;
    if visits.is_empty() {
        log::warn!("No visits found for Pet ID {}", pet.id);
        return Err(ServiceError::NotFound);
    }

    log::info!("Retrieved {} visits for Pet ID {}", visits.len(), pet.id);
    Ok(visits.into_iter().map(VisitDto::from).collect())
}

pub fn create_visit<R>(
    repo: &R,
    owner_id: i32,
    pet_id: i32,
    form: Option<VisitForm>,
) -> ServiceResult<VisitDto>
where
    R: PetReader + VisitWriter + ?Sized,
{
    let form = form.ok_or_else(|| FormError::missing_body("visit"))?;
    let payload = VisitPayload::try_from(form)?;

    let pet = owned_pet(repo, path_id(owner_id)?, path_id(pet_id)?)?;

    let visit = repo
        .create_visit(&payload.into_domain(pet.id))
        .map_err(|err| {
            log::error!("Failed to create visit for Pet ID {}: {err}", pet.id);
            err
        })?;

    log::info!("Created visit with ID {} for Pet ID {}", visit.id, pet.id);
    Ok(VisitDto::from(visit))
}

/// All pet types sorted by name, served from `cache` while it is fresh.
pub fn list_pet_types<R>(repo: &R, cache: &PetTypeCache) -> ServiceResult<Vec<PetTypeDto>>
where
    R: PetTypeReader + ?Sized,
{
    let pet_types = cache
        .get_or_load(|| repo.list_pet_types())
        .map_err(|err| {
            log::error!("Failed to load pet types: {err}");
            err
        })?;

    Ok(pet_types.into_iter().map(PetTypeDto::from).collect())
}
