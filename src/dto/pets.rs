//! DTOs returned by the pet, visit and pet-type endpoints.

use serde::Serialize;

use crate::domain::pet::{Pet, PetType};
use crate::domain::visit::Visit;
use crate::dto::format_date;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDto {
    pub id: i32,
    pub name: String,
    /// Name of the pet type, `unknown` when it could not be resolved.
    pub r#type: String,
    pub birth_date: String,
}

impl From<Pet> for PetDto {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id.get(),
            name: pet.name.into_inner(),
            r#type: pet.pet_type.name,
            birth_date: format_date(pet.birth_date),
        }
    }
}

/// A pet together with its visits, as nested in the owner details.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDetailsDto {
    pub id: i32,
    pub name: String,
    pub r#type: String,
    pub birth_date: String,
    pub visits: Vec<VisitDto>,
}

impl PetDetailsDto {
    pub fn new(pet: Pet, visits: Vec<Visit>) -> Self {
        let PetDto {
            id,
            name,
            r#type,
            birth_date,
        } = PetDto::from(pet);

        Self {
            id,
            name,
            r#type,
            birth_date,
            visits: visits.into_iter().map(VisitDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitDto {
    pub id: i32,
    pub visit_date: String,
    pub description: String,
}

impl From<Visit> for VisitDto {
    fn from(visit: Visit) -> Self {
        Self {
            id: visit.id.get(),
            visit_date: format_date(visit.visit_date),
            description: visit.description.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetTypeDto {
    pub id: i32,
    pub name: String,
}

impl From<PetType> for PetTypeDto {
    fn from(pet_type: PetType) -> Self {
        Self {
            id: pet_type.id,
            name: pet_type.name,
        }
    }
}
