//! DTOs returned by the veterinarian endpoints.

use serde::Serialize;

use crate::domain::vet::{Specialty, Vet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialtyDto {
    pub id: i32,
    pub name: String,
}

impl From<Specialty> for SpecialtyDto {
    fn from(specialty: Specialty) -> Self {
        Self {
            id: specialty.id.get(),
            name: specialty.name.into_inner(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VetDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Sorted by name; empty when the vet has none.
    pub specialties: Vec<SpecialtyDto>,
}

impl From<Vet> for VetDto {
    fn from(vet: Vet) -> Self {
        Self {
            id: vet.id.get(),
            first_name: vet.first_name.into_inner(),
            last_name: vet.last_name.into_inner(),
            specialties: vet.specialties.into_iter().map(SpecialtyDto::from).collect(),
        }
    }
}

/// Body of `GET /vets`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VetListDto {
    pub vet_list: Vec<VetDto>,
    pub total_pages: usize,
}
