//! DTOs returned by the owner endpoints.

use serde::Serialize;

use crate::domain::owner::Owner;
use crate::domain::pet::Pet;
use crate::dto::pets::PetDetailsDto;

/// Owner row in the search results, with the names of their pets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    /// Pet names sorted ascending.
    pub pets: Vec<String>,
}

impl OwnerDto {
    pub fn new(owner: Owner, pets: &[Pet]) -> Self {
        let mut pet_names: Vec<String> = pets.iter().map(|pet| pet.name.to_string()).collect();
        pet_names.sort();

        Self {
            id: owner.id.get(),
            first_name: owner.first_name.into_inner(),
            last_name: owner.last_name.into_inner(),
            address: owner.address.into_inner(),
            city: owner.city.into_inner(),
            telephone: owner.telephone.as_str().to_string(),
            pets: pet_names,
        }
    }
}

impl From<Owner> for OwnerDto {
    fn from(owner: Owner) -> Self {
        Self::new(owner, &[])
    }
}

/// Body of `GET /owners`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerListDto {
    pub owner_list: Vec<OwnerDto>,
    pub total_pages: usize,
}

/// Body of `GET /owners/{id}`: the owner with every pet and its visits.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDetailsDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<PetDetailsDto>,
}

impl OwnerDetailsDto {
    pub fn new(owner: Owner, pets: Vec<PetDetailsDto>) -> Self {
        let OwnerDto {
            id,
            first_name,
            last_name,
            address,
            city,
            telephone,
            ..
        } = OwnerDto::from(owner);

        Self {
            id,
            first_name,
            last_name,
            address,
            city,
            telephone,
            pets,
        }
    }
}
