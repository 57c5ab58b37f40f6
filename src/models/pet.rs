//! Diesel models representing pets and pet types.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::pet::{
    NewPet as DomainNewPet, NewPetType as DomainNewPetType, Pet as DomainPet,
    PetType as DomainPetType, UpdatePet as DomainUpdatePet,
};
use crate::domain::types::{OwnerId, PetId, PetName, TypeConstraintError};
use crate::models::owner::Owner;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::pet::PetType`].
pub struct PetType {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::types)]
pub struct NewPetType<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::pets)]
#[diesel(belongs_to(Owner, foreign_key = owner_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::pet::Pet`].
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub type_id: Option<i32>,
    pub owner_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::pets)]
/// Insertable form of [`Pet`].
pub struct NewPet<'a> {
    pub name: &'a str,
    pub birth_date: NaiveDate,
    pub type_id: Option<i32>,
    pub owner_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::pets)]
#[diesel(treat_none_as_null = true)]
/// Full replacement of every mutable [`Pet`] column, clearing `type_id`
/// when the pet's type is unknown.
pub struct UpdatePet<'a> {
    pub name: &'a str,
    pub birth_date: NaiveDate,
    pub type_id: Option<i32>,
}

/// Column value stored for a resolved pet type.
fn stored_type_id(pet_type: &DomainPetType) -> Option<i32> {
    (!pet_type.is_unknown()).then_some(pet_type.id)
}

impl From<PetType> for DomainPetType {
    fn from(pet_type: PetType) -> Self {
        Self::new(pet_type.id, pet_type.name)
    }
}

impl<'a> From<&'a DomainNewPetType> for NewPetType<'a> {
    fn from(pet_type: &'a DomainNewPetType) -> Self {
        Self {
            name: pet_type.name.as_str(),
        }
    }
}

/// A pet row together with its joined type row, if any.
impl TryFrom<(Pet, Option<PetType>)> for DomainPet {
    type Error = TypeConstraintError;

    fn try_from((pet, pet_type): (Pet, Option<PetType>)) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PetId::try_from(pet.id)?,
            owner_id: OwnerId::try_from(pet.owner_id)?,
            name: PetName::new(pet.name)?,
            birth_date: pet.birth_date,
            pet_type: pet_type.map_or_else(DomainPetType::unknown, Into::into),
        })
    }
}

impl<'a> From<&'a DomainNewPet> for NewPet<'a> {
    fn from(pet: &'a DomainNewPet) -> Self {
        Self {
            name: pet.name.as_str(),
            birth_date: pet.birth_date,
            type_id: stored_type_id(&pet.pet_type),
            owner_id: pet.owner_id.get(),
        }
    }
}

impl<'a> From<&'a DomainUpdatePet> for UpdatePet<'a> {
    fn from(pet: &'a DomainUpdatePet) -> Self {
        Self {
            name: pet.name.as_str(),
            birth_date: pet.birth_date,
            type_id: stored_type_id(&pet.pet_type),
        }
    }
}
