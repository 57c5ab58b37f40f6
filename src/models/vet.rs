//! Diesel models representing veterinarians and their specialties.

use diesel::prelude::*;

use crate::domain::types::{
    FirstName, LastName, SpecialtyId, SpecialtyName, TypeConstraintError, VetId,
};
use crate::domain::vet::{
    NewSpecialty as DomainNewSpecialty, NewVet as DomainNewVet, Specialty as DomainSpecialty,
    Vet as DomainVet,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::vets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::vet::Vet`] without its specialties.
pub struct Vet {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::vets)]
pub struct NewVet<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::specialties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Specialty {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::specialties)]
pub struct NewSpecialty<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Associations, Identifiable)]
#[diesel(primary_key(vet_id, specialty_id))]
#[diesel(belongs_to(Vet, foreign_key = vet_id))]
#[diesel(belongs_to(Specialty, foreign_key = specialty_id))]
#[diesel(table_name = crate::schema::vet_specialties)]
/// Association table linking vets to specialties.
pub struct VetSpecialty {
    pub vet_id: i32,
    pub specialty_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::vet_specialties)]
/// Insertable variant of [`VetSpecialty`].
pub struct NewVetSpecialty {
    pub vet_id: i32,
    pub specialty_id: i32,
}

impl TryFrom<Specialty> for DomainSpecialty {
    type Error = TypeConstraintError;

    fn try_from(specialty: Specialty) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SpecialtyId::try_from(specialty.id)?,
            name: SpecialtyName::new(specialty.name)?,
        })
    }
}

/// A vet row together with the specialty rows linked to it.
impl TryFrom<(Vet, Vec<Specialty>)> for DomainVet {
    type Error = TypeConstraintError;

    fn try_from((vet, specialties): (Vet, Vec<Specialty>)) -> Result<Self, Self::Error> {
        let specialties = specialties
            .into_iter()
            .map(DomainSpecialty::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(
            VetId::try_from(vet.id)?,
            FirstName::new(vet.first_name)?,
            LastName::new(vet.last_name)?,
            specialties,
        ))
    }
}

impl<'a> From<&'a DomainNewVet> for NewVet<'a> {
    fn from(vet: &'a DomainNewVet) -> Self {
        Self {
            first_name: vet.first_name.as_str(),
            last_name: vet.last_name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainNewSpecialty> for NewSpecialty<'a> {
    fn from(specialty: &'a DomainNewSpecialty) -> Self {
        Self {
            name: specialty.name.as_str(),
        }
    }
}
