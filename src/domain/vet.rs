use serde::{Deserialize, Serialize};

use crate::domain::types::{FirstName, LastName, SpecialtyId, SpecialtyName, VetId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specialty {
    pub id: SpecialtyId,
    pub name: SpecialtyName,
}

/// A veterinarian together with their specialties.
///
/// Specialties are always held sorted by name, whatever order storage
/// returned them in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vet {
    pub id: VetId,
    pub first_name: FirstName,
    pub last_name: LastName,
    pub specialties: Vec<Specialty>,
}

impl Vet {
    #[must_use]
    pub fn new(
        id: VetId,
        first_name: FirstName,
        last_name: LastName,
        mut specialties: Vec<Specialty>,
    ) -> Self {
        specialties.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            id,
            first_name,
            last_name,
            specialties,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewVet {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub specialty_ids: Vec<SpecialtyId>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewSpecialty {
    pub name: SpecialtyName,
}
