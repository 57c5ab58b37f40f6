use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{OwnerId, PetId, PetName, PetTypeName};

/// Identifier reported for pets whose declared type is not a known one.
pub const UNKNOWN_PET_TYPE_ID: i32 = 0;
/// Name reported for pets whose declared type is not a known one.
pub const UNKNOWN_PET_TYPE_NAME: &str = "unknown";

/// Kind of animal (`Dog`, `Cat`, ...). Reference data, rarely changes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PetType {
    pub id: i32,
    pub name: String,
}

impl PetType {
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Sentinel substituted when a declared type cannot be resolved.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_PET_TYPE_ID, UNKNOWN_PET_TYPE_NAME)
    }

    pub fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_PET_TYPE_ID
    }
}

/// Data required to register a new pet type.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewPetType {
    pub name: PetTypeName,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: PetId,
    pub owner_id: OwnerId,
    pub name: PetName,
    pub birth_date: NaiveDate,
    pub pet_type: PetType,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewPet {
    pub owner_id: OwnerId,
    pub name: PetName,
    pub birth_date: NaiveDate,
    /// Resolved type; [`PetType::unknown`] is stored without a type reference.
    pub pet_type: PetType,
}

/// Replacement values for every mutable pet field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdatePet {
    pub name: PetName,
    pub birth_date: NaiveDate,
    pub pet_type: PetType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sentinel_has_zero_id() {
        let unknown = PetType::unknown();
        assert_eq!(unknown.id, 0);
        assert_eq!(unknown.name, "unknown");
        assert!(unknown.is_unknown());
        assert!(!PetType::new(1, "Dog").is_unknown());
    }
}
