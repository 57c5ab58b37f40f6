use serde::{Deserialize, Serialize};

use crate::domain::types::{City, FirstName, LastName, OwnerId, StreetAddress, Telephone};

/// A pet owner registered at the clinic.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub id: OwnerId,
    pub first_name: FirstName,
    pub last_name: LastName,
    pub address: StreetAddress,
    pub city: City,
    pub telephone: Telephone,
}

/// Data required to register a new owner.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewOwner {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub address: StreetAddress,
    pub city: City,
    pub telephone: Telephone,
}

impl NewOwner {
    #[must_use]
    pub fn new(
        first_name: FirstName,
        last_name: LastName,
        address: StreetAddress,
        city: City,
        telephone: Telephone,
    ) -> Self {
        Self {
            first_name,
            last_name,
            address,
            city,
            telephone,
        }
    }
}

/// Replacement values for every mutable owner field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateOwner {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub address: StreetAddress,
    pub city: City,
    pub telephone: Telephone,
}

impl From<NewOwner> for UpdateOwner {
    fn from(owner: NewOwner) -> Self {
        Self {
            first_name: owner.first_name,
            last_name: owner.last_name,
            address: owner.address,
            city: owner.city,
            telephone: owner.telephone,
        }
    }
}
