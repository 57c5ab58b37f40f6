//! Diesel models representing pet owners.

use diesel::prelude::*;

use crate::domain::owner::{
    NewOwner as DomainNewOwner, Owner as DomainOwner, UpdateOwner as DomainUpdateOwner,
};
use crate::domain::types::{
    City, FirstName, LastName, OwnerId, StreetAddress, Telephone, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::owners)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::owner::Owner`].
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::owners)]
/// Insertable form of [`Owner`].
pub struct NewOwner<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub telephone: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::owners)]
/// Full replacement of every mutable [`Owner`] column.
pub struct UpdateOwner<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub telephone: &'a str,
}

impl TryFrom<Owner> for DomainOwner {
    type Error = TypeConstraintError;

    fn try_from(owner: Owner) -> Result<Self, Self::Error> {
        Ok(Self {
            id: OwnerId::try_from(owner.id)?,
            first_name: FirstName::new(owner.first_name)?,
            last_name: LastName::new(owner.last_name)?,
            address: StreetAddress::new(owner.address)?,
            city: City::new(owner.city)?,
            telephone: Telephone::new(owner.telephone)?,
        })
    }
}

impl<'a> From<&'a DomainNewOwner> for NewOwner<'a> {
    fn from(owner: &'a DomainNewOwner) -> Self {
        Self {
            first_name: owner.first_name.as_str(),
            last_name: owner.last_name.as_str(),
            address: owner.address.as_str(),
            city: owner.city.as_str(),
            telephone: owner.telephone.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateOwner> for UpdateOwner<'a> {
    fn from(owner: &'a DomainUpdateOwner) -> Self {
        Self {
            first_name: owner.first_name.as_str(),
            last_name: owner.last_name.as_str(),
            address: owner.address.as_str(),
            city: owner.city.as_str(),
            telephone: owner.telephone.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_domain_new() -> DomainNewOwner {
        DomainNewOwner::new(
            FirstName::new("John").unwrap(),
            LastName::new("Doe").unwrap(),
            StreetAddress::new("123 Main St").unwrap(),
            City::new("Springfield").unwrap(),
            Telephone::new("1234567890").unwrap(),
        )
    }

    #[test]
    fn from_domain_new_borrows_every_field() {
        let domain = sample_domain_new();
        let new: NewOwner = (&domain).into();
        assert_eq!(new.first_name, "John");
        assert_eq!(new.last_name, "Doe");
        assert_eq!(new.address, "123 Main St");
        assert_eq!(new.city, "Springfield");
        assert_eq!(new.telephone, "1234567890");

        let update_domain = DomainUpdateOwner::from(domain);
        let update: UpdateOwner = (&update_domain).into();
        assert_eq!(update.last_name, "Doe");
        assert_eq!(update.telephone, "1234567890");
    }

    #[test]
    fn owner_into_domain() {
        let db = Owner {
            id: 3,
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            address: "456 Elm St".into(),
            city: "Shelbyville".into(),
            telephone: "0987654321".into(),
        };
        let domain = DomainOwner::try_from(db).expect("valid owner");
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.last_name.as_str(), "Smith");
        assert_eq!(domain.telephone.as_str(), "0987654321");
    }

    #[test]
    fn corrupt_rows_are_rejected() {
        let db = Owner {
            id: 1,
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            address: "456 Elm St".into(),
            city: "Shelbyville".into(),
            telephone: "not-a-phone".into(),
        };
        assert_eq!(
            DomainOwner::try_from(db),
            Err(TypeConstraintError::InvalidTelephone)
        );
    }
}
