//! Form for creating and replacing owners.

use serde::Deserialize;
use validator::Validate;

use crate::{
    domain::{
        owner::{NewOwner, UpdateOwner},
        types::{City, FirstName, LastName, StreetAddress, Telephone},
    },
    forms::{FormError, not_blank, ten_digit_phone},
};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
/// JSON body of `POST /owners` and `PUT /owners/{id}`.
pub struct OwnerForm {
    /// Ignored; the path decides which owner is written.
    pub id: Option<i32>,
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    #[validate(custom(function = "not_blank"))]
    pub city: String,
    #[validate(custom(function = "ten_digit_phone"))]
    pub telephone: String,
}

impl TryFrom<OwnerForm> for NewOwner {
    type Error = FormError;

    fn try_from(form: OwnerForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewOwner::new(
            FirstName::new(form.first_name).map_err(|e| FormError::constraint("firstName", e))?,
            LastName::new(form.last_name).map_err(|e| FormError::constraint("lastName", e))?,
            StreetAddress::new(form.address).map_err(|e| FormError::constraint("address", e))?,
            City::new(form.city).map_err(|e| FormError::constraint("city", e))?,
            Telephone::new(form.telephone).map_err(|e| FormError::constraint("telephone", e))?,
        ))
    }
}

impl TryFrom<OwnerForm> for UpdateOwner {
    type Error = FormError;

    fn try_from(form: OwnerForm) -> Result<Self, Self::Error> {
        NewOwner::try_from(form).map(UpdateOwner::from)
    }
}
