//! Form for creating and replacing pets.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{
    domain::types::{PetName, PetTypeName, parse_calendar_date},
    forms::{FormError, calendar_date, not_blank},
};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
/// JSON body of `POST /owners/{id}/pets` and `PUT /owners/{id}/pets/{petId}`.
pub struct PetForm {
    /// Ignored; the path decides which pet is written.
    pub id: Option<i32>,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// Name of the pet type, resolved against the known types.
    #[validate(custom(function = "not_blank"))]
    pub r#type: String,
    #[validate(custom(function = "calendar_date"))]
    pub birth_date: String,
}

/// Validated pet data whose type name has not been resolved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PetPayload {
    pub name: PetName,
    pub type_name: PetTypeName,
    pub birth_date: NaiveDate,
}

impl TryFrom<PetForm> for PetPayload {
    type Error = FormError;

    fn try_from(form: PetForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            name: PetName::new(form.name).map_err(|e| FormError::constraint("name", e))?,
            type_name: PetTypeName::new(form.r#type)
                .map_err(|e| FormError::constraint("type", e))?,
            birth_date: parse_calendar_date(&form.birth_date)
                .map_err(|e| FormError::constraint("birthDate", e))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, pet_type: &str, birth_date: &str) -> PetForm {
        PetForm {
            id: None,
            name: name.into(),
            r#type: pet_type.into(),
            birth_date: birth_date.into(),
        }
    }

    #[test]
    fn valid_form_converts() {
        let payload = PetPayload::try_from(form("Fluffy", "Cat", "2020-01-01")).unwrap();
        assert_eq!(payload.name.as_str(), "Fluffy");
        assert_eq!(payload.type_name.as_str(), "Cat");
        assert_eq!(
            payload.birth_date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[test]
    fn invalid_fields_are_reported_by_json_name() {
        let cases = [
            (form("", "Cat", "2020-01-01"), "name"),
            (form("Fluffy", "", "2020-01-01"), "type"),
            (form("Fluffy", "Cat", ""), "birthDate"),
            (form("Fluffy", "Cat", "invalid-date"), "birthDate"),
        ];

        for (form, expected_key) in cases {
            let err = PetPayload::try_from(form).unwrap_err();
            assert!(
                err.field_errors().contains_key(expected_key),
                "expected error for {expected_key}, got {err}"
            );
        }
    }

    #[test]
    fn json_uses_type_and_birth_date_keys() {
        let form: PetForm =
            serde_json::from_str(r#"{"name":"Rex","type":"Dog","birthDate":"2019-05-05"}"#)
                .unwrap();
        assert_eq!(form.r#type, "Dog");
        assert_eq!(form.birth_date, "2019-05-05");
    }
}
