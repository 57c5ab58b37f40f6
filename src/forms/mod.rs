//! Request bodies accepted by the clinic routes.
//!
//! Forms are deserialized leniently (missing fields become empty strings),
//! validated with `validator`, and only then converted into domain values.
//! Every failure is reported per field under the field's JSON name.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::types::{TypeConstraintError, is_ten_digit_phone, parse_calendar_date};
use crate::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

pub mod owner;
pub mod pet;
pub mod visit;

pub const BLANK_MESSAGE: &str = "must not be blank";
pub const TELEPHONE_MESSAGE: &str = "Telephone must be a 10-digit number";
pub const DATE_MESSAGE: &str = "must be a valid date (yyyy-MM-dd)";

/// Query string of the owner and vet searches (`?lastName=&page=&pageSize=`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub last_name: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl SearchParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// Field name mapped to a human-readable message, ordered by field name.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("invalid fields: {}", .0.keys().cloned().collect::<Vec<_>>().join(", "))]
    Invalid(FieldErrors),
}

impl FormError {
    pub fn field(name: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(json_field_name(name), message.into());
        Self::Invalid(errors)
    }

    /// The request carried no usable body for the named entity.
    pub fn missing_body(entity: &str) -> Self {
        Self::field(entity, BLANK_MESSAGE)
    }

    /// Maps a value-object failure onto the field it was built from.
    pub fn constraint(name: &str, err: TypeConstraintError) -> Self {
        let message = match err {
            TypeConstraintError::EmptyString => BLANK_MESSAGE.to_string(),
            TypeConstraintError::InvalidTelephone => TELEPHONE_MESSAGE.to_string(),
            TypeConstraintError::InvalidDate(_) => DATE_MESSAGE.to_string(),
            other => other.to_string(),
        };
        Self::field(name, message)
    }

    pub fn field_errors(&self) -> &FieldErrors {
        match self {
            Self::Invalid(errors) => errors,
        }
    }
}

impl From<ValidationErrors> for FormError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let message = field_errors
                .first()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => error.code.to_string(),
                })
                .unwrap_or_else(|| BLANK_MESSAGE.to_string());
            fields.insert(json_field_name(&field), message);
        }
        Self::Invalid(fields)
    }
}

/// Converts a Rust field identifier (`birth_date`, `r#type`) to its JSON name.
fn json_field_name(field: &str) -> String {
    let field = field.strip_prefix("r#").unwrap_or(field);
    let mut name = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            name.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            name.push(ch);
        }
    }
    name
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("blank", BLANK_MESSAGE));
    }
    Ok(())
}

pub(crate) fn ten_digit_phone(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if !is_ten_digit_phone(value.trim()) {
        return Err(invalid("telephone", TELEPHONE_MESSAGE));
    }
    Ok(())
}

pub(crate) fn calendar_date(value: &str) -> Result<(), ValidationError> {
    match parse_calendar_date(value) {
        Ok(_) => Ok(()),
        Err(TypeConstraintError::EmptyString) => Err(invalid("blank", BLANK_MESSAGE)),
        Err(_) => Err(invalid("date", DATE_MESSAGE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_identifiers_become_json_names() {
        assert_eq!(json_field_name("first_name"), "firstName");
        assert_eq!(json_field_name("birth_date"), "birthDate");
        assert_eq!(json_field_name("r#type"), "type");
        assert_eq!(json_field_name("visitDate"), "visitDate");
    }

    /// Reports the error keys of an empty body, then fills exactly those
    /// keys and expects the form to pass. A key that is not the field's
    /// JSON name would leave the field blank and fail the second step.
    fn error_keys_match_json_names<F, T>() -> Vec<String>
    where
        F: serde::de::DeserializeOwned,
        T: TryFrom<F, Error = FormError>,
    {
        let empty: F = serde_json::from_str("{}").unwrap();
        let keys: Vec<String> = match T::try_from(empty) {
            Err(err) => err.field_errors().keys().cloned().collect(),
            Ok(_) => panic!("empty body must be rejected"),
        };

        let body: serde_json::Map<String, serde_json::Value> = keys
            .iter()
            .map(|key| {
                let value = match key.as_str() {
                    "telephone" => "1234567890",
                    "birthDate" | "visitDate" => "2020-01-01",
                    _ => "Rex",
                };
                (key.clone(), serde_json::Value::from(value))
            })
            .collect();
        let filled: F = serde_json::from_value(serde_json::Value::Object(body)).unwrap();
        if let Err(err) = T::try_from(filled) {
            panic!("keys {keys:?} do not reach the form fields: {err}");
        }
        keys
    }

    #[test]
    fn error_keys_are_the_json_field_names() {
        use crate::domain::owner::NewOwner;
        use crate::forms::owner::OwnerForm;
        use crate::forms::pet::{PetForm, PetPayload};
        use crate::forms::visit::{VisitForm, VisitPayload};

        assert_eq!(
            error_keys_match_json_names::<OwnerForm, NewOwner>(),
            vec!["address", "city", "firstName", "lastName", "telephone"]
        );
        assert_eq!(
            error_keys_match_json_names::<PetForm, PetPayload>(),
            vec!["birthDate", "name", "type"]
        );
        assert_eq!(
            error_keys_match_json_names::<VisitForm, VisitPayload>(),
            vec!["description", "visitDate"]
        );
    }

    #[test]
    fn search_params_default_to_first_page_of_five() {
        let params = SearchParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), 5);

        let params = SearchParams {
            last_name: Some("Sm".into()),
            page: Some(3),
            page_size: Some(0),
        };
        assert_eq!(params.page(), 3);
        assert_eq!(params.page_size(), 0);
    }

    #[test]
    fn missing_body_is_reported_under_entity_name() {
        let err = FormError::missing_body("owner");
        assert_eq!(
            err.field_errors().get("owner").map(String::as_str),
            Some("must not be blank")
        );
    }

    #[test]
    fn constraint_errors_use_field_messages() {
        let err = FormError::constraint("telephone", TypeConstraintError::InvalidTelephone);
        assert_eq!(
            err.field_errors().get("telephone").map(String::as_str),
            Some("Telephone must be a 10-digit number")
        );
    }
}
