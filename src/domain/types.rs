//! Value objects for clinic records.
//!
//! Identities, names, telephones and visit notes are checked once on
//! construction; code holding one of these types may rely on its contents.

use std::fmt::{Display, Formatter};
use std::ops::Deref;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    #[error("identity must be at least 1")]
    NonPositiveId,
    /// Nothing but whitespace (or markup, for visit notes) was supplied.
    #[error("must not be blank")]
    EmptyString,
    /// Telephone is not made of exactly ten digits.
    #[error("Telephone must be a 10-digit number")]
    InvalidTelephone,
    /// Provided date could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Declares a record identity. Only values of at least 1 are accepted.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
        )]
        pub struct $name(i32);

        impl $name {
            pub fn new(raw: i32) -> Result<Self, TypeConstraintError> {
                (raw >= 1)
                    .then_some(Self(raw))
                    .ok_or(TypeConstraintError::NonPositiveId)
            }

            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                Display::fmt(&self.0, f)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(raw: i32) -> Result<Self, TypeConstraintError> {
                Self::new(raw)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> i32 {
                id.0
            }
        }
    };
}

record_id!(
    /// Identity of a pet owner.
    OwnerId
);
record_id!(
    /// Identity of a pet.
    PetId
);
record_id!(
    /// Identity of a visit.
    VisitId
);
record_id!(
    /// Identity of a veterinarian.
    VetId
);
record_id!(
    /// Identity of a veterinary specialty.
    SpecialtyId
);

/// Trims `raw` and rejects what is left if it is empty.
fn trimmed_non_blank(raw: &str) -> Result<String, TypeConstraintError> {
    match raw.trim() {
        "" => Err(TypeConstraintError::EmptyString),
        trimmed => Ok(trimmed.to_owned()),
    }
}

fn sanitized_non_blank(raw: &str) -> Result<String, TypeConstraintError> {
    trimmed_non_blank(&ammonia::clean(raw))
}

fn ten_digits(raw: &str) -> Result<String, TypeConstraintError> {
    let trimmed = raw.trim();
    if is_ten_digit_phone(trimmed) {
        Ok(trimmed.to_owned())
    } else {
        Err(TypeConstraintError::InvalidTelephone)
    }
}

/// Declares a text value whose contents pass through `$normalize` first.
macro_rules! text_value {
    ($(#[$meta:meta])* $name:ident, $normalize:path) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl AsRef<str>) -> Result<Self, TypeConstraintError> {
                $normalize(raw.as_ref()).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(raw: String) -> Result<Self, TypeConstraintError> {
                Self::new(raw)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

text_value!(
    /// Given name of an owner or veterinarian.
    FirstName,
    trimmed_non_blank
);
text_value!(
    /// Family name; the key owner and vet searches filter on.
    LastName,
    trimmed_non_blank
);
text_value!(StreetAddress, trimmed_non_blank);
text_value!(City, trimmed_non_blank);
text_value!(PetName, trimmed_non_blank);
text_value!(
    /// Name of a pet type such as `Dog`.
    PetTypeName,
    trimmed_non_blank
);
text_value!(SpecialtyName, trimmed_non_blank);
text_value!(
    /// Visit notes with any HTML markup stripped.
    VisitDescription,
    sanitized_non_blank
);
text_value!(
    /// Telephone number made of exactly ten ASCII digits.
    Telephone,
    ten_digits
);

pub const TELEPHONE_DIGITS: usize = 10;

/// Returns `true` when `value` is exactly ten ASCII digits.
pub fn is_ten_digit_phone(value: &str) -> bool {
    value.len() == TELEPHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a calendar date from `yyyy-MM-dd` or an RFC 3339 timestamp.
///
/// Timestamps keep only their date part as written, without shifting to
/// another time zone.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, TypeConstraintError> {
    let trimmed = trimmed_non_blank(value)?;
    let trimmed = trimmed.as_str();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| TypeConstraintError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(OwnerId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(VetId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(PetId::new(7).map(PetId::get), Ok(7));
    }

    #[test]
    fn names_are_trimmed_and_non_empty() {
        assert_eq!(LastName::new("  Smith ").unwrap().as_str(), "Smith");
        assert_eq!(FirstName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn telephone_requires_ten_digits() {
        assert!(Telephone::new("1234567890").is_ok());
        assert!(Telephone::new(" 5550000005 ").is_ok());
        assert_eq!(
            Telephone::new("123"),
            Err(TypeConstraintError::InvalidTelephone)
        );
        assert_eq!(
            Telephone::new("invalid-phone"),
            Err(TypeConstraintError::InvalidTelephone)
        );
        assert_eq!(
            Telephone::new("555-000-000"),
            Err(TypeConstraintError::InvalidTelephone)
        );
    }

    #[test]
    fn visit_description_is_sanitized() {
        let description = VisitDescription::new("Checkup <script>alert(1)</script>").unwrap();
        assert_eq!(description.as_str(), "Checkup");
        assert_eq!(
            VisitDescription::new("<script>x</script>"),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn parses_plain_dates_and_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2023, 12, 13).unwrap();
        assert_eq!(parse_calendar_date("2023-12-13"), Ok(expected));
        assert_eq!(parse_calendar_date("2023-12-13T10:00:00Z"), Ok(expected));
        assert!(matches!(
            parse_calendar_date("invalid-date"),
            Err(TypeConstraintError::InvalidDate(_))
        ));
        assert_eq!(parse_calendar_date(""), Err(TypeConstraintError::EmptyString));
    }
}
