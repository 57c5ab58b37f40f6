use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{
    domain::{
        types::{PetId, VisitDescription, parse_calendar_date},
        visit::NewVisit,
    },
    forms::{FormError, calendar_date, not_blank},
};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
/// JSON body of `POST /owners/{id}/pets/{petId}/visits`.
pub struct VisitForm {
    #[validate(custom(function = "calendar_date"))]
    pub visit_date: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
}

pub struct VisitPayload {
    pub visit_date: NaiveDate,
    pub description: VisitDescription,
}

impl TryFrom<VisitForm> for VisitPayload {
    type Error = FormError;

    fn try_from(form: VisitForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            visit_date: parse_calendar_date(&form.visit_date)
                .map_err(|e| FormError::constraint("visitDate", e))?,
            // Sanitizing may leave nothing behind, which counts as blank.
            description: VisitDescription::new(form.description)
                .map_err(|e| FormError::constraint("description", e))?,
        })
    }
}

impl VisitPayload {
    pub fn into_domain(self, pet_id: PetId) -> NewVisit {
        NewVisit {
            pet_id,
            visit_date: self.visit_date,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_visit_reports_both_fields() {
        let err = VisitPayload::try_from(VisitForm::default()).err().unwrap();
        assert!(err.field_errors().contains_key("visitDate"));
        assert!(err.field_errors().contains_key("description"));
    }

    #[test]
    fn markup_only_description_is_blank() {
        let form = VisitForm {
            visit_date: "2023-12-13".into(),
            description: "<script>alert(1)</script>".into(),
        };
        let err = VisitPayload::try_from(form).err().unwrap();
        assert_eq!(
            err.field_errors().get("description").map(String::as_str),
            Some("must not be blank")
        );
    }

    #[test]
    fn timestamp_keeps_its_date() {
        let form = VisitForm {
            visit_date: "2023-12-13T10:00:00Z".into(),
            description: "Annual checkup".into(),
        };
        let visit = VisitPayload::try_from(form)
            .unwrap()
            .into_domain(PetId::new(4).unwrap());
        assert_eq!(visit.visit_date, NaiveDate::from_ymd_opt(2023, 12, 13).unwrap());
        assert_eq!(visit.description.as_str(), "Annual checkup");
        assert_eq!(visit.pet_id.get(), 4);
    }
}
