use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::types::{PetId, TypeConstraintError, VisitDescription, VisitId};
use crate::domain::visit::{NewVisit as DomainNewVisit, Visit as DomainVisit};
use crate::models::pet::Pet;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::visits)]
#[diesel(belongs_to(Pet, foreign_key = pet_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::visit::Visit`].
pub struct Visit {
    pub id: i32,
    pub pet_id: i32,
    pub visit_date: NaiveDate,
    pub description: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::visits)]
pub struct NewVisit<'a> {
    pub pet_id: i32,
    pub visit_date: NaiveDate,
    pub description: &'a str,
}

impl TryFrom<Visit> for DomainVisit {
    type Error = TypeConstraintError;

    fn try_from(visit: Visit) -> Result<Self, Self::Error> {
        Ok(Self {
            id: VisitId::try_from(visit.id)?,
            pet_id: PetId::try_from(visit.pet_id)?,
            visit_date: visit.visit_date,
            description: VisitDescription::new(visit.description)?,
        })
    }
}

impl<'a> From<&'a DomainNewVisit> for NewVisit<'a> {
    fn from(visit: &'a DomainNewVisit) -> Self {
        Self {
            pet_id: visit.pet_id.get(),
            visit_date: visit.visit_date,
            description: visit.description.as_str(),
        }
    }
}
