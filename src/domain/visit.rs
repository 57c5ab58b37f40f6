use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PetId, VisitDescription, VisitId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    pub id: VisitId,
    pub pet_id: PetId,
    pub visit_date: NaiveDate,
    pub description: VisitDescription,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewVisit {
    pub pet_id: PetId,
    pub visit_date: NaiveDate,
    pub description: VisitDescription,
}
