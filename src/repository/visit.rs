use diesel::prelude::*;

use crate::{
    domain::{
        types::PetId,
        visit::{NewVisit, Visit},
    },
    models::visit::{NewVisit as DbNewVisit, Visit as DbVisit},
    repository::{DieselRepository, VisitReader, VisitWriter, errors::RepositoryResult},
};

impl VisitReader for DieselRepository {
    fn list_visits_by_pet(&self, pet_id: PetId) -> RepositoryResult<Vec<Visit>> {
        use crate::schema::visits;

        let mut conn = self.conn()?;
        let visits = visits::table
            .filter(visits::pet_id.eq(pet_id.get()))
            .order((visits::visit_date.asc(), visits::id.asc()))
            .select(DbVisit::as_select())
            .load(&mut conn)?
            .into_iter()
            .map(Visit::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(visits)
    }
}

impl VisitWriter for DieselRepository {
    fn create_visit(&self, new_visit: &NewVisit) -> RepositoryResult<Visit> {
        use crate::schema::visits;

        let mut conn = self.conn()?;
        let db_new_visit: DbNewVisit = new_visit.into();

        let db_visit = diesel::insert_into(visits::table)
            .values(&db_new_visit)
            .returning(DbVisit::as_returning())
            .get_result(&mut conn)?;

        Ok(Visit::try_from(db_visit)?)
    }
}
