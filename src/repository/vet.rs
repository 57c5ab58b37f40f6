//! Repository implementation for veterinarians and specialties.

use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    db::DbConnection,
    domain::{
        types::VetId,
        vet::{NewSpecialty, NewVet, Specialty, Vet},
    },
    models::vet::{
        NewSpecialty as DbNewSpecialty, NewVet as DbNewVet, NewVetSpecialty as DbNewVetSpecialty,
        Specialty as DbSpecialty, Vet as DbVet,
    },
    repository::{
        DieselRepository, LastNameQuery, VetReader, VetWriter,
        errors::{RepositoryError, RepositoryResult},
        unicode_lower,
    },
};

/// Loads the specialty rows of every given vet in a single join.
fn load_specialties(
    conn: &mut DbConnection,
    vet_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DbSpecialty>>> {
    use crate::schema::{specialties, vet_specialties};

    let rows = specialties::table
        .inner_join(vet_specialties::table)
        .filter(vet_specialties::vet_id.eq_any(vet_ids))
        .order(specialties::name.asc())
        .select((vet_specialties::vet_id, DbSpecialty::as_select()))
        .load::<(i32, DbSpecialty)>(conn)?;

    let mut by_vet: HashMap<i32, Vec<DbSpecialty>> = HashMap::new();
    for (vet_id, specialty) in rows {
        by_vet.entry(vet_id).or_default().push(specialty);
    }
    Ok(by_vet)
}

fn attach_specialties(
    conn: &mut DbConnection,
    db_vets: Vec<DbVet>,
) -> RepositoryResult<Vec<Vet>> {
    let vet_ids = db_vets.iter().map(|vet| vet.id).collect::<Vec<i32>>();
    let mut specialties = load_specialties(conn, &vet_ids)?;

    let vets = db_vets
        .into_iter()
        .map(|vet| {
            let vet_specialties = specialties.remove(&vet.id).unwrap_or_default();
            Vet::try_from((vet, vet_specialties)).map_err(RepositoryError::from)
        })
        .collect::<RepositoryResult<Vec<Vet>>>()?;

    Ok(vets)
}

fn find_vet(conn: &mut DbConnection, vet_id: i32) -> RepositoryResult<Option<Vet>> {
    use crate::schema::vets;

    let db_vet = vets::table
        .find(vet_id)
        .select(DbVet::as_select())
        .first(conn)
        .optional()?;

    match db_vet {
        Some(db_vet) => Ok(attach_specialties(conn, vec![db_vet])?.pop()),
        None => Ok(None),
    }
}

impl VetReader for DieselRepository {
    fn get_vet_by_id(&self, id: VetId) -> RepositoryResult<Option<Vet>> {
        let mut conn = self.conn()?;
        find_vet(&mut conn, id.get())
    }

    fn list_vets(&self, query: LastNameQuery) -> RepositoryResult<(usize, Vec<Vet>)> {
        use crate::schema::vets;

        let pattern = query.last_name.like_pattern();
        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let mut count_query = vets::table.into_boxed();
            if let Some(pattern) = &pattern {
                count_query =
                    count_query.filter(unicode_lower(vets::last_name).like(pattern.clone()).escape('\\'));
            }
            let total: i64 = count_query.count().get_result(conn)?;

            let mut items = vets::table
                .select(DbVet::as_select())
                .order(vets::id.asc())
                .into_boxed();
            if let Some(pattern) = &pattern {
                items = items.filter(unicode_lower(vets::last_name).like(pattern.clone()).escape('\\'));
            }
            if let Some(pagination) = query.pagination {
                match pagination.window() {
                    Some((offset, limit)) => items = items.offset(offset).limit(limit),
                    None => return Ok((total as usize, Vec::new())),
                }
            }

            let db_vets = items.load(conn)?;
            let vets = attach_specialties(conn, db_vets)?;

            Ok((total as usize, vets))
        })
    }

    fn list_specialties(&self, vet_id: VetId) -> RepositoryResult<Vec<Specialty>> {
        let mut conn = self.conn()?;
        let specialties = load_specialties(&mut conn, &[vet_id.get()])?
            .remove(&vet_id.get())
            .unwrap_or_default()
            .into_iter()
            .map(Specialty::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(specialties)
    }
}

impl VetWriter for DieselRepository {
    fn create_specialty(&self, new_specialty: &NewSpecialty) -> RepositoryResult<Specialty> {
        use crate::schema::specialties;

        let mut conn = self.conn()?;
        let db_new_specialty: DbNewSpecialty = new_specialty.into();

        let db_specialty = diesel::insert_into(specialties::table)
            .values(&db_new_specialty)
            .returning(DbSpecialty::as_returning())
            .get_result(&mut conn)?;

        Ok(Specialty::try_from(db_specialty)?)
    }

    fn create_vet(&self, new_vet: &NewVet) -> RepositoryResult<Vet> {
        use crate::schema::{vet_specialties, vets};

        let mut conn = self.conn()?;
        let db_new_vet: DbNewVet = new_vet.into();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let vet_id = diesel::insert_into(vets::table)
                .values(&db_new_vet)
                .returning(vets::id)
                .get_result::<i32>(conn)?;

            let links = new_vet
                .specialty_ids
                .iter()
                .map(|specialty_id| DbNewVetSpecialty {
                    vet_id,
                    specialty_id: specialty_id.get(),
                })
                .collect::<Vec<_>>();

            if !links.is_empty() {
                diesel::insert_into(vet_specialties::table)
                    .values(&links)
                    .execute(conn)?;
            }

            find_vet(conn, vet_id)?.ok_or(RepositoryError::NotFound)
        })
    }
}
