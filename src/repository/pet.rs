//! Repository implementation for pets.
//!
//! Pets are always read together with their type through a left join; a
//! missing type row yields the `unknown` sentinel.

use diesel::prelude::*;

use crate::{
    db::DbConnection,
    domain::{
        pet::{NewPet, Pet, UpdatePet},
        types::{OwnerId, PetId},
    },
    models::pet::{
        NewPet as DbNewPet, Pet as DbPet, PetType as DbPetType, UpdatePet as DbUpdatePet,
    },
    repository::{
        DieselRepository, PetReader, PetWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn find_pet(conn: &mut DbConnection, pet_id: i32) -> RepositoryResult<Option<Pet>> {
    use crate::schema::{pets, types};

    let row = pets::table
        .left_join(types::table)
        .filter(pets::id.eq(pet_id))
        .select((DbPet::as_select(), Option::<DbPetType>::as_select()))
        .first::<(DbPet, Option<DbPetType>)>(conn)
        .optional()?;

    match row {
        Some(row) => Ok(Some(Pet::try_from(row)?)),
        None => Ok(None),
    }
}

impl PetReader for DieselRepository {
    fn get_pet_by_id(&self, id: PetId) -> RepositoryResult<Option<Pet>> {
        let mut conn = self.conn()?;
        find_pet(&mut conn, id.get())
    }

    fn list_pets_by_owner(&self, owner_id: OwnerId) -> RepositoryResult<Vec<Pet>> {
        use crate::schema::{pets, types};

        let mut conn = self.conn()?;
        let rows = pets::table
            .left_join(types::table)
            .filter(pets::owner_id.eq(owner_id.get()))
            .order((pets::name.asc(), pets::id.asc()))
            .select((DbPet::as_select(), Option::<DbPetType>::as_select()))
            .load::<(DbPet, Option<DbPetType>)>(&mut conn)?;

        let pets = rows
            .into_iter()
            .map(Pet::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(pets)
    }
}

impl PetWriter for DieselRepository {
    fn create_pet(&self, new_pet: &NewPet) -> RepositoryResult<Pet> {
        use crate::schema::pets;

        let mut conn = self.conn()?;
        let db_new_pet: DbNewPet = new_pet.into();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let pet_id = diesel::insert_into(pets::table)
                .values(&db_new_pet)
                .returning(pets::id)
                .get_result::<i32>(conn)?;

            find_pet(conn, pet_id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn update_pet(&self, pet_id: PetId, updates: &UpdatePet) -> RepositoryResult<Pet> {
        use crate::schema::pets;

        let mut conn = self.conn()?;
        let db_updates: DbUpdatePet = updates.into();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(pets::table.find(pet_id.get()))
                .set(&db_updates)
                .execute(conn)?;
            if updated == 0 {
                return Err(RepositoryError::NotFound);
            }

            find_pet(conn, pet_id.get())?.ok_or(RepositoryError::NotFound)
        })
    }
}
