use diesel::prelude::*;

use crate::{
    domain::pet::{NewPetType, PetType},
    models::pet::{NewPetType as DbNewPetType, PetType as DbPetType},
    repository::{DieselRepository, PetTypeReader, PetTypeWriter, errors::RepositoryResult},
};

impl PetTypeReader for DieselRepository {
    fn list_pet_types(&self) -> RepositoryResult<Vec<PetType>> {
        use crate::schema::types;

        let mut conn = self.conn()?;
        let pet_types = types::table
            .order(types::name.asc())
            .select(DbPetType::as_select())
            .load(&mut conn)?
            .into_iter()
            .map(PetType::from)
            .collect();

        Ok(pet_types)
    }

    fn find_pet_type_by_name(&self, name: &str) -> RepositoryResult<Option<PetType>> {
        use crate::schema::types;

        let mut conn = self.conn()?;
        let pet_type = types::table
            .filter(types::name.eq(name))
            .select(DbPetType::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(pet_type.map(PetType::from))
    }
}

impl PetTypeWriter for DieselRepository {
    fn create_pet_type(&self, new_pet_type: &NewPetType) -> RepositoryResult<PetType> {
        use crate::schema::types;

        let mut conn = self.conn()?;
        let db_new_pet_type: DbNewPetType = new_pet_type.into();

        let db_pet_type = diesel::insert_into(types::table)
            .values(&db_new_pet_type)
            .returning(DbPetType::as_returning())
            .get_result(&mut conn)?;

        Ok(db_pet_type.into())
    }
}
