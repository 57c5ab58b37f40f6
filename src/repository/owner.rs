//! Repository implementation for pet owners.

use diesel::prelude::*;

use crate::{
    domain::{
        owner::{NewOwner, Owner, UpdateOwner},
        types::OwnerId,
    },
    models::owner::{
        NewOwner as DbNewOwner, Owner as DbOwner, UpdateOwner as DbUpdateOwner,
    },
    repository::{
        DieselRepository, LastNameQuery, OwnerReader, OwnerWriter,
        errors::{RepositoryError, RepositoryResult},
        unicode_lower,
    },
};

impl OwnerReader for DieselRepository {
    fn get_owner_by_id(&self, id: OwnerId) -> RepositoryResult<Option<Owner>> {
        use crate::schema::owners;

        let mut conn = self.conn()?;
        let db_owner = owners::table
            .find(id.get())
            .select(DbOwner::as_select())
            .first(&mut conn)
            .optional()?;

        match db_owner {
            Some(db_owner) => Ok(Some(Owner::try_from(db_owner)?)),
            None => Ok(None),
        }
    }

    fn list_owners(&self, query: LastNameQuery) -> RepositoryResult<(usize, Vec<Owner>)> {
        use crate::schema::owners;

        let pattern = query.last_name.like_pattern();
        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let mut count_query = owners::table.into_boxed();
            if let Some(pattern) = &pattern {
                count_query =
                    count_query.filter(unicode_lower(owners::last_name).like(pattern.clone()).escape('\\'));
            }
            let total: i64 = count_query.count().get_result(conn)?;

            let mut items = owners::table
                .select(DbOwner::as_select())
                .order(owners::id.asc())
                .into_boxed();
            if let Some(pattern) = &pattern {
                items = items.filter(unicode_lower(owners::last_name).like(pattern.clone()).escape('\\'));
            }
            if let Some(pagination) = query.pagination {
                match pagination.window() {
                    Some((offset, limit)) => items = items.offset(offset).limit(limit),
                    None => return Ok((total as usize, Vec::new())),
                }
            }

            let owners = items
                .load(conn)?
                .into_iter()
                .map(Owner::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            Ok((total as usize, owners))
        })
    }
}

impl OwnerWriter for DieselRepository {
    fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner> {
        use crate::schema::owners;

        let mut conn = self.conn()?;
        let db_new_owner: DbNewOwner = new_owner.into();

        let db_owner = diesel::insert_into(owners::table)
            .values(&db_new_owner)
            .returning(DbOwner::as_returning())
            .get_result(&mut conn)?;

        Ok(Owner::try_from(db_owner)?)
    }

    fn update_owner(&self, owner_id: OwnerId, updates: &UpdateOwner) -> RepositoryResult<Owner> {
        use crate::schema::owners;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateOwner = updates.into();

        let db_owner = diesel::update(owners::table.find(owner_id.get()))
            .set(&db_updates)
            .returning(DbOwner::as_returning())
            .get_result(&mut conn)?;

        Ok(Owner::try_from(db_owner)?)
    }
}
