use diesel::sql_types::Text;

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::owner::{NewOwner, Owner, UpdateOwner};
use crate::domain::pet::{NewPet, NewPetType, Pet, PetType, UpdatePet};
use crate::domain::types::{OwnerId, PetId, VetId};
use crate::domain::vet::{NewSpecialty, NewVet, Specialty, Vet};
use crate::domain::visit::{NewVisit, Visit};
use crate::pagination::{NameFilter, Pagination};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod vet;
pub mod visit;

diesel::define_sql_function! {
    /// Unicode lower-casing; SQLite's built-in `lower()` folds ASCII only.
    /// Registered on every pooled connection by [`crate::db::SqlitePragmas`].
    fn unicode_lower(x: Text) -> Text;
}

/// Diesel-backed record store shared by every reader and writer trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Last-name filtered listing used by the owner and vet searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastNameQuery {
    pub last_name: NameFilter,
    /// `None` returns every matching record.
    pub pagination: Option<Pagination>,
}

impl LastNameQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_name(mut self, prefix: Option<&str>) -> Self {
        self.last_name = NameFilter::new(prefix);
        self
    }

    pub fn paginate(mut self, page: i64, per_page: i64) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

pub trait OwnerReader {
    fn get_owner_by_id(&self, id: OwnerId) -> RepositoryResult<Option<Owner>>;
    /// Returns the number of matching owners and the requested window of them,
    /// ordered by id.
    fn list_owners(&self, query: LastNameQuery) -> RepositoryResult<(usize, Vec<Owner>)>;
}

pub trait OwnerWriter {
    fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner>;
    fn update_owner(&self, owner_id: OwnerId, updates: &UpdateOwner) -> RepositoryResult<Owner>;
}

pub trait PetReader {
    fn get_pet_by_id(&self, id: PetId) -> RepositoryResult<Option<Pet>>;
    /// Pets of one owner, ordered by name.
    fn list_pets_by_owner(&self, owner_id: OwnerId) -> RepositoryResult<Vec<Pet>>;
}

pub trait PetWriter {
    fn create_pet(&self, new_pet: &NewPet) -> RepositoryResult<Pet>;
    fn update_pet(&self, pet_id: PetId, updates: &UpdatePet) -> RepositoryResult<Pet>;
}

pub trait PetTypeReader {
    fn list_pet_types(&self) -> RepositoryResult<Vec<PetType>>;
    /// Exact, case-sensitive lookup by name.
    fn find_pet_type_by_name(&self, name: &str) -> RepositoryResult<Option<PetType>>;
}

pub trait PetTypeWriter {
    fn create_pet_type(&self, new_pet_type: &NewPetType) -> RepositoryResult<PetType>;
}

pub trait VisitReader {
    /// Visits of one pet, ordered by visit date then id.
    fn list_visits_by_pet(&self, pet_id: PetId) -> RepositoryResult<Vec<Visit>>;
}

pub trait VisitWriter {
    fn create_visit(&self, new_visit: &NewVisit) -> RepositoryResult<Visit>;
}

pub trait VetReader {
    fn get_vet_by_id(&self, id: VetId) -> RepositoryResult<Option<Vet>>;
    /// Returns the number of matching vets and the requested window of them,
    /// ordered by id, each with its specialties sorted by name.
    fn list_vets(&self, query: LastNameQuery) -> RepositoryResult<(usize, Vec<Vet>)>;
    fn list_specialties(&self, vet_id: VetId) -> RepositoryResult<Vec<Specialty>>;
}

pub trait VetWriter {
    fn create_specialty(&self, new_specialty: &NewSpecialty) -> RepositoryResult<Specialty>;
    fn create_vet(&self, new_vet: &NewVet) -> RepositoryResult<Vet>;
}
