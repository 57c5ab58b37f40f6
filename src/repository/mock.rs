//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::owner::{NewOwner, Owner, UpdateOwner};
use crate::domain::pet::{NewPet, NewPetType, Pet, PetType, UpdatePet};
use crate::domain::types::{OwnerId, PetId, VetId};
use crate::domain::vet::{NewSpecialty, NewVet, Specialty, Vet};
use crate::domain::visit::{NewVisit, Visit};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    LastNameQuery, OwnerReader, OwnerWriter, PetReader, PetTypeReader, PetTypeWriter, PetWriter,
    VetReader, VetWriter, VisitReader, VisitWriter,
};

mock! {
    pub Repository {}

    impl OwnerReader for Repository {
        fn get_owner_by_id(&self, id: OwnerId) -> RepositoryResult<Option<Owner>>;
        fn list_owners(&self, query: LastNameQuery) -> RepositoryResult<(usize, Vec<Owner>)>;
    }

    impl OwnerWriter for Repository {
        fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner>;
        fn update_owner(&self, owner_id: OwnerId, updates: &UpdateOwner) -> RepositoryResult<Owner>;
    }

    impl PetReader for Repository {
        fn get_pet_by_id(&self, id: PetId) -> RepositoryResult<Option<Pet>>;
        fn list_pets_by_owner(&self, owner_id: OwnerId) -> RepositoryResult<Vec<Pet>>;
    }

    impl PetWriter for Repository {
        fn create_pet(&self, new_pet: &NewPet) -> RepositoryResult<Pet>;
        fn update_pet(&self, pet_id: PetId, updates: &UpdatePet) -> RepositoryResult<Pet>;
    }

    impl PetTypeReader for Repository {
        fn list_pet_types(&self) -> RepositoryResult<Vec<PetType>>;
        fn find_pet_type_by_name(&self, name: &str) -> RepositoryResult<Option<PetType>>;
    }

    impl PetTypeWriter for Repository {
        fn create_pet_type(&self, new_pet_type: &NewPetType) -> RepositoryResult<PetType>;
    }

    impl VisitReader for Repository {
        fn list_visits_by_pet(&self, pet_id: PetId) -> RepositoryResult<Vec<Visit>>;
    }

    impl VisitWriter for Repository {
        fn create_visit(&self, new_visit: &NewVisit) -> RepositoryResult<Visit>;
    }

    impl VetReader for Repository {
        fn get_vet_by_id(&self, id: VetId) -> RepositoryResult<Option<Vet>>;
        fn list_vets(&self, query: LastNameQuery) -> RepositoryResult<(usize, Vec<Vet>)>;
        fn list_specialties(&self, vet_id: VetId) -> RepositoryResult<Vec<Specialty>>;
    }

    impl VetWriter for Repository {
        fn create_specialty(&self, new_specialty: &NewSpecialty) -> RepositoryResult<Specialty>;
        fn create_vet(&self, new_vet: &NewVet) -> RepositoryResult<Vet>;
    }
}
