//! Fills an empty clinic database with a small demo data set.

use chrono::NaiveDate;
use dotenvy::dotenv;

use netclinic::db::{establish_connection_pool, run_migrations};
use netclinic::domain::owner::NewOwner;
use netclinic::domain::pet::{NewPet, NewPetType, PetType};
use netclinic::domain::types::{
    City, FirstName, LastName, PetName, PetTypeName, SpecialtyName, StreetAddress, Telephone,
    VisitDescription,
};
use netclinic::domain::vet::{NewSpecialty, NewVet};
use netclinic::domain::visit::NewVisit;
use netclinic::models::config::ServerConfig;
use netclinic::repository::errors::{RepositoryError, RepositoryResult};
use netclinic::repository::{
    DieselRepository, LastNameQuery, OwnerReader, OwnerWriter, PetTypeWriter, PetWriter,
    VetWriter, VisitWriter,
};

const PET_TYPES: [&str; 4] = ["Bird", "Cat", "Dog", "Hamster"];
const SPECIALTIES: [&str; 3] = ["dentistry", "radiology", "surgery"];

/// First name, last name and specialty names.
const VETS: [(&str, &str, &[&str]); 3] = [
    ("James", "Carter", &[]),
    ("Helen", "Leary", &["radiology"]),
    ("Linda", "Douglas", &["surgery", "dentistry"]),
];

const OWNERS: [(&str, &str, &str, &str, &str); 4] = [
    ("John", "Doe", "123 Main St", "Springfield", "1234567890"),
    ("Jane", "Smith", "456 Oak Ave", "Shelbyville", "2345678901"),
    ("Bob", "Smith", "789 Pine Rd", "Springfield", "3456789012"),
    ("Alice", "Williams", "12 Elm St", "Capital City", "4567890123"),
];

/// Owner index, pet name, type name and birth date.
const PETS: [(usize, &str, &str, (i32, u32, u32)); 5] = [
    (0, "Buddy", "Dog", (2020, 1, 1)),
    (1, "Whiskers", "Cat", (2019, 6, 15)),
    (1, "Tweety", "Bird", (2022, 3, 3)),
    (2, "Nibbles", "Hamster", (2023, 8, 20)),
    (3, "Max", "Dog", (2018, 11, 30)),
];

fn date(year: i32, month: u32, day: u32) -> RepositoryResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| RepositoryError::ValidationError(format!("{year}-{month}-{day}")))
}

fn seed<R>(repo: &R) -> RepositoryResult<()>
where
    R: OwnerReader + OwnerWriter + PetWriter + PetTypeWriter + VetWriter + VisitWriter,
{
    let mut pet_types: Vec<PetType> = Vec::new();
    for name in PET_TYPES {
        let name = PetTypeName::new(name).map_err(RepositoryError::from)?;
        pet_types.push(repo.create_pet_type(&NewPetType { name })?);
    }

    let mut specialties = Vec::new();
    for name in SPECIALTIES {
        let name = SpecialtyName::new(name).map_err(RepositoryError::from)?;
        specialties.push(repo.create_specialty(&NewSpecialty { name })?);
    }

    for (first_name, last_name, names) in VETS {
        let specialty_ids = specialties
            .iter()
            .filter(|specialty| names.contains(&specialty.name.as_str()))
            .map(|specialty| specialty.id)
            .collect();
        repo.create_vet(&NewVet {
            first_name: FirstName::new(first_name).map_err(RepositoryError::from)?,
            last_name: LastName::new(last_name).map_err(RepositoryError::from)?,
            specialty_ids,
        })?;
    }

    let mut owners = Vec::new();
    for (first_name, last_name, address, city, telephone) in OWNERS {
        let new_owner = NewOwner::new(
            FirstName::new(first_name).map_err(RepositoryError::from)?,
            LastName::new(last_name).map_err(RepositoryError::from)?,
            StreetAddress::new(address).map_err(RepositoryError::from)?,
            City::new(city).map_err(RepositoryError::from)?,
            Telephone::new(telephone).map_err(RepositoryError::from)?,
        );
        owners.push(repo.create_owner(&new_owner)?);
    }

    for (owner_index, name, type_name, (year, month, day)) in PETS {
        let pet_type = pet_types
            .iter()
            .find(|pet_type| pet_type.name == type_name)
            .cloned()
            .unwrap_or_else(PetType::unknown);
        let owner = owners
            .get(owner_index)
            .ok_or_else(|| RepositoryError::Unexpected(format!("no owner #{owner_index}")))?;

        let pet = repo.create_pet(&NewPet {
            owner_id: owner.id,
            name: PetName::new(name).map_err(RepositoryError::from)?,
            birth_date: date(year, month, day)?,
            pet_type,
        })?;

        repo.create_visit(&NewVisit {
            pet_id: pet.id,
            visit_date: date(2024, 1, 15)?,
            description: VisitDescription::new("Annual checkup").map_err(RepositoryError::from)?,
        })?;
    }

    log::info!(
        "Seeded {} pet types, {} vets, {} owners and {} pets",
        PET_TYPES.len(),
        VETS.len(),
        OWNERS.len(),
        PETS.len()
    );
    Ok(())
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_migrations(&pool) {
        log::error!("Failed to migrate database: {err}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    match repo.list_owners(LastNameQuery::new()) {
        Ok((0, _)) => {}
        Ok((total, _)) => {
            log::info!("Database already holds {total} owners, nothing to seed");
            return;
        }
        Err(err) => {
            log::error!("Error counting owners: {err}");
            std::process::exit(1);
        }
    }

    if let Err(err) = seed(&repo) {
        log::error!("Error seeding database: {err}");
        std::process::exit(1);
    }
}
