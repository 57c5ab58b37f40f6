use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use netclinic::cache::PetTypeCache;
use netclinic::domain::owner::NewOwner;
use netclinic::domain::pet::NewPetType;
use netclinic::domain::types::{
    City, FirstName, LastName, PetTypeName, SpecialtyName, StreetAddress, Telephone,
};
use netclinic::domain::vet::{NewSpecialty, NewVet};
use netclinic::repository::{DieselRepository, OwnerWriter, PetTypeWriter, VetWriter};
use netclinic::routes;
use serde_json::{Value, json};

mod common;

fn seed(repo: &DieselRepository) {
    for (first, last) in [
        ("John", "Doe"),
        ("Jane", "Smith"),
        ("Bob", "Smith"),
        ("Alice", "Williams"),
    ] {
        repo.create_owner(&NewOwner::new(
            FirstName::new(first).unwrap(),
            LastName::new(last).unwrap(),
            StreetAddress::new("123 Main St").unwrap(),
            City::new("Springfield").unwrap(),
            Telephone::new("1234567890").unwrap(),
        ))
        .unwrap();
    }

    for name in ["Dog", "Cat", "Bird", "Hamster"] {
        repo.create_pet_type(&NewPetType {
            name: PetTypeName::new(name).unwrap(),
        })
        .unwrap();
    }

    let radiology = repo
        .create_specialty(&NewSpecialty {
            name: SpecialtyName::new("radiology").unwrap(),
        })
        .unwrap();
    repo.create_vet(&NewVet {
        first_name: FirstName::new("James").unwrap(),
        last_name: LastName::new("Carter").unwrap(),
        specialty_ids: Vec::new(),
    })
    .unwrap();
    repo.create_vet(&NewVet {
        first_name: FirstName::new("Helen").unwrap(),
        last_name: LastName::new("Leary").unwrap(),
        specialty_ids: vec![radiology.id],
    })
    .unwrap();
}

macro_rules! clinic_app {
    ($test_db:expr) => {{
        let repo = DieselRepository::new($test_db.pool());
        seed(&repo);
        test::init_service(
            App::new()
                .app_data(web::Data::new(repo))
                .app_data(web::Data::new(PetTypeCache::default()))
                .service(web::scope("/api").configure(routes::configure)),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_owner_search_returns_page_and_total() {
    let test_db = common::TestDb::new("test_owner_search_returns_page_and_total.db");
    let app = clinic_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/owners?lastName=smith")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalPages"], 1);
    let ids: Vec<i64> = body["ownerList"]
        .as_array()
        .unwrap()
        .iter()
        .map(|owner| owner["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3]);

    let req = test::TestRequest::get()
        .uri("/api/owners?page=2&pageSize=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["ownerList"][0]["lastName"], "Smith");
    assert_eq!(body["ownerList"][1]["lastName"], "Williams");
}

#[actix_web::test]
async fn test_create_owner_validates_body() {
    let test_db = common::TestDb::new("test_create_owner_validates_body.db");
    let app = clinic_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/owners")
        .set_json(json!({
            "firstName": "Mary",
            "lastName": "Jones",
            "address": "1 High St",
            "city": "Ogdenville",
            "telephone": "555",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["telephone"], "Telephone must be a 10-digit number");

    let req = test::TestRequest::post().uri("/api/owners").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"owner": "must not be blank"}));

    let req = test::TestRequest::post()
        .uri("/api/owners")
        .set_json(json!({
            "firstName": "Mary",
            "lastName": "Jones",
            "address": "1 High St",
            "city": "Ogdenville",
            "telephone": "5551234567",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 5);
    assert_eq!(body["pets"], json!([]));
}

#[actix_web::test]
async fn test_update_and_show_owner() {
    let test_db = common::TestDb::new("test_update_and_show_owner.db");
    let app = clinic_app!(test_db);

    let req = test::TestRequest::put()
        .uri("/api/owners/1")
        .set_json(json!({
            "id": 77,
            "firstName": "Johnny",
            "lastName": "Doe",
            "address": "9 Side St",
            "city": "Springfield",
            "telephone": "1112223333",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/owners/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["firstName"], "Johnny");
    assert_eq!(body["pets"], json!([]));

    for uri in ["/api/owners/99", "/api/owners/0"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn test_pet_and_visit_lifecycle() {
    let test_db = common::TestDb::new("test_pet_and_visit_lifecycle.db");
    let app = clinic_app!(test_db);

    let req = test::TestRequest::get().uri("/api/owners/1/pets").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/owners/1/pets")
        .set_json(json!({"name": "Buddy", "type": "Dog", "birthDate": "2020-01-01"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let pet: Value = test::read_body_json(resp).await;
    assert_eq!(pet["type"], "Dog");
    assert_eq!(pet["birthDate"], "2020-01-01");
    let pet_id = pet["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/owners/1/pets")
        .set_json(json!({"name": "Slither", "type": "Snake", "birthDate": "2021-04-04"}))
        .to_request();
    let pet: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(pet["type"], "unknown");

    let req = test::TestRequest::post()
        .uri("/api/owners/99/pets")
        .set_json(json!({"name": "Ghost", "type": "Cat", "birthDate": "2020-01-01"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // A pet is only reachable through its own owner.
    let req = test::TestRequest::get()
        .uri(&format!("/api/owners/2/pets/{pet_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri(&format!("/api/owners/1/pets/{pet_id}"))
        .set_json(json!({"name": "Buddy", "type": "Cat", "birthDate": "not-a-date"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["birthDate"], "must be a valid date (yyyy-MM-dd)");

    let visits_uri = format!("/api/owners/1/pets/{pet_id}/visits");
    let req = test::TestRequest::get().uri(&visits_uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri(&visits_uri)
        .set_json(json!({"visitDate": "2023-12-13", "description": "Checkup"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri(&visits_uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["visitDate"], "2023-12-13");
    assert_eq!(body[0]["description"], "Checkup");

    let req = test::TestRequest::get().uri("/api/owners/1/pets").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|pet| pet["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Buddy", "Slither"]);
}

#[actix_web::test]
async fn test_pet_types_are_sorted() {
    let test_db = common::TestDb::new("test_pet_types_are_sorted.db");
    let app = clinic_app!(test_db);

    let req = test::TestRequest::get().uri("/api/pet/types").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bird", "Cat", "Dog", "Hamster"]);
}

#[actix_web::test]
async fn test_vet_directory() {
    let test_db = common::TestDb::new("test_vet_directory.db");
    let app = clinic_app!(test_db);

    let req = test::TestRequest::get().uri("/api/vets").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["vetList"].as_array().unwrap().len(), 2);
    assert_eq!(body["vetList"][0]["specialties"], json!([]));

    let req = test::TestRequest::get().uri("/api/vets/2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["lastName"], "Leary");
    assert_eq!(body["specialties"][0]["name"], "radiology");

    let req = test::TestRequest::get().uri("/api/vets/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_oops_fails_with_server_error() {
    let test_db = common::TestDb::new("test_oops_fails_with_server_error.db");
    let app = clinic_app!(test_db);

    let req = test::TestRequest::get().uri("/api/oops").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
