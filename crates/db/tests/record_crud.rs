//! Integration tests for the record repositories.
//!
//! Exercises create and list against a real database for every table,
//! including concurrent inserts.

use std::collections::HashSet;

use bdsql_db::models::alert::CreateAlert;
use bdsql_db::models::camera::CreateCamera;
use bdsql_db::models::personal_data::CreatePersonalData;
use bdsql_db::models::vehicular_incident::CreateVehicularIncident;
use bdsql_db::repositories::{AlertRepo, CameraRepo, PersonalDataRepo, VehicularIncidentRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn setup(pool: &PgPool) {
    bdsql_db::bootstrap_schema(pool).await.unwrap();
}

fn new_alert(kind: &str) -> CreateAlert {
    CreateAlert {
        kind: kind.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_list_empty_table_returns_empty_vec(pool: PgPool) {
    setup(&pool).await;

    assert!(AlertRepo::list(&pool).await.unwrap().is_empty());
    assert!(PersonalDataRepo::list(&pool).await.unwrap().is_empty());
    assert!(VehicularIncidentRepo::list(&pool).await.unwrap().is_empty());
    assert!(CameraRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = false)]
async fn test_create_alert_then_list(pool: PgPool) {
    setup(&pool).await;

    let created = AlertRepo::create(&pool, &new_alert("earthquake")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.kind, "earthquake");

    let all = AlertRepo::list(&pool).await.unwrap();
    assert_eq!(all, vec![created]);
}

#[sqlx::test(migrations = false)]
async fn test_create_without_table_fails(pool: PgPool) {
    // No bootstrap: the table is missing, so the insert is a database error.
    let result = AlertRepo::create(&pool, &new_alert("fire")).await;
    assert!(matches!(result, Err(sqlx::Error::Database(_))));
}

#[sqlx::test(migrations = false)]
async fn test_concurrent_creates_get_distinct_ids(pool: PgPool) {
    setup(&pool).await;

    let dtos: Vec<CreateAlert> = (0..16).map(|i| new_alert(&format!("alert-{i}"))).collect();
    let results =
        futures::future::join_all(dtos.iter().map(|dto| AlertRepo::create(&pool, dto))).await;

    let created: Vec<_> = results.into_iter().map(Result::unwrap).collect();
    let ids: HashSet<i64> = created.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), 16, "every insert should get its own id");

    let listed = AlertRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 16);
    let kinds: HashSet<&str> = listed.iter().map(|a| a.kind.as_str()).collect();
    for i in 0..16 {
        assert!(kinds.contains(format!("alert-{i}").as_str()));
    }
}

// ---------------------------------------------------------------------------
// Personal data
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_create_personal_data(pool: PgPool) {
    setup(&pool).await;

    let created = PersonalDataRepo::create(
        &pool,
        &CreatePersonalData {
            age: 5,
            sex: "f".to_string(),
            emotion: "calm".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(created.age, 5);
    assert_eq!(created.sex, "f");
    assert_eq!(created.emotion, "calm");
    assert_eq!(PersonalDataRepo::list(&pool).await.unwrap(), vec![created]);
}

// ---------------------------------------------------------------------------
// Vehicular incidents
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_create_vehicular_incident_keeps_date_verbatim(pool: PgPool) {
    setup(&pool).await;

    let created = VehicularIncidentRepo::create(
        &pool,
        &CreateVehicularIncident {
            kind: "collision".to_string(),
            description: "rear-end at light".to_string(),
            date: "last tuesday, around 5".to_string(),
            location: "5th and main".to_string(),
            plates: "ABC-123".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(created.date, "last tuesday, around 5");
    assert_eq!(created.plates, "ABC-123");
    assert_eq!(VehicularIncidentRepo::list(&pool).await.unwrap(), vec![created]);
}

// ---------------------------------------------------------------------------
// Cameras
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_create_camera_and_list_multiple(pool: PgPool) {
    setup(&pool).await;

    let mut created = Vec::new();
    for n in ["C-1", "C-2"] {
        let camera = CameraRepo::create(
            &pool,
            &CreateCamera {
                number: n.to_string(),
                address: "1 Plaza".to_string(),
                kind: "dome".to_string(),
                location: "lobby".to_string(),
                resolution: "1080p".to_string(),
            },
        )
        .await
        .unwrap();
        created.push(camera);
    }
    assert_ne!(created[0].id, created[1].id);

    let listed = CameraRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    for camera in &created {
        assert!(listed.contains(camera));
    }
}
