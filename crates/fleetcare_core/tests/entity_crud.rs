use fleetcare_core::db::open_db_in_memory;
use fleetcare_core::{
    Component, FleetService, Job, JobStatus, KvStore, MemoryKvStore, Notification, Ship,
    ShipStatus, SqliteKvStore,
};
use serde_json::{json, Map};

fn ship(id: &str, name: &str) -> Ship {
    Ship {
        id: id.to_string(),
        name: name.to_string(),
        imo: "9000001".to_string(),
        flag: "Malta".to_string(),
        status: ShipStatus::Active,
    }
}

#[test]
fn add_then_get_contains_record_verbatim() {
    let service = FleetService::new(MemoryKvStore::new());

    let added = service.add_ship(ship("s1", "Aurora")).unwrap();
    assert_eq!(added, ship("s1", "Aurora"));

    assert_eq!(service.get_ships().unwrap(), vec![ship("s1", "Aurora")]);
}

#[test]
fn update_keeps_position_and_replaces_fields() {
    let service = FleetService::new(MemoryKvStore::new());
    service.add_ship(ship("s1", "Aurora")).unwrap();
    service.add_ship(ship("s2", "Borealis")).unwrap();
    service.add_ship(ship("s3", "Cygnus")).unwrap();

    let mut renamed = ship("s2", "Borealis II");
    renamed.status = ShipStatus::Inactive;
    let updated = service.update_ship(renamed.clone()).unwrap();
    assert_eq!(updated, Some(renamed.clone()));

    let ships = service.get_ships().unwrap();
    assert_eq!(ships[1], renamed);
    assert_eq!(ships[0].name, "Aurora");
    assert_eq!(ships[2].name, "Cygnus");
}

#[test]
fn update_with_unknown_id_leaves_blob_unchanged() {
    let service = FleetService::new(MemoryKvStore::new());
    service.add_ship(ship("s1", "Aurora")).unwrap();
    let before = service.repository().store().read("ships").unwrap();

    let result = service.update_ship(ship("missing", "Ghost")).unwrap();

    assert!(result.is_none());
    assert_eq!(service.repository().store().read("ships").unwrap(), before);
}

#[test]
fn delete_excludes_id_and_miss_is_noop() {
    let service = FleetService::new(MemoryKvStore::new());
    service.add_ship(ship("s1", "Aurora")).unwrap();
    service.add_ship(ship("s2", "Borealis")).unwrap();

    service.delete_ship("s1").unwrap();
    let ids: Vec<_> = service
        .get_ships()
        .unwrap()
        .into_iter()
        .map(|ship| ship.id)
        .collect();
    assert_eq!(ids, vec!["s2"]);

    let before = service.repository().store().read("ships").unwrap();
    service.delete_ship("nope").unwrap();
    assert_eq!(service.repository().store().read("ships").unwrap(), before);
}

#[test]
fn deleting_ship_does_not_cascade() {
    let service = FleetService::new(MemoryKvStore::new());
    service.add_ship(ship("s1", "Aurora")).unwrap();
    let component = service
        .add_component(Component::new("s1", "Boiler", "B-1", "2020-01-01", "2024-01-01"))
        .unwrap();
    service
        .add_job(Job::new("s1", component.id.as_str(), "Overhaul", "2025-02-01"))
        .unwrap();

    service.delete_ship("s1").unwrap();

    assert!(service.get_ships().unwrap().is_empty());
    assert_eq!(service.get_components().unwrap().len(), 1);
    assert_eq!(service.get_jobs().unwrap().len(), 1);
}

#[test]
fn component_and_job_crud_through_service() {
    let service = FleetService::new(MemoryKvStore::new());

    let mut component = service
        .add_component(Component::new("s1", "Radar", "RAD-1", "2021-07-18", "2023-12-01"))
        .unwrap();
    component.last_maintenance_date = "2025-03-01".to_string();
    service.update_component(component.clone()).unwrap().unwrap();
    assert_eq!(
        service.get_components().unwrap()[0].last_maintenance_date,
        "2025-03-01"
    );

    let mut job = service
        .add_job(Job::new("s1", component.id.as_str(), "Calibration", "2025-04-10"))
        .unwrap();
    job.status = JobStatus::Completed;
    service.update_job(job.clone()).unwrap().unwrap();
    assert_eq!(service.get_jobs().unwrap()[0].status, JobStatus::Completed);

    service.delete_job(&job.id).unwrap();
    service.delete_component(&component.id).unwrap();
    assert!(service.get_jobs().unwrap().is_empty());
    assert!(service.get_components().unwrap().is_empty());
}

#[test]
fn notifications_are_stored_opaquely() {
    let service = FleetService::new(MemoryKvStore::new());
    let mut payload = Map::new();
    payload.insert("message".to_string(), json!("Job j1 completed"));

    let notification = service.add_notification(Notification::new(payload)).unwrap();
    let stored = service.get_notifications().unwrap();
    assert_eq!(stored, vec![notification.clone()]);

    service.delete_notification(&notification.id).unwrap();
    assert!(service.get_notifications().unwrap().is_empty());
}

#[test]
fn sqlite_store_backs_the_same_crud_contract() {
    let conn = open_db_in_memory().unwrap();
    let service = FleetService::new(SqliteKvStore::try_new(&conn).unwrap());

    service.add_ship(ship("s1", "Aurora")).unwrap();
    service.add_ship(ship("s1", "Aurora duplicate")).unwrap();
    assert_eq!(service.get_ships().unwrap().len(), 2);

    assert!(service.update_ship(ship("s9", "Ghost")).unwrap().is_none());
    service.delete_ship("s1").unwrap();
    assert!(service.get_ships().unwrap().is_empty());
    assert_eq!(
        service.repository().store().read("ships").unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn find_ship_returns_first_match_or_none() {
    let service = FleetService::new(MemoryKvStore::new());
    service.add_ship(ship("s1", "Aurora")).unwrap();

    assert_eq!(service.find_ship("s1").unwrap().unwrap().name, "Aurora");
    assert!(service.find_ship("s2").unwrap().is_none());
}

#[test]
fn service_accepts_borrowed_store() {
    let store = MemoryKvStore::new();
    {
        let service = FleetService::new(&store);
        service.add_ship(ship("s1", "Aurora")).unwrap();
    }
    assert!(store.read("ships").unwrap().unwrap().contains("Aurora"));
}
