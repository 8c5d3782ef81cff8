use fleetcare_core::{
    components_available_for_ship, resolve_component_name, resolve_ship_name, Component,
    FleetService, Job, JobFilter, JobPriority, JobStatus, MemoryKvStore, NOT_AVAILABLE,
};

fn component(id: &str, ship_id: &str) -> Component {
    Component {
        id: id.to_string(),
        ship_id: ship_id.to_string(),
        name: format!("component {id}"),
        ..Component::default()
    }
}

#[test]
fn job_referencing_deleted_component_resolves_to_sentinel() {
    let service = FleetService::new(MemoryKvStore::new());
    service.initialize_storage().unwrap();

    service.delete_component("c1").unwrap();

    let jobs = service.get_jobs().unwrap();
    let components = service.get_components().unwrap();
    let ships = service.get_ships().unwrap();
    assert_eq!(resolve_component_name(&components, &jobs[0]), NOT_AVAILABLE);
    assert_eq!(resolve_ship_name(&ships, &jobs[0]), "Ever Given");
}

#[test]
fn job_referencing_deleted_ship_resolves_to_sentinel() {
    let service = FleetService::new(MemoryKvStore::new());
    service.initialize_storage().unwrap();
    service.delete_ship("s1").unwrap();

    let rows = service.job_rows(&JobFilter::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].ship_name, NOT_AVAILABLE);
    assert_eq!(rows[0].component_name, "Main Engine");
}

#[test]
fn component_availability_depends_on_selected_ship() {
    let components = vec![component("c1", "s1"), component("c2", "s2"), component("c3", "s1")];

    let all = components_available_for_ship(&components, None);
    assert_eq!(all, components);

    let ids: Vec<_> = components_available_for_ship(&components, Some("s1"))
        .into_iter()
        .map(|component| component.id)
        .collect();
    assert_eq!(ids, vec!["c1", "c3"]);
}

#[test]
fn service_relationship_queries_read_current_storage() {
    let service = FleetService::new(MemoryKvStore::new());
    service.initialize_storage().unwrap();
    service.add_component(component("c3", "s1")).unwrap();

    assert_eq!(service.components_for_ship("s1").unwrap().len(), 2);
    assert_eq!(service.components_for_ship("s2").unwrap().len(), 1);
    assert_eq!(service.jobs_for_ship("s1").unwrap().len(), 1);
    assert!(service.jobs_for_ship("s2").unwrap().is_empty());
    assert_eq!(service.components_available_for_ship(None).unwrap().len(), 3);
    assert_eq!(
        service
            .components_available_for_ship(Some("s2"))
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn ship_detail_collects_components_and_jobs() {
    let service = FleetService::new(MemoryKvStore::new());
    service.initialize_storage().unwrap();

    let detail = service.ship_detail("s1").unwrap().unwrap();
    assert_eq!(detail.ship.name, "Ever Given");
    assert_eq!(detail.components.len(), 1);
    assert_eq!(detail.jobs.len(), 1);
    assert_eq!(detail.component_name(&detail.jobs[0]), "Main Engine");

    assert!(service.ship_detail("s404").unwrap().is_none());
}

#[test]
fn job_rows_apply_filter_before_resolving() {
    let service = FleetService::new(MemoryKvStore::new());
    service.initialize_storage().unwrap();
    let mut extra = Job::new("s2", "c2", "Calibration", "2025-05-06");
    extra.priority = JobPriority::Low;
    extra.status = JobStatus::InProgress;
    service.add_job(extra).unwrap();

    let filter = JobFilter {
        ship_id: Some("s2".to_string()),
        ..JobFilter::default()
    };
    let rows = service.job_rows(&filter).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].ship_name, "Maersk Alabama");
    assert_eq!(rows[0].component_name, "Radar");

    let high_priority = JobFilter {
        priority: Some(JobPriority::High),
        ..JobFilter::default()
    };
    let rows = service.job_rows(&high_priority).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].job.id, "j1");
}
