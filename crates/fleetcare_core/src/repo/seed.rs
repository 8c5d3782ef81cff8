//! Starter dataset and first-run seeding.
//!
//! # Invariants
//! - A collection is seeded only when its key is absent from the store.
//! - A present collection is never touched, even when it is an empty array.

use super::entity_repo::{CollectionKey, EntityRepository, RepoResult};
use crate::model::component::Component;
use crate::model::job::{Job, JobPriority, JobStatus};
use crate::model::notification::Notification;
use crate::model::ship::{Ship, ShipStatus};
use crate::store::KvStore;
use log::info;

/// Writes the starter dataset into every never-initialized collection.
///
/// Returns the keys that were seeded, in seeding order. Calling this again
/// is a no-op and returns an empty list.
pub fn initialize_storage<S: KvStore>(repo: &EntityRepository<S>) -> RepoResult<Vec<CollectionKey>> {
    let mut seeded = Vec::new();

    for key in CollectionKey::ALL {
        if repo.is_initialized(key)? {
            continue;
        }

        match key {
            CollectionKey::Ships => repo.set_all(key, &default_ships())?,
            CollectionKey::Components => repo.set_all(key, &default_components())?,
            CollectionKey::Jobs => repo.set_all(key, &default_jobs())?,
            CollectionKey::Notifications => repo.set_all::<Notification>(key, &[])?,
        }
        seeded.push(key);
    }

    info!(
        "event=storage_seed module=repo status=ok seeded_count={} seeded={:?}",
        seeded.len(),
        seeded.iter().map(|key| key.as_str()).collect::<Vec<_>>()
    );
    Ok(seeded)
}

pub fn default_ships() -> Vec<Ship> {
    vec![
        Ship {
            id: "s1".to_string(),
            name: "Ever Given".to_string(),
            imo: "9811000".to_string(),
            flag: "Panama".to_string(),
            status: ShipStatus::Active,
        },
        Ship {
            id: "s2".to_string(),
            name: "Maersk Alabama".to_string(),
            imo: "9164263".to_string(),
            flag: "USA".to_string(),
            status: ShipStatus::UnderMaintenance,
        },
    ]
}

pub fn default_components() -> Vec<Component> {
    vec![
        Component {
            id: "c1".to_string(),
            ship_id: "s1".to_string(),
            name: "Main Engine".to_string(),
            serial_number: "ME-1234".to_string(),
            install_date: "2020-01-10".to_string(),
            last_maintenance_date: "2024-03-12".to_string(),
        },
        Component {
            id: "c2".to_string(),
            ship_id: "s2".to_string(),
            name: "Radar".to_string(),
            serial_number: "RAD-5678".to_string(),
            install_date: "2021-07-18".to_string(),
            last_maintenance_date: "2023-12-01".to_string(),
        },
    ]
}

pub fn default_jobs() -> Vec<Job> {
    vec![Job {
        id: "j1".to_string(),
        ship_id: "s1".to_string(),
        component_id: "c1".to_string(),
        job_type: "Inspection".to_string(),
        priority: JobPriority::High,
        status: JobStatus::Open,
        assigned_engineer_id: "3".to_string(),
        scheduled_date: "2024-05-05".to_string(),
    }]
}
