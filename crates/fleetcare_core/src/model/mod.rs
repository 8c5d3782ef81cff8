//! Fleet domain model.
//!
//! # Responsibility
//! - Define the persisted record shapes for ships, components, jobs and
//!   notifications.
//! - Provide caller-side id generation and required-field checks.
//!
//! # Invariants
//! - Every record carries a string `id`, unique within its collection.
//! - Ids are generated by callers and never reassigned.
//! - Cross-record references (`shipId`, `componentId`) are not enforced.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

pub mod component;
pub mod job;
pub mod notification;
pub mod ship;
pub mod validation;

/// A persisted record identified by a string `id`.
pub trait Record: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> &str;
}

/// Generates a fresh record id such as `s3f2c...`.
///
/// `prefix` names the collection (`s`, `c`, `j`, `n`), matching the ids of
/// the seeded fixtures.
pub fn new_entity_id(prefix: &str) -> String {
    format!("{prefix}{}", Uuid::new_v4().simple())
}
