//! Repository layer over the key-value store.
//!
//! # Responsibility
//! - Provide generic whole-collection CRUD keyed by `CollectionKey`.
//! - Seed the starter dataset into never-initialized collections.
//!
//! # Invariants
//! - Every write replaces the full collection blob; there is no partial
//!   update and no version check.
//! - Malformed stored JSON is surfaced as `RepoError::Corrupted`, never
//!   masked as an empty collection.

pub mod entity_repo;
pub mod seed;
