//! Use-case services over the fleet repository.
//!
//! # Responsibility
//! - Bind the generic repository to fixed collection keys per entity.
//! - Resolve cross-entity references and list filters for UI callers.

pub mod fleet_service;
pub mod job_filter;
pub mod relations;
