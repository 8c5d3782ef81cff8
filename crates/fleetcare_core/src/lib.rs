//! Persistence and query core for a fleet maintenance dashboard.
//!
//! Ships, their installed components and maintenance jobs are stored as JSON
//! collections in a synchronous key-value store; dashboard KPIs, the status
//! histogram and calendar buckets are pure functions over those collections.

pub mod aggregate;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use aggregate::calendar::{calendar_month, jobs_on, CalendarDay, CalendarMonth, MonthCursor};
pub use aggregate::kpi::{
    compute_kpis, dashboard_summary, status_histogram, DashboardKpis, DashboardSummary,
    StatusCount,
};
pub use aggregate::today;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::component::Component;
pub use model::job::{Job, JobPriority, JobStatus};
pub use model::notification::Notification;
pub use model::ship::{Ship, ShipStatus};
pub use model::validation::ValidationError;
pub use model::{new_entity_id, Record};
pub use repo::entity_repo::{CollectionKey, EntityRepository, RepoError, RepoResult};
pub use repo::seed::initialize_storage;
pub use service::fleet_service::FleetService;
pub use service::job_filter::JobFilter;
pub use service::relations::{
    components_available_for_ship, components_for_ship, job_rows, jobs_for_ship,
    resolve_component_name, resolve_ship_name, JobRow, ShipDetail, NOT_AVAILABLE,
};
pub use store::{KvStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
