//! Joins between jobs, components and ships.
//!
//! # Invariants
//! - References are matched by exact id equality.
//! - A reference that does not resolve yields [`NOT_AVAILABLE`], never an
//!   error; deletes do not cascade, so dangling ids are expected.

use crate::model::component::Component;
use crate::model::job::Job;
use crate::model::ship::Ship;
use serde::Serialize;

/// Display sentinel for an unresolved reference.
pub const NOT_AVAILABLE: &str = "N/A";

/// Components installed on `ship_id`, in stored order.
pub fn components_for_ship(components: &[Component], ship_id: &str) -> Vec<Component> {
    components
        .iter()
        .filter(|component| component.ship_id == ship_id)
        .cloned()
        .collect()
}

/// Jobs scheduled against `ship_id`, in stored order.
pub fn jobs_for_ship(jobs: &[Job], ship_id: &str) -> Vec<Job> {
    jobs.iter().filter(|job| job.ship_id == ship_id).cloned().collect()
}

/// Components selectable while building a job.
///
/// With no ship selected (`None` or an empty id) every component is
/// returned, so the form can be filled in any order.
pub fn components_available_for_ship(
    components: &[Component],
    ship_id: Option<&str>,
) -> Vec<Component> {
    match ship_id {
        Some(ship_id) if !ship_id.is_empty() => components_for_ship(components, ship_id),
        _ => components.to_vec(),
    }
}

/// Name of the ship `job` points at, or `"N/A"`.
pub fn resolve_ship_name<'a>(ships: &'a [Ship], job: &Job) -> &'a str {
    ships
        .iter()
        .find(|ship| ship.id == job.ship_id)
        .map(|ship| ship.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(NOT_AVAILABLE)
}

/// Name of the component `job` points at, or `"N/A"`.
pub fn resolve_component_name<'a>(components: &'a [Component], job: &Job) -> &'a str {
    components
        .iter()
        .find(|component| component.id == job.component_id)
        .map(|component| component.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(NOT_AVAILABLE)
}

/// One row of the jobs table: the job plus resolved display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub job: Job,
    pub ship_name: String,
    pub component_name: String,
}

/// Resolves display names for every job in `jobs`.
pub fn job_rows(ships: &[Ship], components: &[Component], jobs: &[Job]) -> Vec<JobRow> {
    jobs.iter()
        .map(|job| JobRow {
            job: job.clone(),
            ship_name: resolve_ship_name(ships, job).to_string(),
            component_name: resolve_component_name(components, job).to_string(),
        })
        .collect()
}

/// Ship detail view: the ship with its components and jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipDetail {
    pub ship: Ship,
    pub components: Vec<Component>,
    pub jobs: Vec<Job>,
}

impl ShipDetail {
    /// Assembles the detail view for `ship` from full collections.
    pub fn assemble(ship: Ship, components: &[Component], jobs: &[Job]) -> Self {
        Self {
            components: components_for_ship(components, &ship.id),
            jobs: jobs_for_ship(jobs, &ship.id),
            ship,
        }
    }

    /// Component name for a job on this ship, looked up among this ship's
    /// components only.
    pub fn component_name(&self, job: &Job) -> &str {
        resolve_component_name(&self.components, job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(id: &str, ship_id: &str, name: &str) -> Component {
        Component {
            id: id.to_string(),
            ship_id: ship_id.to_string(),
            name: name.to_string(),
            ..Component::default()
        }
    }

    #[test]
    fn blank_name_falls_back_to_sentinel() {
        let ships = vec![Ship {
            id: "s1".to_string(),
            ..Ship::default()
        }];
        let job = Job {
            ship_id: "s1".to_string(),
            ..Job::default()
        };
        assert_eq!(resolve_ship_name(&ships, &job), NOT_AVAILABLE);
    }

    #[test]
    fn empty_ship_id_counts_as_no_selection() {
        let components = vec![component("c1", "s1", "Engine"), component("c2", "s2", "Radar")];
        assert_eq!(components_available_for_ship(&components, Some("")).len(), 2);
    }

    #[test]
    fn ship_detail_scopes_component_lookup_to_ship() {
        let ship = Ship {
            id: "s1".to_string(),
            name: "Ever Given".to_string(),
            ..Ship::default()
        };
        let components = vec![component("c1", "s1", "Engine"), component("c2", "s2", "Radar")];
        let jobs = vec![Job {
            id: "j1".to_string(),
            ship_id: "s1".to_string(),
            component_id: "c2".to_string(),
            ..Job::default()
        }];

        let detail = ShipDetail::assemble(ship, &components, &jobs);
        assert_eq!(detail.components.len(), 1);
        assert_eq!(detail.jobs.len(), 1);
        assert_eq!(detail.component_name(&detail.jobs[0]), NOT_AVAILABLE);
    }
}
