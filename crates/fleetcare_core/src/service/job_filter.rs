//! Jobs list filtering.

use crate::model::job::{Job, JobPriority, JobStatus};

/// Filter options for the jobs list. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub ship_id: Option<String>,
    pub status: Option<JobStatus>,
    pub priority: Option<JobPriority>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        let ship_ok = match self.ship_id.as_deref() {
            Some(ship_id) if !ship_id.is_empty() => job.ship_id == ship_id,
            _ => true,
        };
        ship_ok
            && self.status.map_or(true, |status| job.status == status)
            && self.priority.map_or(true, |priority| job.priority == priority)
    }

    /// Matching jobs in stored order.
    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter().filter(|job| self.matches(job)).cloned().collect()
    }
}
