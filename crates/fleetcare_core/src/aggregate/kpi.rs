//! Dashboard KPIs and the jobs-by-status histogram.

use crate::model::component::Component;
use crate::model::job::{Job, JobStatus};
use crate::model::ship::Ship;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub total_ships: usize,
    /// Components whose last maintenance date is before the reference date.
    pub overdue_maintenance: usize,
    pub jobs_in_progress: usize,
    pub completed_jobs: usize,
}

/// One bar of the jobs-by-status chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: JobStatus,
    pub count: usize,
}

/// KPIs and histogram shown together on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub kpis: DashboardKpis,
    pub jobs_by_status: Vec<StatusCount>,
}

/// Computes the four dashboard counters as of `today`.
///
/// A component with a blank or unparsable `lastMaintenanceDate` is not
/// counted as overdue.
pub fn compute_kpis(
    ships: &[Ship],
    components: &[Component],
    jobs: &[Job],
    today: NaiveDate,
) -> DashboardKpis {
    DashboardKpis {
        total_ships: ships.len(),
        overdue_maintenance: components
            .iter()
            .filter(|component| is_overdue(component, today))
            .count(),
        jobs_in_progress: count_status(jobs, JobStatus::InProgress),
        completed_jobs: count_status(jobs, JobStatus::Completed),
    }
}

pub fn is_overdue(component: &Component, today: NaiveDate) -> bool {
    component
        .last_maintenance_on()
        .is_some_and(|date| date < today)
}

fn count_status(jobs: &[Job], status: JobStatus) -> usize {
    jobs.iter().filter(|job| job.status == status).count()
}

/// Counts jobs per status in first-seen order.
///
/// Statuses with no jobs are absent rather than zero.
pub fn status_histogram(jobs: &[Job]) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = Vec::new();
    for job in jobs {
        match counts.iter_mut().find(|entry| entry.status == job.status) {
            Some(entry) => entry.count += 1,
            None => counts.push(StatusCount {
                status: job.status,
                count: 1,
            }),
        }
    }
    counts
}

pub fn dashboard_summary(
    ships: &[Ship],
    components: &[Component],
    jobs: &[Job],
    today: NaiveDate,
) -> DashboardSummary {
    DashboardSummary {
        kpis: compute_kpis(ships, components, jobs, today),
        jobs_by_status: status_histogram(jobs),
    }
}

#[cfg(test)]
mod tests {
    use super::{is_overdue, status_histogram, StatusCount};
    use crate::model::component::Component;
    use crate::model::job::{Job, JobStatus};
    use chrono::NaiveDate;

    fn job(status: JobStatus) -> Job {
        Job {
            status,
            ..Job::default()
        }
    }

    #[test]
    fn maintenance_on_reference_day_is_not_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let component = Component {
            last_maintenance_date: "2025-01-01".to_string(),
            ..Component::default()
        };
        assert!(!is_overdue(&component, today));
    }

    #[test]
    fn histogram_keeps_first_seen_order() {
        let jobs = vec![
            job(JobStatus::Completed),
            job(JobStatus::Open),
            job(JobStatus::Completed),
        ];
        assert_eq!(
            status_histogram(&jobs),
            vec![
                StatusCount {
                    status: JobStatus::Completed,
                    count: 2
                },
                StatusCount {
                    status: JobStatus::Open,
                    count: 1
                },
            ]
        );
        assert!(status_histogram(&[]).is_empty());
    }
}
