//! Fleet accessor service.
//!
//! # Responsibility
//! - Expose typed get/add/update/delete per entity over one injected store.
//! - Load collections for relationship and aggregate views.
//!
//! # Invariants
//! - CRUD methods are thin bindings of `EntityRepository` to fixed keys.
//! - Nothing here enforces referential integrity or validation.

use crate::aggregate::calendar::{calendar_month, jobs_on, CalendarMonth};
use crate::aggregate::kpi::{dashboard_summary, DashboardSummary};
use crate::model::component::Component;
use crate::model::job::Job;
use crate::model::notification::Notification;
use crate::model::ship::Ship;
use crate::repo::entity_repo::{CollectionKey, EntityRepository, RepoResult};
use crate::repo::seed;
use crate::service::job_filter::JobFilter;
use crate::service::relations::{self, JobRow, ShipDetail};
use crate::store::KvStore;
use chrono::NaiveDate;

/// Entry point for UI collaborators.
pub struct FleetService<S: KvStore> {
    repo: EntityRepository<S>,
}

impl<S: KvStore> FleetService<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    pub fn repository(&self) -> &EntityRepository<S> {
        &self.repo
    }

    /// Seeds never-initialized collections. Safe to call on every start.
    pub fn initialize_storage(&self) -> RepoResult<Vec<CollectionKey>> {
        seed::initialize_storage(&self.repo)
    }

    pub fn get_ships(&self) -> RepoResult<Vec<Ship>> {
        self.repo.get_all(CollectionKey::Ships)
    }

    pub fn add_ship(&self, ship: Ship) -> RepoResult<Ship> {
        self.repo.add(CollectionKey::Ships, ship)
    }

    pub fn update_ship(&self, ship: Ship) -> RepoResult<Option<Ship>> {
        self.repo.update(CollectionKey::Ships, ship)
    }

    /// Deletes a ship. Its components and jobs are left in place.
    pub fn delete_ship(&self, id: &str) -> RepoResult<()> {
        self.repo.delete::<Ship>(CollectionKey::Ships, id)
    }

    pub fn find_ship(&self, id: &str) -> RepoResult<Option<Ship>> {
        Ok(self.get_ships()?.into_iter().find(|ship| ship.id == id))
    }

    pub fn get_components(&self) -> RepoResult<Vec<Component>> {
        self.repo.get_all(CollectionKey::Components)
    }

    pub fn add_component(&self, component: Component) -> RepoResult<Component> {
        self.repo.add(CollectionKey::Components, component)
    }

    pub fn update_component(&self, component: Component) -> RepoResult<Option<Component>> {
        self.repo.update(CollectionKey::Components, component)
    }

    pub fn delete_component(&self, id: &str) -> RepoResult<()> {
        self.repo.delete::<Component>(CollectionKey::Components, id)
    }

    pub fn get_jobs(&self) -> RepoResult<Vec<Job>> {
        self.repo.get_all(CollectionKey::Jobs)
    }

    pub fn add_job(&self, job: Job) -> RepoResult<Job> {
        self.repo.add(CollectionKey::Jobs, job)
    }

    pub fn update_job(&self, job: Job) -> RepoResult<Option<Job>> {
        self.repo.update(CollectionKey::Jobs, job)
    }

    pub fn delete_job(&self, id: &str) -> RepoResult<()> {
        self.repo.delete::<Job>(CollectionKey::Jobs, id)
    }

    pub fn get_notifications(&self) -> RepoResult<Vec<Notification>> {
        self.repo.get_all(CollectionKey::Notifications)
    }

    pub fn add_notification(&self, notification: Notification) -> RepoResult<Notification> {
        self.repo.add(CollectionKey::Notifications, notification)
    }

    pub fn delete_notification(&self, id: &str) -> RepoResult<()> {
        self.repo
            .delete::<Notification>(CollectionKey::Notifications, id)
    }

    pub fn components_for_ship(&self, ship_id: &str) -> RepoResult<Vec<Component>> {
        Ok(relations::components_for_ship(
            &self.get_components()?,
            ship_id,
        ))
    }

    pub fn jobs_for_ship(&self, ship_id: &str) -> RepoResult<Vec<Job>> {
        Ok(relations::jobs_for_ship(&self.get_jobs()?, ship_id))
    }

    /// Components offered by the job form; all of them until a ship is chosen.
    pub fn components_available_for_ship(
        &self,
        ship_id: Option<&str>,
    ) -> RepoResult<Vec<Component>> {
        Ok(relations::components_available_for_ship(
            &self.get_components()?,
            ship_id,
        ))
    }

    /// Ship detail view, or `None` when the ship does not exist.
    pub fn ship_detail(&self, ship_id: &str) -> RepoResult<Option<ShipDetail>> {
        let Some(ship) = self.find_ship(ship_id)? else {
            return Ok(None);
        };
        Ok(Some(ShipDetail::assemble(
            ship,
            &self.get_components()?,
            &self.get_jobs()?,
        )))
    }

    /// Jobs table rows matching `filter`, with resolved display names.
    pub fn job_rows(&self, filter: &JobFilter) -> RepoResult<Vec<JobRow>> {
        let jobs = filter.apply(&self.get_jobs()?);
        Ok(relations::job_rows(
            &self.get_ships()?,
            &self.get_components()?,
            &jobs,
        ))
    }

    pub fn dashboard(&self, today: NaiveDate) -> RepoResult<DashboardSummary> {
        Ok(dashboard_summary(
            &self.get_ships()?,
            &self.get_components()?,
            &self.get_jobs()?,
            today,
        ))
    }

    /// Calendar for the month containing `anchor`.
    pub fn calendar(&self, anchor: NaiveDate) -> RepoResult<CalendarMonth> {
        Ok(calendar_month(&self.get_jobs()?, anchor))
    }

    /// Jobs scheduled on `date`, for the day-detail view.
    pub fn jobs_on(&self, date: NaiveDate) -> RepoResult<Vec<Job>> {
        Ok(jobs_on(&self.get_jobs()?, date))
    }
}
