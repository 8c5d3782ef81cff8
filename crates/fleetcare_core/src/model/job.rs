//! Maintenance job record.

use super::validation::{require, ValidationError};
use super::{new_entity_id, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl JobPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Job lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A unit of maintenance work on one component of one ship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Job {
    pub id: String,
    /// References `Ship::id`; not enforced.
    pub ship_id: String,
    /// References `Component::id`; not enforced.
    pub component_id: String,
    /// Free-text job type, serialized as `type`.
    #[serde(rename = "type")]
    pub job_type: String,
    pub priority: JobPriority,
    pub status: JobStatus,
    pub assigned_engineer_id: String,
    /// `yyyy-MM-dd`. Calendar bucketing compares this string verbatim.
    pub scheduled_date: String,
}

impl Job {
    /// Creates an open, medium-priority job with a freshly generated id.
    pub fn new(
        ship_id: impl Into<String>,
        component_id: impl Into<String>,
        job_type: impl Into<String>,
        scheduled_date: impl Into<String>,
    ) -> Self {
        Self {
            id: new_entity_id("j"),
            ship_id: ship_id.into(),
            component_id: component_id.into(),
            job_type: job_type.into(),
            scheduled_date: scheduled_date.into(),
            ..Self::default()
        }
    }

    /// Checks required fields. `assignedEngineerId` is optional.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("job", "shipId", &self.ship_id)?;
        require("job", "componentId", &self.component_id)?;
        require("job", "type", &self.job_type)?;
        require("job", "scheduledDate", &self.scheduled_date)?;
        Ok(())
    }
}

impl Record for Job {
    fn id(&self) -> &str {
        &self.id
    }
}
