//! Ship record.

use super::validation::{require, ValidationError};
use super::{new_entity_id, Record};
use serde::{Deserialize, Serialize};

/// Operational state of a ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipStatus {
    #[default]
    Active,
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
    Inactive,
}

impl ShipStatus {
    /// Display label, identical to the persisted value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::UnderMaintenance => "Under Maintenance",
            Self::Inactive => "Inactive",
        }
    }
}

/// A vessel in the fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Ship {
    pub id: String,
    pub name: String,
    /// IMO registration number.
    pub imo: String,
    pub flag: String,
    pub status: ShipStatus,
}

impl Ship {
    /// Creates a ship with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        imo: impl Into<String>,
        flag: impl Into<String>,
        status: ShipStatus,
    ) -> Self {
        Self {
            id: new_entity_id("s"),
            name: name.into(),
            imo: imo.into(),
            flag: flag.into(),
            status,
        }
    }

    /// Checks that `name`, `imo` and `flag` are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("ship", "name", &self.name)?;
        require("ship", "imo", &self.imo)?;
        require("ship", "flag", &self.flag)?;
        Ok(())
    }
}

impl Record for Ship {
    fn id(&self) -> &str {
        &self.id
    }
}
