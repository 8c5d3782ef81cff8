//! Installed component record.

use super::validation::{require, ValidationError};
use super::{new_entity_id, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by every persisted date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Equipment installed on a ship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Component {
    pub id: String,
    /// References `Ship::id`; not enforced.
    pub ship_id: String,
    pub name: String,
    pub serial_number: String,
    /// `yyyy-MM-dd`.
    pub install_date: String,
    /// `yyyy-MM-dd`.
    pub last_maintenance_date: String,
}

impl Component {
    /// Creates a component with a freshly generated id.
    pub fn new(
        ship_id: impl Into<String>,
        name: impl Into<String>,
        serial_number: impl Into<String>,
        install_date: impl Into<String>,
        last_maintenance_date: impl Into<String>,
    ) -> Self {
        Self {
            id: new_entity_id("c"),
            ship_id: ship_id.into(),
            name: name.into(),
            serial_number: serial_number.into(),
            install_date: install_date.into(),
            last_maintenance_date: last_maintenance_date.into(),
        }
    }

    /// Parsed `lastMaintenanceDate`, or `None` when blank or malformed.
    pub fn last_maintenance_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.last_maintenance_date.trim(), DATE_FORMAT).ok()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("component", "shipId", &self.ship_id)?;
        require("component", "name", &self.name)?;
        require("component", "serialNumber", &self.serial_number)?;
        require("component", "installDate", &self.install_date)?;
        require("component", "lastMaintenanceDate", &self.last_maintenance_date)?;
        Ok(())
    }
}

impl Record for Component {
    fn id(&self) -> &str {
        &self.id
    }
}
