//! Smart home appliance model shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fmt::WireBody;

/// A smart home appliance discovered in a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SmartHomeAppliance {
    /// Name the appliance answers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Description of the appliance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Manufacturer of the appliance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,
}

impl fmt::Display for SmartHomeAppliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("FriendlyName", &self.friendly_name)?;
        w.field("Description", &self.description)?;
        w.field("ManufacturerName", &self.manufacturer_name)?;
        w.end()
    }
}
