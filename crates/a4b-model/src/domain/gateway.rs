//! Gateway model shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fmt::WireBody;

/// A gateway, as returned by the get operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Gateway {
    /// ARN of the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Name of the gateway (1-253 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ARN of the group the gateway belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_group_arn: Option<String>,
    /// Software version of the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Arn", &self.arn)?;
        w.field("Name", &self.name)?;
        w.field("Description", &self.description)?;
        w.field("GatewayGroupArn", &self.gateway_group_arn)?;
        w.field("SoftwareVersion", &self.software_version)?;
        w.end()
    }
}

/// A gateway, as returned by the list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GatewaySummary {
    /// ARN of the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Name of the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ARN of the group the gateway belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_group_arn: Option<String>,
    /// Software version of the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
}

impl fmt::Display for GatewaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Arn", &self.arn)?;
        w.field("Name", &self.name)?;
        w.field("Description", &self.description)?;
        w.field("GatewayGroupArn", &self.gateway_group_arn)?;
        w.field("SoftwareVersion", &self.software_version)?;
        w.end()
    }
}

/// A gateway group, as returned by the get operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GatewayGroup {
    /// ARN of the gateway group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Name of the gateway group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the gateway group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl fmt::Display for GatewayGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Arn", &self.arn)?;
        w.field("Name", &self.name)?;
        w.field("Description", &self.description)?;
        w.end()
    }
}

/// A gateway group, as returned by the list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GatewayGroupSummary {
    /// ARN of the gateway group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Name of the gateway group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the gateway group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl fmt::Display for GatewayGroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Arn", &self.arn)?;
        w.field("Name", &self.name)?;
        w.field("Description", &self.description)?;
        w.end()
    }
}
