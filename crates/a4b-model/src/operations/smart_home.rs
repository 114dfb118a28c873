//! Smart home appliance operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::SmartHomeAppliance;
use crate::fmt::WireBody;

/// Request to list the smart home appliances of a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSmartHomeAppliancesRequest {
    /// ARN of the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
    /// Maximum results per page (1-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListSmartHomeAppliancesRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the room.
    #[must_use]
    pub fn with_room_arn(mut self, room_arn: impl Into<String>) -> Self {
        self.room_arn = Some(room_arn.into());
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set the continuation token.
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl fmt::Display for ListSmartHomeAppliancesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomArn", &self.room_arn)?;
        w.field("MaxResults", &self.max_results)?;
        w.field("NextToken", &self.next_token)?;
        w.end()
    }
}

/// Response of the list-smart-home-appliances operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSmartHomeAppliancesResponse {
    /// Appliances discovered in the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_home_appliances: Option<Vec<SmartHomeAppliance>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListSmartHomeAppliancesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("SmartHomeAppliances", &self.smart_home_appliances)?;
        w.field("NextToken", &self.next_token)?;
        w.end()
    }
}

/// Request to forget the smart home appliances of a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForgetSmartHomeAppliancesRequest {
    /// ARN of the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
}

impl ForgetSmartHomeAppliancesRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the room.
    #[must_use]
    pub fn with_room_arn(mut self, room_arn: impl Into<String>) -> Self {
        self.room_arn = Some(room_arn.into());
        self
    }
}

impl fmt::Display for ForgetSmartHomeAppliancesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomArn", &self.room_arn)?;
        w.end()
    }
}

/// Response of the forget-smart-home-appliances operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForgetSmartHomeAppliancesResponse {}

impl fmt::Display for ForgetSmartHomeAppliancesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}
