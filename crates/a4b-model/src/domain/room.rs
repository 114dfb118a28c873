//! Room model shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fmt::WireBody;

/// A room, as returned by the get operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Room {
    /// ARN of the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
    /// Name of the room (1-100 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    /// Description of the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calendar identifier in the calendar provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_calendar_id: Option<String>,
    /// ARN of the profile applied to the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_arn: Option<String>,
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomArn", &self.room_arn)?;
        w.field("RoomName", &self.room_name)?;
        w.field("Description", &self.description)?;
        w.field("ProviderCalendarId", &self.provider_calendar_id)?;
        w.field("ProfileArn", &self.profile_arn)?;
        w.end()
    }
}

/// A room, as returned by the search operation.
///
/// Carries the resolved profile name in addition to the [`Room`] fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomData {
    /// ARN of the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
    /// Name of the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    /// Description of the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calendar identifier in the calendar provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_calendar_id: Option<String>,
    /// ARN of the profile applied to the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_arn: Option<String>,
    /// Name of the profile applied to the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
}

impl fmt::Display for RoomData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomArn", &self.room_arn)?;
        w.field("RoomName", &self.room_name)?;
        w.field("Description", &self.description)?;
        w.field("ProviderCalendarId", &self.provider_calendar_id)?;
        w.field("ProfileArn", &self.profile_arn)?;
        w.field("ProfileName", &self.profile_name)?;
        w.end()
    }
}

/// A skill parameter scoped to a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomSkillParameter {
    /// Parameter key (1-256 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_key: Option<String>,
    /// Parameter value (1-512 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_value: Option<String>,
}

impl RoomSkillParameter {
    /// Create a parameter with both parts set.
    #[must_use]
    pub fn new(parameter_key: impl Into<String>, parameter_value: impl Into<String>) -> Self {
        Self {
            parameter_key: Some(parameter_key.into()),
            parameter_value: Some(parameter_value.into()),
        }
    }
}

impl fmt::Display for RoomSkillParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ParameterKey", &self.parameter_key)?;
        w.field("ParameterValue", &self.parameter_value)?;
        w.end()
    }
}
