//! Device operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Device, DeviceData, DeviceEvent, Filter, Sort};
use crate::enums::{DeviceEventType, Feature};
use crate::fmt::WireBody;

/// Request to fetch a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDeviceRequest {
    /// ARN of the device to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_arn: Option<String>,
}

impl GetDeviceRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the device to fetch.
    #[must_use]
    pub fn with_device_arn(mut self, device_arn: impl Into<String>) -> Self {
        self.device_arn = Some(device_arn.into());
        self
    }
}

impl fmt::Display for GetDeviceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("DeviceArn", &self.device_arn)?;
        w.end()
    }
}

/// Response of the get-device operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDeviceResponse {
    /// The requested device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
}

impl fmt::Display for GetDeviceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Device", &self.device)?;
        w.end()
    }
}

/// Request to search devices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchDevicesRequest {
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Filter criteria (supported keys include `DeviceName`,
    /// `DeviceStatus`, `RoomName`, `ConnectionStatus`, `NetworkProfileName`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Sort criteria
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<Vec<Sort>>,
}

impl SearchDevicesRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the continuation token.
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Append one filter criterion, allocating the backing list on first
    /// use.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(filter);
        self
    }

    /// Append one sort criterion.
    #[must_use]
    pub fn with_sort_criterion(mut self, sort: Sort) -> Self {
        self.sort_criteria.get_or_insert_with(Vec::new).push(sort);
        self
    }
}

impl fmt::Display for SearchDevicesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.list("Filters", &self.filters)?;
        w.list("SortCriteria", &self.sort_criteria)?;
        w.end()
    }
}

/// Response of the search-devices operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchDevicesResponse {
    /// Devices matching the criteria
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<DeviceData>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Total number of matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
}

impl fmt::Display for SearchDevicesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("Devices", &self.devices)?;
        w.field("NextToken", &self.next_token)?;
        w.field("TotalCount", &self.total_count)?;
        w.end()
    }
}

/// Request to resynchronize device features.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartDeviceSyncRequest {
    /// ARN of the room whose devices to sync
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
    /// ARN of the specific device to sync
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_arn: Option<String>,
    /// Features to resynchronize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,
}

impl StartDeviceSyncRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the room whose devices to sync.
    #[must_use]
    pub fn with_room_arn(mut self, room_arn: impl Into<String>) -> Self {
        self.room_arn = Some(room_arn.into());
        self
    }

    /// Set the device to sync.
    #[must_use]
    pub fn with_device_arn(mut self, device_arn: impl Into<String>) -> Self {
        self.device_arn = Some(device_arn.into());
        self
    }

    /// Append one feature to sync, allocating the backing list on first
    /// use.
    #[must_use]
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.get_or_insert_with(Vec::new).push(feature);
        self
    }
}

impl fmt::Display for StartDeviceSyncRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RoomArn", &self.room_arn)?;
        w.field("DeviceArn", &self.device_arn)?;
        w.list("Features", &self.features)?;
        w.end()
    }
}

/// Response of the start-device-sync operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StartDeviceSyncResponse {}

impl fmt::Display for StartDeviceSyncResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}

/// Request to list a device's event history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDeviceEventsRequest {
    /// ARN of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_arn: Option<String>,
    /// Restrict to one kind of event; absent means all kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<DeviceEventType>,
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListDeviceEventsRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the device.
    #[must_use]
    pub fn with_device_arn(mut self, device_arn: impl Into<String>) -> Self {
        self.device_arn = Some(device_arn.into());
        self
    }

    /// Restrict to one kind of event.
    #[must_use]
    pub const fn with_event_type(mut self, event_type: DeviceEventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    /// Set the continuation token.
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl fmt::Display for ListDeviceEventsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("DeviceArn", &self.device_arn)?;
        w.field("EventType", &self.event_type)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.end()
    }
}

/// Response of the list-device-events operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDeviceEventsResponse {
    /// The requested page of events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_events: Option<Vec<DeviceEvent>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListDeviceEventsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("DeviceEvents", &self.device_events)?;
        w.field("NextToken", &self.next_token)?;
        w.end()
    }
}

/// Request to move a device into a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateDeviceWithRoomRequest {
    /// ARN of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_arn: Option<String>,
    /// ARN of the room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
}

impl AssociateDeviceWithRoomRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the device.
    #[must_use]
    pub fn with_device_arn(mut self, device_arn: impl Into<String>) -> Self {
        self.device_arn = Some(device_arn.into());
        self
    }

    /// Set the room.
    #[must_use]
    pub fn with_room_arn(mut self, room_arn: impl Into<String>) -> Self {
        self.room_arn = Some(room_arn.into());
        self
    }
}

impl fmt::Display for AssociateDeviceWithRoomRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("DeviceArn", &self.device_arn)?;
        w.field("RoomArn", &self.room_arn)?;
        w.end()
    }
}

/// Response of the associate-device-with-room operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssociateDeviceWithRoomResponse {}

impl fmt::Display for AssociateDeviceWithRoomResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_device_sync_features_accumulate() {
        let request = StartDeviceSyncRequest::new()
            .with_device_arn("arn:aws:a4b:us-east-1:111122223333:device/abc")
            .with_feature(Feature::Bluetooth)
            .with_feature(Feature::Volume);
        assert_eq!(
            request.features,
            Some(vec![Feature::Bluetooth, Feature::Volume])
        );
        assert_eq!(
            request.to_string(),
            "{DeviceArn: arn:aws:a4b:us-east-1:111122223333:device/abc,\
             Features: [BLUETOOTH, VOLUME]}"
        );
    }
}
