//! Device model shapes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{ConnectionStatus, DeviceEventType, DeviceStatus, DeviceStatusDetailCode, Feature};
use crate::fmt::WireBody;

/// A device, as returned by the get operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Device {
    /// ARN of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_arn: Option<String>,
    /// Serial number of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_serial_number: Option<String>,
    /// Type of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    /// Name of the device (2-100 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    /// Software version of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    /// MAC address of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// ARN of the room the device is in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
    /// Provisioning status of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_status: Option<DeviceStatus>,
    /// Detailed status of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_status_info: Option<DeviceStatusInfo>,
    /// Network profile associated with the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile_info: Option<DeviceNetworkProfileInfo>,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("DeviceArn", &self.device_arn)?;
        w.field("DeviceSerialNumber", &self.device_serial_number)?;
        w.field("DeviceType", &self.device_type)?;
        w.field("DeviceName", &self.device_name)?;
        w.field("SoftwareVersion", &self.software_version)?;
        w.field("MacAddress", &self.mac_address)?;
        w.field("RoomArn", &self.room_arn)?;
        w.field("DeviceStatus", &self.device_status)?;
        w.field("DeviceStatusInfo", &self.device_status_info)?;
        w.field("NetworkProfileInfo", &self.network_profile_info)?;
        w.end()
    }
}

/// A device, as returned by the search operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceData {
    /// ARN of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_arn: Option<String>,
    /// Serial number of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_serial_number: Option<String>,
    /// Type of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    /// Name of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    /// Software version of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    /// MAC address of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// Provisioning status of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_status: Option<DeviceStatus>,
    /// ARN of the associated network profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile_arn: Option<String>,
    /// Name of the associated network profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile_name: Option<String>,
    /// ARN of the room the device is in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_arn: Option<String>,
    /// Name of the room the device is in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    /// Detailed status of the device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_status_info: Option<DeviceStatusInfo>,
    /// When the device was registered, as epoch seconds on the wire
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<DateTime<Utc>>,
}

impl fmt::Display for DeviceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("DeviceArn", &self.device_arn)?;
        w.field("DeviceSerialNumber", &self.device_serial_number)?;
        w.field("DeviceType", &self.device_type)?;
        w.field("DeviceName", &self.device_name)?;
        w.field("SoftwareVersion", &self.software_version)?;
        w.field("MacAddress", &self.mac_address)?;
        w.field("DeviceStatus", &self.device_status)?;
        w.field("NetworkProfileArn", &self.network_profile_arn)?;
        w.field("NetworkProfileName", &self.network_profile_name)?;
        w.field("RoomArn", &self.room_arn)?;
        w.field("RoomName", &self.room_name)?;
        w.field("DeviceStatusInfo", &self.device_status_info)?;
        w.field("CreatedTime", &self.created_time)?;
        w.end()
    }
}

/// Detailed status of a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceStatusInfo {
    /// One entry per reported detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_status_details: Option<Vec<DeviceStatusDetail>>,
    /// Whether the device is currently reachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_status: Option<ConnectionStatus>,
    /// When the connection status last changed, as epoch seconds on the wire
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub connection_status_updated_time: Option<DateTime<Utc>>,
}

impl fmt::Display for DeviceStatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("DeviceStatusDetails", &self.device_status_details)?;
        w.field("ConnectionStatus", &self.connection_status)?;
        w.field(
            "ConnectionStatusUpdatedTime",
            &self.connection_status_updated_time,
        )?;
        w.end()
    }
}

/// One detail entry of a device status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceStatusDetail {
    /// Feature the detail applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<Feature>,
    /// Detail code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<DeviceStatusDetailCode>,
}

impl fmt::Display for DeviceStatusDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Feature", &self.feature)?;
        w.field("Code", &self.code)?;
        w.end()
    }
}

/// Network profile details attached to a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceNetworkProfileInfo {
    /// ARN of the network profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile_arn: Option<String>,
    /// ARN of the device's certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<String>,
    /// When the certificate expires, as epoch seconds on the wire
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub certificate_expiration_time: Option<DateTime<Utc>>,
}

impl fmt::Display for DeviceNetworkProfileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NetworkProfileArn", &self.network_profile_arn)?;
        w.field("CertificateArn", &self.certificate_arn)?;
        w.field("CertificateExpirationTime", &self.certificate_expiration_time)?;
        w.end()
    }
}

/// One entry in a device's event history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceEvent {
    /// Kind of event
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<DeviceEventType>,
    /// Event value (meaning depends on the kind)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// When the event occurred, as epoch seconds on the wire
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

impl fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Type", &self.event_type)?;
        w.field("Value", &self.value)?;
        w.field("Timestamp", &self.timestamp)?;
        w.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_device_status_info_serializes_epoch_seconds() {
        let info = DeviceStatusInfo {
            connection_status: Some(ConnectionStatus::Online),
            connection_status_updated_time: Some(Utc.timestamp_opt(1_546_300_800, 0).unwrap()),
            ..DeviceStatusInfo::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["ConnectionStatus"], "ONLINE");
        assert_eq!(json["ConnectionStatusUpdatedTime"], 1_546_300_800);
        assert!(json.get("DeviceStatusDetails").is_none());
    }

    #[test]
    fn test_device_event_round_trips() {
        let event = DeviceEvent {
            event_type: Some(DeviceEventType::ConnectionStatus),
            value: Some("ONLINE".to_string()),
            timestamp: Some(Utc.timestamp_opt(1_546_304_400, 0).unwrap()),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: DeviceEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
