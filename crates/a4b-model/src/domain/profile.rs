//! Room profile model shapes.
//!
//! A profile bundles the regional and device settings applied to every
//! device in a room; the meeting room configuration nested inside it drives
//! the calendar-integration behavior.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{DistanceUnit, EndOfMeetingReminderType, TemperatureUnit, WakeWord};
use crate::fmt::WireBody;

/// A room profile, as returned by the get operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    /// ARN of the profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_arn: Option<String>,
    /// Name of the profile (1-100 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    /// Whether this is the account's default profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// Street address of the building the rooms are in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Olson timezone name (e.g. `America/Los_Angeles`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Unit system for distance answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,
    /// Unit for temperature answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_unit: Option<TemperatureUnit>,
    /// Wake word for devices using this profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wake_word: Option<WakeWord>,
    /// Locale of the profile (IETF tag, e.g. `en-US`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Whether device setup mode is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_mode_disabled: Option<bool>,
    /// Maximum volume devices may be set to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_volume_limit: Option<i32>,
    /// Whether PSTN calling is enabled
    #[serde(rename = "PSTNEnabled", skip_serializing_if = "Option::is_none")]
    pub pstn_enabled: Option<bool>,
    /// Whether voice data is retained for service improvement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_retention_opt_in: Option<bool>,
    /// ARN of the address book bound to this profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_book_arn: Option<String>,
    /// Meeting room settings of the profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_room_configuration: Option<MeetingRoomConfiguration>,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ProfileArn", &self.profile_arn)?;
        w.field("ProfileName", &self.profile_name)?;
        w.field("IsDefault", &self.is_default)?;
        w.field("Address", &self.address)?;
        w.field("Timezone", &self.timezone)?;
        w.field("DistanceUnit", &self.distance_unit)?;
        w.field("TemperatureUnit", &self.temperature_unit)?;
        w.field("WakeWord", &self.wake_word)?;
        w.field("Locale", &self.locale)?;
        w.field("SetupModeDisabled", &self.setup_mode_disabled)?;
        w.field("MaxVolumeLimit", &self.max_volume_limit)?;
        w.field("PSTNEnabled", &self.pstn_enabled)?;
        w.field("DataRetentionOptIn", &self.data_retention_opt_in)?;
        w.field("AddressBookArn", &self.address_book_arn)?;
        w.field("MeetingRoomConfiguration", &self.meeting_room_configuration)?;
        w.end()
    }
}

/// A room profile, as returned by the search operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileData {
    /// ARN of the profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_arn: Option<String>,
    /// Name of the profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    /// Whether this is the account's default profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// Street address of the building the rooms are in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Olson timezone name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Unit system for distance answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,
    /// Unit for temperature answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_unit: Option<TemperatureUnit>,
    /// Wake word for devices using this profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wake_word: Option<WakeWord>,
    /// Locale of the profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl fmt::Display for ProfileData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ProfileArn", &self.profile_arn)?;
        w.field("ProfileName", &self.profile_name)?;
        w.field("IsDefault", &self.is_default)?;
        w.field("Address", &self.address)?;
        w.field("Timezone", &self.timezone)?;
        w.field("DistanceUnit", &self.distance_unit)?;
        w.field("TemperatureUnit", &self.temperature_unit)?;
        w.field("WakeWord", &self.wake_word)?;
        w.field("Locale", &self.locale)?;
        w.end()
    }
}

/// Meeting room settings of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MeetingRoomConfiguration {
    /// Whether room utilization metrics are collected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_utilization_metrics_enabled: Option<bool>,
    /// End-of-meeting reminder settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_of_meeting_reminder: Option<EndOfMeetingReminder>,
    /// Instant-booking settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instant_booking: Option<InstantBooking>,
    /// Check-in requirement settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_check_in: Option<RequireCheckIn>,
}

impl MeetingRoomConfiguration {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable room utilization metrics.
    #[must_use]
    pub const fn with_room_utilization_metrics_enabled(mut self, enabled: bool) -> Self {
        self.room_utilization_metrics_enabled = Some(enabled);
        self
    }

    /// Set the end-of-meeting reminder settings.
    #[must_use]
    pub fn with_end_of_meeting_reminder(mut self, reminder: EndOfMeetingReminder) -> Self {
        self.end_of_meeting_reminder = Some(reminder);
        self
    }

    /// Set the instant-booking settings.
    #[must_use]
    pub fn with_instant_booking(mut self, instant_booking: InstantBooking) -> Self {
        self.instant_booking = Some(instant_booking);
        self
    }

    /// Set the check-in requirement settings.
    #[must_use]
    pub fn with_require_check_in(mut self, require_check_in: RequireCheckIn) -> Self {
        self.require_check_in = Some(require_check_in);
        self
    }
}

impl fmt::Display for MeetingRoomConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field(
            "RoomUtilizationMetricsEnabled",
            &self.room_utilization_metrics_enabled,
        )?;
        w.field("EndOfMeetingReminder", &self.end_of_meeting_reminder)?;
        w.field("InstantBooking", &self.instant_booking)?;
        w.field("RequireCheckIn", &self.require_check_in)?;
        w.end()
    }
}

/// Reminder announced near the end of a booked meeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndOfMeetingReminder {
    /// Minutes before meeting end at which to remind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_at_minutes: Option<Vec<i32>>,
    /// How the reminder announces itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_type: Option<EndOfMeetingReminderType>,
    /// Whether the reminder is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl EndOfMeetingReminder {
    /// Create an empty reminder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one reminder offset, allocating the backing list on first use.
    #[must_use]
    pub fn with_reminder_at_minutes(mut self, minutes: i32) -> Self {
        self.reminder_at_minutes
            .get_or_insert_with(Vec::new)
            .push(minutes);
        self
    }

    /// Set how the reminder announces itself.
    #[must_use]
    pub const fn with_reminder_type(mut self, reminder_type: EndOfMeetingReminderType) -> Self {
        self.reminder_type = Some(reminder_type);
        self
    }

    /// Enable or disable the reminder.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

impl fmt::Display for EndOfMeetingReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("ReminderAtMinutes", &self.reminder_at_minutes)?;
        w.field("ReminderType", &self.reminder_type)?;
        w.field("Enabled", &self.enabled)?;
        w.end()
    }
}

/// Instant-booking settings of a meeting room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstantBooking {
    /// Duration of an instant booking, in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_minutes: Option<i32>,
    /// Whether instant booking is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl InstantBooking {
    /// Create an empty instant-booking setting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the booking duration in minutes.
    #[must_use]
    pub const fn with_duration_in_minutes(mut self, minutes: i32) -> Self {
        self.duration_in_minutes = Some(minutes);
        self
    }

    /// Enable or disable instant booking.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

impl fmt::Display for InstantBooking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("DurationInMinutes", &self.duration_in_minutes)?;
        w.field("Enabled", &self.enabled)?;
        w.end()
    }
}

/// Check-in requirement settings of a meeting room.
///
/// When enabled, a booked room is released if nobody checks in within
/// `release_after_minutes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequireCheckIn {
    /// Minutes after meeting start before the room is released
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_after_minutes: Option<i32>,
    /// Whether check-in is required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl RequireCheckIn {
    /// Create an empty check-in setting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the release timeout in minutes.
    #[must_use]
    pub const fn with_release_after_minutes(mut self, minutes: i32) -> Self {
        self.release_after_minutes = Some(minutes);
        self
    }

    /// Enable or disable the check-in requirement.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

impl fmt::Display for RequireCheckIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ReleaseAfterMinutes", &self.release_after_minutes)?;
        w.field("Enabled", &self.enabled)?;
        w.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_room_configuration_renders_nested() {
        let config = MeetingRoomConfiguration::new()
            .with_room_utilization_metrics_enabled(true)
            .with_end_of_meeting_reminder(
                EndOfMeetingReminder::new()
                    .with_reminder_at_minutes(10)
                    .with_reminder_at_minutes(5)
                    .with_reminder_type(EndOfMeetingReminderType::Chime)
                    .with_enabled(true),
            );
        assert_eq!(
            config.to_string(),
            "{RoomUtilizationMetricsEnabled: true,EndOfMeetingReminder: \
             {ReminderAtMinutes: [10, 5],ReminderType: CHIME,Enabled: true}}"
        );
    }

    #[test]
    fn test_profile_display_omits_absent_fields() {
        let profile = Profile {
            profile_name: Some("Executive Floor".to_string()),
            wake_word: Some(WakeWord::Echo),
            ..Profile::default()
        };
        assert_eq!(
            profile.to_string(),
            "{ProfileName: Executive Floor,WakeWord: ECHO}"
        );
    }
}
