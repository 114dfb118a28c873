//! Room profile operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Filter, MeetingRoomConfiguration, Profile, ProfileData, Sort, Tag};
use crate::enums::{DistanceUnit, TemperatureUnit, WakeWord};
use crate::fmt::WireBody;

/// Request to create a room profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProfileRequest {
    /// Name for the profile (1-100 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    /// Olson timezone name for rooms using the profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Street address of the building
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Unit system for distance answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,
    /// Unit for temperature answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_unit: Option<TemperatureUnit>,
    /// Wake word for devices using the profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wake_word: Option<WakeWord>,
    /// Locale of the profile (IETF tag)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Idempotency token for the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
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
    /// Meeting room settings for the profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_room_configuration: Option<MeetingRoomConfiguration>,
    /// Tags for the profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateProfileRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile name.
    #[must_use]
    pub fn with_profile_name(mut self, profile_name: impl Into<String>) -> Self {
        self.profile_name = Some(profile_name.into());
        self
    }

    /// Set the timezone.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Set the street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the distance unit.
    #[must_use]
    pub const fn with_distance_unit(mut self, distance_unit: DistanceUnit) -> Self {
        self.distance_unit = Some(distance_unit);
        self
    }

    /// Set the temperature unit.
    #[must_use]
    pub const fn with_temperature_unit(mut self, temperature_unit: TemperatureUnit) -> Self {
        self.temperature_unit = Some(temperature_unit);
        self
    }

    /// Set the wake word.
    #[must_use]
    pub const fn with_wake_word(mut self, wake_word: WakeWord) -> Self {
        self.wake_word = Some(wake_word);
        self
    }

    /// Set the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the idempotency token.
    #[must_use]
    pub fn with_client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = Some(token.into());
        self
    }

    /// Enable or disable device setup mode.
    #[must_use]
    pub const fn with_setup_mode_disabled(mut self, disabled: bool) -> Self {
        self.setup_mode_disabled = Some(disabled);
        self
    }

    /// Set the maximum volume.
    #[must_use]
    pub const fn with_max_volume_limit(mut self, limit: i32) -> Self {
        self.max_volume_limit = Some(limit);
        self
    }

    /// Enable or disable PSTN calling.
    #[must_use]
    pub const fn with_pstn_enabled(mut self, enabled: bool) -> Self {
        self.pstn_enabled = Some(enabled);
        self
    }

    /// Opt in or out of voice data retention.
    #[must_use]
    pub const fn with_data_retention_opt_in(mut self, opt_in: bool) -> Self {
        self.data_retention_opt_in = Some(opt_in);
        self
    }

    /// Set the meeting room configuration.
    #[must_use]
    pub fn with_meeting_room_configuration(mut self, config: MeetingRoomConfiguration) -> Self {
        self.meeting_room_configuration = Some(config);
        self
    }

    /// Append one tag, allocating the backing list on first use.
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }
}

impl fmt::Display for CreateProfileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ProfileName", &self.profile_name)?;
        w.field("Timezone", &self.timezone)?;
        w.field("Address", &self.address)?;
        w.field("DistanceUnit", &self.distance_unit)?;
        w.field("TemperatureUnit", &self.temperature_unit)?;
        w.field("WakeWord", &self.wake_word)?;
        w.field("Locale", &self.locale)?;
        w.field("ClientRequestToken", &self.client_request_token)?;
        w.field("SetupModeDisabled", &self.setup_mode_disabled)?;
        w.field("MaxVolumeLimit", &self.max_volume_limit)?;
        w.field("PSTNEnabled", &self.pstn_enabled)?;
        w.field("DataRetentionOptIn", &self.data_retention_opt_in)?;
        w.field("MeetingRoomConfiguration", &self.meeting_room_configuration)?;
        w.list("Tags", &self.tags)?;
        w.end()
    }
}

/// Response of the create-profile operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProfileResponse {
    /// ARN of the created profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_arn: Option<String>,
}

impl fmt::Display for CreateProfileResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ProfileArn", &self.profile_arn)?;
        w.end()
    }
}

/// Request to fetch a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetProfileRequest {
    /// ARN of the profile; absent means the account default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_arn: Option<String>,
}

impl GetProfileRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile to fetch.
    #[must_use]
    pub fn with_profile_arn(mut self, profile_arn: impl Into<String>) -> Self {
        self.profile_arn = Some(profile_arn.into());
        self
    }
}

impl fmt::Display for GetProfileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ProfileArn", &self.profile_arn)?;
        w.end()
    }
}

/// Response of the get-profile operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetProfileResponse {
    /// The requested profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

impl fmt::Display for GetProfileResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Profile", &self.profile)?;
        w.end()
    }
}

/// Request to delete a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteProfileRequest {
    /// ARN of the profile to delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_arn: Option<String>,
}

impl DeleteProfileRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile to delete.
    #[must_use]
    pub fn with_profile_arn(mut self, profile_arn: impl Into<String>) -> Self {
        self.profile_arn = Some(profile_arn.into());
        self
    }
}

impl fmt::Display for DeleteProfileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ProfileArn", &self.profile_arn)?;
        w.end()
    }
}

/// Response of the delete-profile operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteProfileResponse {}

impl fmt::Display for DeleteProfileResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}

/// Request to search profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchProfilesRequest {
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Filter criteria (supported keys: `ProfileName`, `Address`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Sort criteria (supported keys: `ProfileName`, `Address`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<Vec<Sort>>,
}

impl SearchProfilesRequest {
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

impl fmt::Display for SearchProfilesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.list("Filters", &self.filters)?;
        w.list("SortCriteria", &self.sort_criteria)?;
        w.end()
    }
}

/// Response of the search-profiles operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchProfilesResponse {
    /// Profiles matching the criteria
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<ProfileData>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Total number of matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
}

impl fmt::Display for SearchProfilesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("Profiles", &self.profiles)?;
        w.field("NextToken", &self.next_token)?;
        w.field("TotalCount", &self.total_count)?;
        w.end()
    }
}
