//! Conference provider operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    ConferencePreference, ConferenceProvider, IpDialIn, MeetingSetting, PstnDialIn, Tag,
};
use crate::enums::ConferenceProviderType;
use crate::fmt::WireBody;

/// Request to create a conference provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateConferenceProviderRequest {
    /// Name for the conference provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_provider_name: Option<String>,
    /// Conferencing service behind the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_provider_type: Option<ConferenceProviderType>,
    /// IP dial-in endpoint
    #[serde(rename = "IPDialIn", skip_serializing_if = "Option::is_none")]
    pub ip_dial_in: Option<IpDialIn>,
    /// PSTN dial-in numbers
    #[serde(rename = "PSTNDialIn", skip_serializing_if = "Option::is_none")]
    pub pstn_dial_in: Option<PstnDialIn>,
    /// Meeting join settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_setting: Option<MeetingSetting>,
    /// Idempotency token for the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    /// Tags for the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateConferenceProviderRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider name.
    #[must_use]
    pub fn with_conference_provider_name(mut self, name: impl Into<String>) -> Self {
        self.conference_provider_name = Some(name.into());
        self
    }

    /// Set the conferencing service.
    #[must_use]
    pub const fn with_conference_provider_type(
        mut self,
        provider_type: ConferenceProviderType,
    ) -> Self {
        self.conference_provider_type = Some(provider_type);
        self
    }

    /// Set the IP dial-in endpoint.
    #[must_use]
    pub fn with_ip_dial_in(mut self, ip_dial_in: IpDialIn) -> Self {
        self.ip_dial_in = Some(ip_dial_in);
        self
    }

    /// Set the PSTN dial-in numbers.
    #[must_use]
    pub fn with_pstn_dial_in(mut self, pstn_dial_in: PstnDialIn) -> Self {
        self.pstn_dial_in = Some(pstn_dial_in);
        self
    }

    /// Set the meeting join settings.
    #[must_use]
    pub fn with_meeting_setting(mut self, meeting_setting: MeetingSetting) -> Self {
        self.meeting_setting = Some(meeting_setting);
        self
    }

    /// Set the idempotency token.
    #[must_use]
    pub fn with_client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = Some(token.into());
        self
    }

    /// Append one tag, allocating the backing list on first use.
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }
}

impl fmt::Display for CreateConferenceProviderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ConferenceProviderName", &self.conference_provider_name)?;
        w.field("ConferenceProviderType", &self.conference_provider_type)?;
        w.field("IPDialIn", &self.ip_dial_in)?;
        w.field("PSTNDialIn", &self.pstn_dial_in)?;
        w.field("MeetingSetting", &self.meeting_setting)?;
        w.field("ClientRequestToken", &self.client_request_token)?;
        w.list("Tags", &self.tags)?;
        w.end()
    }
}

/// Response of the create-conference-provider operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateConferenceProviderResponse {
    /// ARN of the created provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_provider_arn: Option<String>,
}

impl fmt::Display for CreateConferenceProviderResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ConferenceProviderArn", &self.conference_provider_arn)?;
        w.end()
    }
}

/// Request to fetch a conference provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetConferenceProviderRequest {
    /// ARN of the provider to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_provider_arn: Option<String>,
}

impl GetConferenceProviderRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider to fetch.
    #[must_use]
    pub fn with_conference_provider_arn(mut self, arn: impl Into<String>) -> Self {
        self.conference_provider_arn = Some(arn.into());
        self
    }
}

impl fmt::Display for GetConferenceProviderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ConferenceProviderArn", &self.conference_provider_arn)?;
        w.end()
    }
}

/// Response of the get-conference-provider operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetConferenceProviderResponse {
    /// The requested provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_provider: Option<ConferenceProvider>,
}

impl fmt::Display for GetConferenceProviderResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ConferenceProvider", &self.conference_provider)?;
        w.end()
    }
}

/// Request to list conference providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListConferenceProvidersRequest {
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListConferenceProvidersRequest {
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
}

impl fmt::Display for ListConferenceProvidersRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.end()
    }
}

/// Response of the list-conference-providers operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListConferenceProvidersResponse {
    /// The requested page of providers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_providers: Option<Vec<ConferenceProvider>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListConferenceProvidersResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("ConferenceProviders", &self.conference_providers)?;
        w.field("NextToken", &self.next_token)?;
        w.end()
    }
}

/// Request to read the account's conference preference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetConferencePreferenceRequest {}

impl GetConferencePreferenceRequest {
    /// Create the request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for GetConferencePreferenceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}

/// Response of the get-conference-preference operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetConferencePreferenceResponse {
    /// The account's preference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<ConferencePreference>,
}

impl fmt::Display for GetConferencePreferenceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Preference", &self.preference)?;
        w.end()
    }
}

/// Request to store the account's conference preference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutConferencePreferenceRequest {
    /// The preference to store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_preference: Option<ConferencePreference>,
}

impl PutConferencePreferenceRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preference to store.
    #[must_use]
    pub fn with_conference_preference(mut self, preference: ConferencePreference) -> Self {
        self.conference_preference = Some(preference);
        self
    }
}

impl fmt::Display for PutConferencePreferenceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ConferencePreference", &self.conference_preference)?;
        w.end()
    }
}

/// Response of the put-conference-preference operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PutConferencePreferenceResponse {}

impl fmt::Display for PutConferencePreferenceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{CommsProtocol, RequirePin};

    #[test]
    fn test_create_conference_provider_request_renders_nested_shapes() {
        let request = CreateConferenceProviderRequest::new()
            .with_conference_provider_name("zoom-hq")
            .with_conference_provider_type(ConferenceProviderType::Zoom)
            .with_ip_dial_in(IpDialIn::new("198.51.100.4", CommsProtocol::Sip))
            .with_pstn_dial_in(
                PstnDialIn::new()
                    .with_country_code("1")
                    .with_phone_number("2065550100")
                    .with_one_click_id_delay(4)
                    .with_one_click_pin_delay(8),
            )
            .with_meeting_setting(MeetingSetting::new(RequirePin::No));
        assert_eq!(
            request.to_string(),
            "{ConferenceProviderName: zoom-hq,ConferenceProviderType: ZOOM,\
             IPDialIn: {Endpoint: 198.51.100.4,CommsProtocol: SIP},\
             PSTNDialIn: {CountryCode: 1,PhoneNumber: 2065550100,\
             OneClickIdDelay: 4,OneClickPinDelay: 8},\
             MeetingSetting: {RequirePin: NO}}"
        );
    }
}
