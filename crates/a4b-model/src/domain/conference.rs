//! Conference provider model shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{CommsProtocol, ConferenceProviderType, RequirePin};
use crate::fmt::WireBody;

/// A conference provider, as returned by the get and list operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConferenceProvider {
    /// ARN of the conference provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Name of the conference provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Conferencing service behind the provider
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<ConferenceProviderType>,
    /// IP dial-in endpoint
    #[serde(rename = "IPDialIn", skip_serializing_if = "Option::is_none")]
    pub ip_dial_in: Option<IpDialIn>,
    /// PSTN dial-in numbers
    #[serde(rename = "PSTNDialIn", skip_serializing_if = "Option::is_none")]
    pub pstn_dial_in: Option<PstnDialIn>,
    /// Meeting join settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_setting: Option<MeetingSetting>,
}

impl fmt::Display for ConferenceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Arn", &self.arn)?;
        w.field("Name", &self.name)?;
        w.field("Type", &self.provider_type)?;
        w.field("IPDialIn", &self.ip_dial_in)?;
        w.field("PSTNDialIn", &self.pstn_dial_in)?;
        w.field("MeetingSetting", &self.meeting_setting)?;
        w.end()
    }
}

/// The account's conference preference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConferencePreference {
    /// ARN of the default conference provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_conference_provider_arn: Option<String>,
}

impl ConferencePreference {
    /// Create an empty preference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default conference provider.
    #[must_use]
    pub fn with_default_conference_provider_arn(mut self, arn: impl Into<String>) -> Self {
        self.default_conference_provider_arn = Some(arn.into());
        self
    }
}

impl fmt::Display for ConferencePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field(
            "DefaultConferenceProviderArn",
            &self.default_conference_provider_arn,
        )?;
        w.end()
    }
}

/// IP dial-in endpoint of a conference provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpDialIn {
    /// Endpoint address to call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Signaling protocol of the endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comms_protocol: Option<CommsProtocol>,
}

impl IpDialIn {
    /// Create a dial-in endpoint with both parts set.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, comms_protocol: CommsProtocol) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            comms_protocol: Some(comms_protocol),
        }
    }
}

impl fmt::Display for IpDialIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Endpoint", &self.endpoint)?;
        w.field("CommsProtocol", &self.comms_protocol)?;
        w.end()
    }
}

/// PSTN dial-in numbers of a conference provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PstnDialIn {
    /// Zero-padded ISO country calling code (e.g. `1`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Phone number to dial
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// DTMF delay before the meeting id is sent, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_click_id_delay: Option<i32>,
    /// DTMF delay before the PIN is sent, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_click_pin_delay: Option<i32>,
}

impl PstnDialIn {
    /// Create an empty PSTN dial-in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the country calling code.
    #[must_use]
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Set the phone number to dial.
    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Set the DTMF delay before the meeting id is sent.
    #[must_use]
    pub const fn with_one_click_id_delay(mut self, seconds: i32) -> Self {
        self.one_click_id_delay = Some(seconds);
        self
    }

    /// Set the DTMF delay before the PIN is sent.
    #[must_use]
    pub const fn with_one_click_pin_delay(mut self, seconds: i32) -> Self {
        self.one_click_pin_delay = Some(seconds);
        self
    }
}

impl fmt::Display for PstnDialIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("CountryCode", &self.country_code)?;
        w.field("PhoneNumber", &self.phone_number)?;
        w.field("OneClickIdDelay", &self.one_click_id_delay)?;
        w.field("OneClickPinDelay", &self.one_click_pin_delay)?;
        w.end()
    }
}

/// Meeting join settings of a conference provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MeetingSetting {
    /// Whether a PIN is required to join
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_pin: Option<RequirePin>,
}

impl MeetingSetting {
    /// Create a meeting setting with the PIN requirement set.
    #[must_use]
    pub const fn new(require_pin: RequirePin) -> Self {
        Self {
            require_pin: Some(require_pin),
        }
    }
}

impl fmt::Display for MeetingSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("RequirePin", &self.require_pin)?;
        w.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conference_provider_renders_wire_names() {
        let provider = ConferenceProvider {
            name: Some("chime-default".to_string()),
            provider_type: Some(ConferenceProviderType::Chime),
            ip_dial_in: Some(IpDialIn::new("203.0.113.10", CommsProtocol::Sips)),
            meeting_setting: Some(MeetingSetting::new(RequirePin::Optional)),
            ..ConferenceProvider::default()
        };
        assert_eq!(
            provider.to_string(),
            "{Name: chime-default,Type: CHIME,IPDialIn: {Endpoint: 203.0.113.10,\
             CommsProtocol: SIPS},MeetingSetting: {RequirePin: OPTIONAL}}"
        );
    }

    #[test]
    fn test_ip_dial_in_serde_uses_wire_field_names() {
        let provider = ConferenceProvider {
            ip_dial_in: Some(IpDialIn::new("203.0.113.10", CommsProtocol::Sip)),
            pstn_dial_in: Some(PstnDialIn::new().with_country_code("1")),
            ..ConferenceProvider::default()
        };
        let json = serde_json::to_value(&provider).unwrap();
        assert!(json.get("IPDialIn").is_some());
        assert!(json.get("PSTNDialIn").is_some());
        assert!(json.get("IpDialIn").is_none());
    }
}
