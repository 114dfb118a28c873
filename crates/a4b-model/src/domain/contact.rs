//! Contact model shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{PhoneNumberType, SipType};
use crate::fmt::WireBody;

/// A contact, as returned by the get operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    /// ARN of the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_arn: Option<String>,
    /// Name the service announces when calling the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// First name of the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name of the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Single phone number (superseded by `phone_numbers`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Phone numbers of the contact (up to 3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<PhoneNumber>>,
    /// SIP addresses of the contact (up to 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sip_addresses: Option<Vec<SipAddress>>,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ContactArn", &self.contact_arn)?;
        w.field("DisplayName", &self.display_name)?;
        w.field("FirstName", &self.first_name)?;
        w.field("LastName", &self.last_name)?;
        w.field("PhoneNumber", &self.phone_number)?;
        w.list("PhoneNumbers", &self.phone_numbers)?;
        w.list("SipAddresses", &self.sip_addresses)?;
        w.end()
    }
}

/// A contact, as returned by the search operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactData {
    /// ARN of the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_arn: Option<String>,
    /// Name the service announces when calling the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// First name of the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name of the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Single phone number (superseded by `phone_numbers`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Phone numbers of the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<PhoneNumber>>,
    /// SIP addresses of the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sip_addresses: Option<Vec<SipAddress>>,
}

impl fmt::Display for ContactData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ContactArn", &self.contact_arn)?;
        w.field("DisplayName", &self.display_name)?;
        w.field("FirstName", &self.first_name)?;
        w.field("LastName", &self.last_name)?;
        w.field("PhoneNumber", &self.phone_number)?;
        w.list("PhoneNumbers", &self.phone_numbers)?;
        w.list("SipAddresses", &self.sip_addresses)?;
        w.end()
    }
}

/// A typed phone number of a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhoneNumber {
    /// The number itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Kind of number
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub number_type: Option<PhoneNumberType>,
}

impl PhoneNumber {
    /// Create a phone number with both parts set.
    #[must_use]
    pub fn new(number: impl Into<String>, number_type: PhoneNumberType) -> Self {
        Self {
            number: Some(number.into()),
            number_type: Some(number_type),
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Number", &self.number)?;
        w.field("Type", &self.number_type)?;
        w.end()
    }
}

/// A typed SIP address of a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SipAddress {
    /// SIP URI (e.g. `sip:user@example.com`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Kind of address
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub sip_type: Option<SipType>,
}

impl SipAddress {
    /// Create a SIP address with both parts set.
    #[must_use]
    pub fn new(uri: impl Into<String>, sip_type: SipType) -> Self {
        Self {
            uri: Some(uri.into()),
            sip_type: Some(sip_type),
        }
    }
}

impl fmt::Display for SipAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Uri", &self.uri)?;
        w.field("Type", &self.sip_type)?;
        w.end()
    }
}
