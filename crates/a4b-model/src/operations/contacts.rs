//! Contact operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Contact, ContactData, Filter, PhoneNumber, SipAddress, Sort};
use crate::fmt::WireBody;

/// Request to create a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateContactRequest {
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
    /// Phone numbers for the contact (up to 3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<PhoneNumber>>,
    /// SIP addresses for the contact (up to 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sip_addresses: Option<Vec<SipAddress>>,
    /// Idempotency token for the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

impl CreateContactRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the first name.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name.
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the single phone number.
    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Append one typed phone number, allocating the backing list on first
    /// use.
    #[must_use]
    pub fn with_phone_numbers(mut self, phone_number: PhoneNumber) -> Self {
        self.phone_numbers
            .get_or_insert_with(Vec::new)
            .push(phone_number);
        self
    }

    /// Append one SIP address.
    #[must_use]
    pub fn with_sip_address(mut self, sip_address: SipAddress) -> Self {
        self.sip_addresses
            .get_or_insert_with(Vec::new)
            .push(sip_address);
        self
    }

    /// Set the idempotency token.
    #[must_use]
    pub fn with_client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = Some(token.into());
        self
    }
}

impl fmt::Display for CreateContactRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("DisplayName", &self.display_name)?;
        w.field("FirstName", &self.first_name)?;
        w.field("LastName", &self.last_name)?;
        w.field("PhoneNumber", &self.phone_number)?;
        w.list("PhoneNumbers", &self.phone_numbers)?;
        w.list("SipAddresses", &self.sip_addresses)?;
        w.field("ClientRequestToken", &self.client_request_token)?;
        w.end()
    }
}

/// Response of the create-contact operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateContactResponse {
    /// ARN of the created contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_arn: Option<String>,
}

impl fmt::Display for CreateContactResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ContactArn", &self.contact_arn)?;
        w.end()
    }
}

/// Request to fetch a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetContactRequest {
    /// ARN of the contact to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_arn: Option<String>,
}

impl GetContactRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contact to fetch.
    #[must_use]
    pub fn with_contact_arn(mut self, contact_arn: impl Into<String>) -> Self {
        self.contact_arn = Some(contact_arn.into());
        self
    }
}

impl fmt::Display for GetContactRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ContactArn", &self.contact_arn)?;
        w.end()
    }
}

/// Response of the get-contact operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetContactResponse {
    /// The requested contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

impl fmt::Display for GetContactResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Contact", &self.contact)?;
        w.end()
    }
}

/// Request to delete a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteContactRequest {
    /// ARN of the contact to delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_arn: Option<String>,
}

impl DeleteContactRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contact to delete.
    #[must_use]
    pub fn with_contact_arn(mut self, contact_arn: impl Into<String>) -> Self {
        self.contact_arn = Some(contact_arn.into());
        self
    }
}

impl fmt::Display for DeleteContactRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ContactArn", &self.contact_arn)?;
        w.end()
    }
}

/// Response of the delete-contact operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteContactResponse {}

impl fmt::Display for DeleteContactResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}

/// Request to search contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchContactsRequest {
    /// Filter criteria (supported keys: `DisplayName`, `FirstName`,
    /// `LastName`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Sort criteria (supported keys: `DisplayName`, `FirstName`,
    /// `LastName`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<Vec<Sort>>,
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl SearchContactsRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

impl fmt::Display for SearchContactsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("Filters", &self.filters)?;
        w.list("SortCriteria", &self.sort_criteria)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.end()
    }
}

/// Response of the search-contacts operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchContactsResponse {
    /// Contacts matching the criteria
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<ContactData>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Total number of matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
}

impl fmt::Display for SearchContactsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("Contacts", &self.contacts)?;
        w.field("NextToken", &self.next_token)?;
        w.field("TotalCount", &self.total_count)?;
        w.end()
    }
}
