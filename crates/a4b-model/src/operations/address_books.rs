//! Address book operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{AddressBook, AddressBookData, Filter, Sort, Tag};
use crate::fmt::WireBody;

/// Request to create an address book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAddressBookRequest {
    /// Name for the address book (1-100 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description for the address book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Idempotency token for the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    /// Tags for the address book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateAddressBookRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the address book name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

impl fmt::Display for CreateAddressBookRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Name", &self.name)?;
        w.field("Description", &self.description)?;
        w.field("ClientRequestToken", &self.client_request_token)?;
        w.list("Tags", &self.tags)?;
        w.end()
    }
}

/// Response of the create-address-book operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAddressBookResponse {
    /// ARN of the created address book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_book_arn: Option<String>,
}

impl fmt::Display for CreateAddressBookResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("AddressBookArn", &self.address_book_arn)?;
        w.end()
    }
}

/// Request to fetch an address book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAddressBookRequest {
    /// ARN of the address book to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_book_arn: Option<String>,
}

impl GetAddressBookRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the address book to fetch.
    #[must_use]
    pub fn with_address_book_arn(mut self, address_book_arn: impl Into<String>) -> Self {
        self.address_book_arn = Some(address_book_arn.into());
        self
    }
}

impl fmt::Display for GetAddressBookRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("AddressBookArn", &self.address_book_arn)?;
        w.end()
    }
}

/// Response of the get-address-book operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAddressBookResponse {
    /// The requested address book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_book: Option<AddressBook>,
}

impl fmt::Display for GetAddressBookResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("AddressBook", &self.address_book)?;
        w.end()
    }
}

/// Request to search address books.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchAddressBooksRequest {
    /// Filter criteria (supported key: `AddressBookName`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Sort criteria (supported key: `AddressBookName`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<Vec<Sort>>,
    /// Continuation token from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum results per page (1-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl SearchAddressBooksRequest {
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

impl fmt::Display for SearchAddressBooksRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("Filters", &self.filters)?;
        w.list("SortCriteria", &self.sort_criteria)?;
        w.field("NextToken", &self.next_token)?;
        w.field("MaxResults", &self.max_results)?;
        w.end()
    }
}

/// Response of the search-address-books operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchAddressBooksResponse {
    /// Address books matching the criteria
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_books: Option<Vec<AddressBookData>>,
    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Total number of matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
}

impl fmt::Display for SearchAddressBooksResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("AddressBooks", &self.address_books)?;
        w.field("NextToken", &self.next_token)?;
        w.field("TotalCount", &self.total_count)?;
        w.end()
    }
}

/// Request to add a contact to an address book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateContactWithAddressBookRequest {
    /// ARN of the contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_arn: Option<String>,
    /// ARN of the address book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_book_arn: Option<String>,
}

impl AssociateContactWithAddressBookRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contact.
    #[must_use]
    pub fn with_contact_arn(mut self, contact_arn: impl Into<String>) -> Self {
        self.contact_arn = Some(contact_arn.into());
        self
    }

    /// Set the address book.
    #[must_use]
    pub fn with_address_book_arn(mut self, address_book_arn: impl Into<String>) -> Self {
        self.address_book_arn = Some(address_book_arn.into());
        self
    }
}

impl fmt::Display for AssociateContactWithAddressBookRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("ContactArn", &self.contact_arn)?;
        w.field("AddressBookArn", &self.address_book_arn)?;
        w.end()
    }
}

/// Response of the associate-contact-with-address-book operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssociateContactWithAddressBookResponse {}

impl fmt::Display for AssociateContactWithAddressBookResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WireBody::begin(f)?.end()
    }
}
