//! Address book model shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fmt::WireBody;

/// An address book, as returned by the get operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressBook {
    /// ARN of the address book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_book_arn: Option<String>,
    /// Name of the address book (1-100 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the address book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("AddressBookArn", &self.address_book_arn)?;
        w.field("Name", &self.name)?;
        w.field("Description", &self.description)?;
        w.end()
    }
}

/// An address book, as returned by the search operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressBookData {
    /// ARN of the address book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_book_arn: Option<String>,
    /// Name of the address book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the address book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl fmt::Display for AddressBookData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("AddressBookArn", &self.address_book_arn)?;
        w.field("Name", &self.name)?;
        w.field("Description", &self.description)?;
        w.end()
    }
}
