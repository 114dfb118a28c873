//! Tagging and search primitives shared across resource families.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::SortValue;
use crate::fmt::WireBody;

/// A key-value tag attached to a resource.
///
/// Keys are unique per resource on the service side; the type itself does
/// not enforce that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag key (1-128 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Tag value (0-256 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Create a tag with both parts set.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Key", &self.key)?;
        w.field("Value", &self.value)?;
        w.end()
    }
}

/// A filter criterion for search operations.
///
/// Matches resources whose attribute named `key` has any of `values`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    /// Attribute to filter on (e.g. `RoomName`, `DeviceStatus`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Values to match (up to 50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Filter {
    /// Create a filter on the given attribute with no values yet.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            values: None,
        }
    }

    /// Append one value to match, allocating the backing list on first use.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.get_or_insert_with(Vec::new).push(value.into());
        self
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Key", &self.key)?;
        w.list("Values", &self.values)?;
        w.end()
    }
}

/// A sort criterion for search operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sort {
    /// Attribute to sort on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Sort direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<SortValue>,
}

impl Sort {
    /// Create a sort criterion.
    #[must_use]
    pub fn new(key: impl Into<String>, value: SortValue) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value),
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Key", &self.key)?;
        w.field("Value", &self.value)?;
        w.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_with_value_accumulates() {
        let filter = Filter::new("DeviceStatus")
            .with_value("READY")
            .with_value("PENDING");
        assert_eq!(
            filter.values,
            Some(vec!["READY".to_string(), "PENDING".to_string()])
        );
        assert_eq!(
            filter.to_string(),
            "{Key: DeviceStatus,Values: [READY, PENDING]}"
        );
    }

    #[test]
    fn test_sort_renders_wire_literal() {
        let sort = Sort::new("RoomName", SortValue::Asc);
        assert_eq!(sort.to_string(), "{Key: RoomName,Value: ASC}");
    }
}
