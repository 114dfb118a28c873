//! Error types for the model layer.
//!
//! Almost every operation on these types is total; the two exceptions are
//! checked insertion into a mapping-valued field and parsing an enumerated
//! wire string.

use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors produced by the model layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A checked map insertion found the key already present.
    ///
    /// The rejected insert leaves the existing entries unchanged.
    #[error("duplicate key '{key}' for map field {field}")]
    DuplicateMapKey {
        /// Wire name of the mapping field
        field: &'static str,
        /// The key that was already present
        key: String,
    },

    /// A string did not match any known value of an enumerated type.
    #[error("'{value}' is not a valid {kind}")]
    UnknownEnumValue {
        /// Name of the enumerated type
        kind: &'static str,
        /// The literal that failed to parse
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_map_key_message() {
        let error = ModelError::DuplicateMapKey {
            field: "Reviews",
            key: "Widget Reviews".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("Widget Reviews"));
        assert!(msg.contains("Reviews"));
    }

    #[test]
    fn test_unknown_enum_value_message() {
        let error = ModelError::UnknownEnumValue {
            kind: "WakeWord",
            value: "SIRI".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("SIRI"));
        assert!(msg.contains("WakeWord"));
    }
}
