//! # Error Types
//!
//! Structured error types for furnish_core. Only malformed input (and a
//! malformed settings file) is a hard failure; everything the engine can
//! recover from is reported as a warning on the finished design instead.
//!
//! ## Example
//!
//! ```rust
//! use furnish_core::errors::{DesignError, DesignResult};
//!
//! fn validate_height(height_cm: f64) -> DesignResult<()> {
//!     if !(10.0..=500.0).contains(&height_cm) {
//!         return Err(DesignError::invalid_input(
//!             "dimensions.height",
//!             height_cm.to_string(),
//!             "Height must be between 10 and 500 cm",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for furnish_core operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Structured error type for design generation.
///
/// Serializes with a `type` discriminator so callers (a web layer, an
/// LLM tool call) can branch on the variant without parsing messages.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// An input value is invalid (out of range, malformed string, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An enum field holds a value outside its accepted set
    #[error("Unknown value for '{field}': {value} (expected one of: {expected})")]
    UnknownVariant {
        field: String,
        value: String,
        expected: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Engine settings could not be parsed or hold invalid values
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DesignError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        DesignError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        DesignError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownVariant error
    pub fn unknown_variant(field: impl Into<String>, value: impl Into<String>, expected: &[&str]) -> Self {
        DesignError::UnknownVariant {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create a ConfigError
    pub fn config(reason: impl Into<String>) -> Self {
        DesignError::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        DesignError::Internal {
            message: message.into(),
        }
    }

    /// Map a serde_json failure onto the closest structured variant.
    ///
    /// serde reports missing fields as "missing field `name`"; those become
    /// `MissingField` so the caller can point at the offending key.
    pub fn from_json(err: &serde_json::Error) -> Self {
        let message = err.to_string();
        if let Some(rest) = message.strip_prefix("missing field `") {
            if let Some(field) = rest.split('`').next() {
                return DesignError::missing_field(field);
            }
        }
        DesignError::SerializationError { reason: message }
    }

    /// Check if this error came from the request itself (vs. configuration)
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            DesignError::InvalidInput { .. }
                | DesignError::MissingField { .. }
                | DesignError::UnknownVariant { .. }
                | DesignError::SerializationError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::InvalidInput { .. } => "INVALID_INPUT",
            DesignError::MissingField { .. } => "MISSING_FIELD",
            DesignError::UnknownVariant { .. } => "UNKNOWN_VARIANT",
            DesignError::SerializationError { .. } => "SERIALIZATION_ERROR",
            DesignError::ConfigError { .. } => "CONFIG_ERROR",
            DesignError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DesignError::invalid_input("dimensions.length", "-5", "Length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: DesignError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(DesignError::missing_field("height").error_code(), "MISSING_FIELD");
        assert_eq!(DesignError::config("bad rate").error_code(), "CONFIG_ERROR");
        assert_eq!(
            DesignError::unknown_variant("material", "glass", &["wood", "metal"]).error_code(),
            "UNKNOWN_VARIANT"
        );
    }

    #[test]
    fn test_missing_field_from_json() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Envelope {
            length: f64,
            height: f64,
        }
        let err = serde_json::from_str::<Envelope>(r#"{"length": 10}"#).unwrap_err();
        assert_eq!(DesignError::from_json(&err), DesignError::missing_field("height"));
    }

    #[test]
    fn test_request_error_classification() {
        assert!(DesignError::missing_field("x").is_request_error());
        assert!(!DesignError::config("x").is_request_error());
        assert!(!DesignError::internal("x").is_request_error());
        assert_eq!(DesignError::internal("x").error_code(), "INTERNAL_ERROR");
    }
}
