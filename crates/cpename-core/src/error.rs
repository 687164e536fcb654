//! Error types for cpename

use crate::attribute::Attribute;
use crate::binding::Encoding;
use thiserror::Error;

/// Result type alias using the cpename Error
pub type Result<T> = std::result::Result<T, Error>;

/// cpename error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // === Unbind Errors ===
    #[error("Malformed CPE name: {reason}")]
    MalformedName { reason: String },

    #[error("Invalid value for attribute {attribute}: {raw:?}")]
    InvalidAttributeValue { attribute: Attribute, raw: String },

    // === Bind Errors ===
    #[error("Attribute {attribute} cannot be represented in {encoding}")]
    UnrepresentableValue {
        attribute: Attribute,
        encoding: Encoding,
    },

    // === Access Errors ===
    #[error("Attribute index {index} out of range (length {length})")]
    IndexOutOfRange { index: usize, length: usize },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedName {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_value(attribute: Attribute, raw: impl Into<String>) -> Self {
        Error::InvalidAttributeValue {
            attribute,
            raw: raw.into(),
        }
    }

    /// The attribute a value-level error concerns, if any
    pub fn attribute(&self) -> Option<Attribute> {
        match self {
            Error::InvalidAttributeValue { attribute, .. }
            | Error::UnrepresentableValue { attribute, .. } => Some(*attribute),
            _ => None,
        }
    }

    /// Get an error code for logging
    pub fn code(&self) -> &'static str {
        match self {
            Error::MalformedName { .. } => "MALFORMED_NAME",
            Error::InvalidAttributeValue { .. } => "INVALID_ATTRIBUTE_VALUE",
            Error::UnrepresentableValue { .. } => "UNREPRESENTABLE_VALUE",
            Error::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            Error::Configuration(_) => "CONFIG_ERROR",
        }
    }
}
