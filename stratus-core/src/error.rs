//! Error types for value decoding and specification handling

use thiserror::Error;

/// Errors produced by `stratus-core`
#[derive(Debug, Error)]
pub enum Error {
    /// Input was not well-formed JSON, or did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A CloudFormation type name did not follow `AWS::Service::Resource[.Property]`
    #[error("Invalid type name: {0}")]
    InvalidTypeName(String),

    /// A template entry declared a different resource type than requested
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A property declared neither a primitive type nor a named type
    #[error("Invalid property {property} in {type_name}: {reason}")]
    InvalidProperty {
        type_name: String,
        property: String,
        reason: String,
    },

    /// A property referenced a property type that the specification does not define
    #[error("Unresolved reference from {type_name}.{property} to {target}")]
    UnresolvedReference {
        type_name: String,
        property: String,
        target: String,
    },
}

impl Error {
    /// Create an invalid property error
    pub fn invalid_property(
        type_name: impl Into<String>,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidProperty {
            type_name: type_name.into(),
            property: property.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for `stratus-core` operations
pub type Result<T> = std::result::Result<T, Error>;
