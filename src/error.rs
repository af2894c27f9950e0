// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for Zeebe-Contacts

use thiserror::Error;

/// Result type alias for Zeebe-Contacts operations
pub type Result<T> = std::result::Result<T, ContactError>;

/// A cluster layout that cannot be turned into a contact list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required input was blank
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// Brokers cannot be split evenly across the two regions
    #[error(
        "Cluster size {size} is an odd number: odd cluster size unsupported in dual-region setup (must be an even number)"
    )]
    OddClusterSize { size: u32 },

    /// Fewer brokers than a multi-region deployment requires
    #[error(
        "Cluster size {size} is below {minimum}: cluster too small for multi-region setup"
    )]
    ClusterTooSmall { size: u32, minimum: u32 },

    /// Both regions point at the same namespace
    #[error("Kubernetes namespaces must differ between regions (both are '{namespace}')")]
    DuplicateNamespace { namespace: String },
}

/// Errors that can occur while collecting input or producing output
#[derive(Error, Debug)]
pub enum ContactError {
    /// Cluster layout rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration content
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// An interactive answer could not be interpreted
    #[error("Invalid {field}: {message}")]
    InvalidInput { field: &'static str, message: String },

    /// Input closed before every value was answered
    #[error("Unexpected end of input while reading {field}")]
    UnexpectedEof { field: &'static str },

    /// Values file has nowhere to put the contact list
    #[error("Placeholder '{placeholder}' not found in {path}")]
    PlaceholderNotFound { placeholder: String, path: String },

    /// IO error wrapper
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
