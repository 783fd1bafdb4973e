//! Discovery error types

use thiserror::Error;

/// Result type for korral-discovery operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Malformed `Kind.group/version:Scope` mapping
    #[error("failed to parse GVK scope: {value}")]
    InvalidScopeOverride { value: String },

    /// Scope token other than `Cluster` or `Namespaced`
    #[error("unrecognised scope {scope}")]
    UnrecognizedScope { scope: String },

    /// Error from the document model
    #[error(transparent)]
    Core(#[from] korral_core::CoreError),
}
