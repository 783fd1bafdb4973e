//! Core error types

use thiserror::Error;

/// Result type for korral-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the classification and mirroring pipeline
#[derive(Error, Debug)]
pub enum CoreError {
    /// No scope layer could classify the GVK
    #[error("could not find scope mapping for resource {gvk}")]
    ScopeNotFound { gvk: String },

    /// Cluster-scoped resource kept a namespace under strict mode
    #[error("metadata.namespace field should not be set for cluster-scoped resource: {gvk}")]
    ScopeViolation { gvk: String },

    /// Namespaced resource reached mirroring without a namespace; the
    /// defaulting stage must run first
    #[error("namespaced resource {name} has no namespace after defaulting")]
    MissingNamespace { name: String },

    /// Mirroring annotation named a namespace outside the known universe
    #[error("namespace \"{namespace}\" not found when processing annotation {annotation}")]
    NamespaceNotFound {
        namespace: String,
        annotation: String,
    },

    /// Two documents resolve to the same output file and overwrite is off
    #[error("file already exists: {path}")]
    OutputCollision { path: String },

    /// Required manifest field is missing or empty
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// A group/version string had more than one slash
    #[error("unexpected GroupVersion string: {value}")]
    InvalidGroupVersion { value: String },

    /// YAML parse failure
    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error wrapped with the originating input file
    #[error("{path}: {source}")]
    File { path: String, source: Box<CoreError> },
}

impl CoreError {
    /// Attach the originating input file to an error as it propagates up
    pub fn in_file(self, path: impl Into<String>) -> Self {
        CoreError::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
