//! Error types for korral-kube

use thiserror::Error;

/// Result type for korral-kube operations
pub type Result<T> = std::result::Result<T, KubeError>;

#[derive(Debug, Error)]
pub enum KubeError {
    /// Kubernetes client or discovery error
    #[error("Kubernetes API error: {0}")]
    Api(#[from] kube::Error),

    /// Kubeconfig loading error
    #[error("failed to load kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),
}
