//! Korral Kube - live API-server discovery backend for the manifest
//! organizer
//!
//! Provides `ApiServerScopes`, a `ResourceScopes` implementation that
//! answers from the local table first and falls back to the cluster's
//! discovery API for kinds the local layers cannot classify.

pub mod error;
pub mod scopes;

pub use error::{KubeError, Result};
pub use scopes::ApiServerScopes;
