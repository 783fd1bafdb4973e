//! Korral Discovery - resource scope sources for the manifest organizer
//!
//! This crate layers the scope table the pipeline consults:
//! - `builtin`: generated table of well-known Kubernetes kinds
//! - `LocalScopes`: builtin table plus entries added at runtime
//! - `crd`: scopes declared by CustomResourceDefinitions in the input set
//! - `overrides`: manually supplied `Kind.group/version:Scope` mappings
//!
//! Overlay order is builtin → CRD-declared → manual; the last entry added
//! for a GVK wins.

mod builtin;
pub mod crd;
pub mod error;
pub mod local;
pub mod overrides;

pub use crd::{CRD_KIND, declared_crd_scopes};
pub use error::{DiscoveryError, Result};
pub use local::LocalScopes;
pub use overrides::parse_scope_override;
