//! Korral Core - document model and classification pipeline for the
//! Kubernetes manifest organizer
//!
//! This crate provides the pieces the `korral` binary wires together:
//! - `Document` / `DocumentSet`: dynamic manifests grouped by input file
//! - `ResourceScopes`: the scope-resolution seam implemented by
//!   `korral-discovery` and `korral-kube`
//! - Pipeline stages: namespace collection, group/kind filtering, namespace
//!   defaulting and annotation-driven mirroring
//! - `OutputLayout`: deterministic output paths and clash detection

pub mod defaults;
pub mod document;
pub mod error;
pub mod filter;
pub mod gvk;
pub mod mirror;
pub mod namespaces;
pub mod output;
pub mod scope;

pub use defaults::{DefaultingOptions, apply_namespace_defaults};
pub use document::{Document, DocumentSet};
pub use error::{CoreError, Result};
pub use filter::filter_documents;
pub use gvk::{GroupKind, GroupVersionKind, parse_group_version};
pub use mirror::{NAMESPACES_ALL, NAMESPACES_ANNOTATION, mirror_documents};
pub use namespaces::{DEFAULT_NAMESPACE, NAMESPACE_KIND, find_namespaces};
pub use output::{CLUSTER_DIR, NAMESPACES_DIR, OutputLayout, pluralize};
pub use scope::ResourceScopes;

#[cfg(test)]
pub(crate) mod testutil;
