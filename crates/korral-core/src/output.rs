//! Deterministic output paths and clash detection
//!
//! Cluster-scoped resources land under `cluster/<plural-kind>[.<group>]/`,
//! namespaced ones under `namespaces/<namespace>/`. Groups present in the
//! built-in table get no suffix; everything else is disambiguated with one.

use std::path::{Path, PathBuf};

use crate::document::{Document, DocumentSet};
use crate::error::{CoreError, Result};
use crate::gvk::GroupVersionKind;
use crate::scope::ResourceScopes;

/// Directory for cluster-scoped manifests
pub const CLUSTER_DIR: &str = "cluster";

/// Directory for namespaced manifests
pub const NAMESPACES_DIR: &str = "namespaces";

/// Computes output file locations under a fixed root.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Output path for a document; a pure function of scope, group, kind,
    /// name and namespace.
    pub fn document_path(
        &self,
        document: &Document,
        scopes: &dyn ResourceScopes,
    ) -> Result<PathBuf> {
        let gvk = document.gvk()?;
        let name = document.name()?;
        if scopes.is_namespaced(&gvk)? {
            let namespace = document
                .namespace()
                .ok_or_else(|| CoreError::MissingNamespace {
                    name: name.to_string(),
                })?;
            Ok(self.namespaced_path(&gvk, name, namespace, scopes))
        } else {
            Ok(self.cluster_path(&gvk, name, scopes))
        }
    }

    fn cluster_path(
        &self,
        gvk: &GroupVersionKind,
        name: &str,
        scopes: &dyn ResourceScopes,
    ) -> PathBuf {
        let mut directory = pluralize(&gvk.kind.to_lowercase());
        if !scopes.is_core_group(&gvk.group) {
            directory = format!("{directory}.{}", gvk.group);
        }
        self.root
            .join(CLUSTER_DIR)
            .join(directory)
            .join(format!("{name}.yaml"))
    }

    fn namespaced_path(
        &self,
        gvk: &GroupVersionKind,
        name: &str,
        namespace: &str,
        scopes: &dyn ResourceScopes,
    ) -> PathBuf {
        let mut stem = gvk.kind.to_lowercase();
        if !scopes.is_core_group(&gvk.group) {
            stem = format!("{stem}.{}", gvk.group);
        }
        self.root
            .join(NAMESPACES_DIR)
            .join(namespace)
            .join(format!("{stem}-{name}.yaml"))
    }

    /// Where a synthesized Namespace manifest lives.
    pub fn namespace_manifest_path(&self, namespace: &str) -> PathBuf {
        self.root
            .join(CLUSTER_DIR)
            .join("namespaces")
            .join(format!("{namespace}.yaml"))
    }

    /// True if any document in the set resolves to the candidate's path.
    /// The candidate itself is not a member of the set.
    pub fn is_clashing(
        &self,
        candidate: &Document,
        set: &DocumentSet,
        scopes: &dyn ResourceScopes,
    ) -> Result<bool> {
        let candidate_path = self.document_path(candidate, scopes)?;
        for document in set.documents() {
            if self.document_path(document, scopes)? == candidate_path {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Minimal pluralization heuristic, reproduced exactly for output-path
/// compatibility. Not a full English pluralizer.
pub fn pluralize(kind: &str) -> String {
    // e.g. ingress
    if kind.ends_with('s') {
        return format!("{kind}es");
    }
    // e.g. networkpolicy
    if kind.ends_with("cy") {
        return format!("{}ies", kind.trim_end_matches('y'));
    }
    format!("{kind}s")
}
