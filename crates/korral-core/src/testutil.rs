//! Shared helpers for stage tests

use std::collections::HashMap;

use crate::document::{Document, DocumentSet};
use crate::error::{CoreError, Result};
use crate::gvk::GroupVersionKind;
use crate::scope::ResourceScopes;

/// Fixed scope table covering the kinds the stage tests use.
#[derive(Debug, Default)]
pub struct TestScopes {
    scopes: HashMap<GroupVersionKind, bool>,
}

impl TestScopes {
    pub fn well_known() -> Self {
        let mut scopes = Self::default();
        for (api_version, kind, namespaced) in [
            ("v1", "ConfigMap", true),
            ("v1", "Secret", true),
            ("v1", "Pod", true),
            ("v1", "Service", true),
            ("v1", "Namespace", false),
            ("apps/v1", "Deployment", true),
            ("networking.k8s.io/v1", "NetworkPolicy", true),
            ("rbac.authorization.k8s.io/v1", "ClusterRole", false),
            ("test.io/v1", "Tester", true),
        ] {
            scopes.add_scope(
                GroupVersionKind::from_api_version_and_kind(api_version, kind),
                namespaced,
            );
        }
        scopes
    }
}

impl ResourceScopes for TestScopes {
    fn is_namespaced(&self, gvk: &GroupVersionKind) -> Result<bool> {
        self.scopes
            .get(gvk)
            .copied()
            .ok_or_else(|| CoreError::ScopeNotFound {
                gvk: gvk.to_string(),
            })
    }

    fn add_scope(&mut self, gvk: GroupVersionKind, namespaced: bool) {
        self.scopes.insert(gvk, namespaced);
    }

    fn is_core_group(&self, group: &str) -> bool {
        matches!(
            group,
            "" | "apps" | "batch" | "networking.k8s.io" | "rbac.authorization.k8s.io"
        )
    }
}

/// Parse a single test manifest.
pub fn doc(yaml: &str) -> Document {
    Document::from_yaml(yaml).expect("test manifest should parse")
}

/// Build a set from `(file, manifests)` pairs.
pub fn set(files: &[(&str, &[&str])]) -> DocumentSet {
    let mut set = DocumentSet::new();
    for (path, manifests) in files {
        set.insert(*path, manifests.iter().map(|manifest| doc(manifest)).collect());
    }
    set
}
