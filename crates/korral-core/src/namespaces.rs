//! Namespace universe collection
//!
//! Runs once over the entire input set before any stage mutates it: the
//! result is the universe the mirroring wildcard expands to.

use std::collections::BTreeSet;

use crate::document::{Document, DocumentSet};
use crate::error::Result;
use crate::gvk::GroupKind;
use crate::scope::ResourceScopes;

/// Kind name of namespace manifests
pub const NAMESPACE_KIND: &str = "Namespace";

/// Namespace applied when neither the manifest nor the operator names one
pub const DEFAULT_NAMESPACE: &str = "default";

/// Collect every namespace either declared as a `Namespace` resource or
/// implied by a namespaced resource. Filtered group/kinds are skipped so
/// they cannot contribute namespaces they will never be written into.
pub fn find_namespaces(
    set: &DocumentSet,
    scopes: &dyn ResourceScopes,
    filters: &[GroupKind],
    default_namespace: Option<&str>,
) -> Result<BTreeSet<String>> {
    let mut namespaces = BTreeSet::new();
    for (path, documents) in set.files() {
        collect_namespaces(documents, scopes, filters, default_namespace, &mut namespaces)
            .map_err(|e| e.in_file(path.display().to_string()))?;
    }
    Ok(namespaces)
}

fn collect_namespaces(
    documents: &[Document],
    scopes: &dyn ResourceScopes,
    filters: &[GroupKind],
    default_namespace: Option<&str>,
    namespaces: &mut BTreeSet<String>,
) -> Result<()> {
    for document in documents {
        if document.kind()? == NAMESPACE_KIND {
            namespaces.insert(document.name()?.to_string());
            continue;
        }

        let gvk = document.gvk()?;
        if filters.contains(&gvk.group_kind()) {
            continue;
        }

        if scopes.is_namespaced(&gvk)? {
            let namespace = document
                .namespace()
                .or(default_namespace)
                .unwrap_or(DEFAULT_NAMESPACE);
            namespaces.insert(namespace.to_string());
        }
    }
    Ok(())
}
