//! Scopes declared by CustomResourceDefinitions in the input set
//!
//! A CRD anywhere in the input teaches the inspector about its kind before
//! any lookup occurs, one entry per declared version.

use korral_core::{Document, DocumentSet, GroupVersionKind};
use serde_yaml::Value;

use crate::error::Result;

/// Kind name of CRD manifests
pub const CRD_KIND: &str = "CustomResourceDefinition";

const NAMESPACED_SCOPE: &str = "Namespaced";

/// Extract one scope entry per declared version of every CRD in the set.
/// Errors carry the originating input file.
pub fn declared_crd_scopes(set: &DocumentSet) -> Result<Vec<(GroupVersionKind, bool)>> {
    let mut scopes = Vec::new();
    for (path, documents) in set.files() {
        collect_scopes(documents, &mut scopes)
            .map_err(|e| e.in_file(path.display().to_string()))?;
    }
    Ok(scopes)
}

fn collect_scopes(
    documents: &[Document],
    scopes: &mut Vec<(GroupVersionKind, bool)>,
) -> korral_core::Result<()> {
    for document in documents {
        if document.kind()? != CRD_KIND {
            continue;
        }

        let group = document.required_str(&["spec", "group"])?;
        let kind = document.required_str(&["spec", "names", "kind"])?;
        let namespaced = document.required_str(&["spec", "scope"])? == NAMESPACED_SCOPE;

        for version in declared_versions(document)? {
            scopes.push((GroupVersionKind::new(group, version, kind), namespaced));
        }
    }
    Ok(())
}

fn declared_versions(document: &Document) -> korral_core::Result<Vec<String>> {
    if let Some(Value::Sequence(versions)) = document.get(&["spec", "versions"]) {
        let names: Vec<String> = versions
            .iter()
            .filter_map(|version| version.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect();
        if !names.is_empty() {
            return Ok(names);
        }
    }
    // Legacy single-version CRDs (apiextensions.k8s.io/v1beta1)
    Ok(vec![document.required_str(&["spec", "version"])?.to_string()])
}
