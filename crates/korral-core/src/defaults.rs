//! Namespace defaulting for namespaced resources, cleanup and strict
//! checking for cluster-scoped ones

use crate::document::{Document, DocumentSet};
use crate::error::{CoreError, Result};
use crate::namespaces::DEFAULT_NAMESPACE;
use crate::scope::ResourceScopes;

/// Options controlling the defaulting stage
#[derive(Debug, Clone, Default)]
pub struct DefaultingOptions {
    /// Namespace to set when a namespaced resource has none; `None` means
    /// `default`
    pub namespace: Option<String>,
    /// Remove `metadata.namespace` from cluster-scoped resources
    pub clean: bool,
    /// Error when a cluster-scoped resource still carries a namespace.
    /// Evaluated after `clean`, so both may be set together.
    pub strict: bool,
}

impl DefaultingOptions {
    pub fn default_namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }
}

/// Apply namespace defaults across the whole set. After this stage every
/// namespaced document has a non-empty namespace.
pub fn apply_namespace_defaults(
    set: DocumentSet,
    scopes: &dyn ResourceScopes,
    options: &DefaultingOptions,
) -> Result<DocumentSet> {
    let mut defaulted = DocumentSet::new();
    for (path, documents) in set.into_files() {
        let documents = default_file(documents, scopes, options)
            .map_err(|e| e.in_file(path.display().to_string()))?;
        defaulted.insert(path, documents);
    }
    Ok(defaulted)
}

fn default_file(
    documents: Vec<Document>,
    scopes: &dyn ResourceScopes,
    options: &DefaultingOptions,
) -> Result<Vec<Document>> {
    let mut defaulted = Vec::with_capacity(documents.len());
    for mut document in documents {
        let gvk = document.gvk()?;
        if scopes.is_namespaced(&gvk)? {
            if document.namespace().is_none() {
                document.set_namespace(options.default_namespace());
            }
        } else if document.namespace().is_some() {
            if options.clean {
                document.clear_namespace();
            }
            if options.strict && document.namespace().is_some() {
                return Err(CoreError::ScopeViolation {
                    gvk: gvk.to_string(),
                });
            }
        }
        defaulted.push(document);
    }
    Ok(defaulted)
}
