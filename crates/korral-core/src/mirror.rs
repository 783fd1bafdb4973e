//! Namespace mirroring via the `korral.dev/namespaces` annotation
//!
//! A namespaced document expands into one copy per target namespace. The
//! annotation value is a comma-separated list of tokens: `*` adds every
//! known namespace, `-name` excludes one, and any other token must name a
//! member of the universe. Exclusions and wildcard expansion are fully
//! resolved before any clash check runs, so token order does not matter.

use std::collections::BTreeSet;

use crate::document::{Document, DocumentSet};
use crate::error::{CoreError, Result};
use crate::output::OutputLayout;
use crate::scope::ResourceScopes;

/// Annotation listing namespaces to copy a namespaced resource into
pub const NAMESPACES_ANNOTATION: &str = "korral.dev/namespaces";

/// Wildcard token expanding to every namespace in the universe
pub const NAMESPACES_ALL: &str = "*";

const EXCLUDE_PREFIX: char = '-';

/// Expand namespaced documents across their target namespaces. Cluster-scoped
/// documents pass through 1:1. Files are rewritten one at a time, so clash
/// checks see already-mirrored documents of earlier files and pre-mirror
/// documents of later ones.
pub fn mirror_documents(
    mut set: DocumentSet,
    universe: &BTreeSet<String>,
    scopes: &dyn ResourceScopes,
    layout: &OutputLayout,
) -> Result<DocumentSet> {
    for path in set.paths() {
        let documents = set.get(&path).to_vec();
        let mut mirrored = Vec::with_capacity(documents.len());
        for document in documents {
            mirror_document(document, &set, universe, scopes, layout, &mut mirrored)
                .map_err(|e| e.in_file(path.display().to_string()))?;
        }
        set.insert(path, mirrored);
    }
    Ok(set)
}

fn mirror_document(
    mut document: Document,
    set: &DocumentSet,
    universe: &BTreeSet<String>,
    scopes: &dyn ResourceScopes,
    layout: &OutputLayout,
    out: &mut Vec<Document>,
) -> Result<()> {
    let gvk = document.gvk()?;
    if !scopes.is_namespaced(&gvk)? {
        out.push(document);
        return Ok(());
    }

    let name = document.name()?.to_string();
    let Some(original) = document.namespace().map(str::to_string) else {
        // Defaulting must have run before mirroring
        return Err(CoreError::MissingNamespace { name });
    };

    let mut targets = BTreeSet::from([original.clone()]);
    let mut excluded = BTreeSet::new();

    let mut annotations = document.annotations();
    if let Some(value) = annotations.shift_remove(NAMESPACES_ANNOTATION) {
        for token in value.split(',') {
            if token == NAMESPACES_ALL {
                targets.extend(universe.iter().cloned());
            } else if let Some(namespace) = token.strip_prefix(EXCLUDE_PREFIX) {
                excluded.insert(namespace.to_string());
            } else {
                if !universe.contains(token) {
                    // Letting the annotation create namespaces would make the
                    // wildcard's meaning of "all known namespaces" inconsistent
                    return Err(CoreError::NamespaceNotFound {
                        namespace: token.to_string(),
                        annotation: NAMESPACES_ANNOTATION.to_string(),
                    });
                }
                targets.insert(token.to_string());
            }
        }
        // The annotation must not appear in output
        document.set_annotations(&annotations);
    }

    for namespace in targets.difference(&excluded) {
        let mut copy = document.clone();
        copy.set_namespace(namespace);
        // The wildcard provides a default that a per-namespace document
        // elsewhere can override; the copy in the resource's own namespace
        // always survives.
        if namespace != &original && layout.is_clashing(&copy, set, scopes)? {
            continue;
        }
        out.push(copy);
    }
    Ok(())
}
