//! Group/kind exclusion filtering
//!
//! Runs before defaulting and mirroring so filtered documents never reach
//! later stages or the writer.

use crate::document::DocumentSet;
use crate::error::Result;
use crate::gvk::GroupKind;

/// Drop documents whose GroupKind matches a filter entry, keeping per-file
/// grouping and original order.
pub fn filter_documents(set: DocumentSet, filters: &[GroupKind]) -> Result<DocumentSet> {
    let mut filtered = DocumentSet::new();
    for (path, documents) in set.into_files() {
        let mut kept = Vec::with_capacity(documents.len());
        for document in documents {
            let gvk = document
                .gvk()
                .map_err(|e| e.in_file(path.display().to_string()))?;
            if filters.contains(&gvk.group_kind()) {
                continue;
            }
            kept.push(document);
        }
        filtered.insert(path, kept);
    }
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::set;

    #[test]
    fn test_matching_documents_are_removed() {
        let set = set(&[(
            "input.yaml",
            &[
                "apiVersion: v1\nkind: Secret\nmetadata:\n  name: s\n",
                "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: cm\n",
            ],
        )]);
        let filters = vec![GroupKind::parse("Secret")];

        let filtered = filter_documents(set, &filters).unwrap();
        assert_eq!(filtered.document_count(), 1);
        assert_eq!(
            filtered.documents().next().unwrap().kind().unwrap(),
            "ConfigMap"
        );
    }

    #[test]
    fn test_filter_is_version_independent() {
        let set = set(&[(
            "input.yaml",
            &["apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: web\n"],
        )]);
        let filters = vec![GroupKind::parse("Deployment.apps")];

        let filtered = filter_documents(set, &filters).unwrap();
        assert_eq!(filtered.document_count(), 0);
    }

    #[test]
    fn test_group_must_match_exactly() {
        // A bare kind filter names the core group, not every group
        let set = set(&[(
            "input.yaml",
            &["apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: web\n"],
        )]);
        let filters = vec![GroupKind::parse("Deployment")];

        let filtered = filter_documents(set, &filters).unwrap();
        assert_eq!(filtered.document_count(), 1);
    }

    #[test]
    fn test_file_grouping_survives_filtering() {
        let set = set(&[
            (
                "a.yaml",
                &["apiVersion: v1\nkind: Secret\nmetadata:\n  name: s\n"],
            ),
            (
                "b.yaml",
                &["apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: cm\n"],
            ),
        ]);
        let filters = vec![GroupKind::parse("Secret")];

        let filtered = filter_documents(set, &filters).unwrap();
        assert_eq!(filtered.paths().len(), 2);
        assert_eq!(filtered.get(std::path::Path::new("a.yaml")).len(), 0);
        assert_eq!(filtered.get(std::path::Path::new("b.yaml")).len(), 1);
    }
}
