//! Manually supplied scope mappings
//!
//! Operators can extend (or correct) discovery with
//! `--gvk-scope Kind.group/version:Scope` flags, parsed here at startup
//! before any document processing.

use korral_core::{GroupVersionKind, parse_group_version};

use crate::error::{DiscoveryError, Result};

const CLUSTER_SCOPE: &str = "Cluster";
const NAMESPACED_SCOPE: &str = "Namespaced";

/// Parse a `Kind.group/version:Scope` mapping. The core group is spelled
/// with no group segment (`ConfigMap.v1`) or an empty one (`ConfigMap./v1`).
pub fn parse_scope_override(value: &str) -> Result<(GroupVersionKind, bool)> {
    let (gvk_part, scope) = value.split_once(':').ok_or_else(|| invalid(value))?;

    let namespaced = match scope {
        CLUSTER_SCOPE => false,
        NAMESPACED_SCOPE => true,
        _ => {
            return Err(DiscoveryError::UnrecognizedScope {
                scope: scope.to_string(),
            });
        }
    };

    let (kind, group_version) = gvk_part.split_once('.').ok_or_else(|| invalid(value))?;
    let (group, version) = parse_group_version(group_version)?;

    Ok((GroupVersionKind::new(group, version, kind), namespaced))
}

fn invalid(value: &str) -> DiscoveryError {
    DiscoveryError::InvalidScopeOverride {
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_override() {
        let (gvk, namespaced) = parse_scope_override("Tester.test.io/v1:Namespaced").unwrap();
        assert_eq!(gvk, GroupVersionKind::new("test.io", "v1", "Tester"));
        assert!(namespaced);
    }

    #[test]
    fn test_cluster_override() {
        let (gvk, namespaced) = parse_scope_override("Watcher.ops.io/v1beta1:Cluster").unwrap();
        assert_eq!(gvk, GroupVersionKind::new("ops.io", "v1beta1", "Watcher"));
        assert!(!namespaced);
    }

    #[test]
    fn test_core_group_spellings() {
        let (gvk, _) = parse_scope_override("ConfigMap.v1:Namespaced").unwrap();
        assert_eq!(gvk, GroupVersionKind::new("", "v1", "ConfigMap"));

        let (gvk, _) = parse_scope_override("ConfigMap./v1:Namespaced").unwrap();
        assert_eq!(gvk, GroupVersionKind::new("", "v1", "ConfigMap"));
    }

    #[test]
    fn test_missing_scope_separator() {
        let err = parse_scope_override("Tester.test.io/v1").unwrap_err();
        assert!(matches!(err, DiscoveryError::InvalidScopeOverride { .. }));
    }

    #[test]
    fn test_unrecognized_scope_token() {
        let err = parse_scope_override("Tester.test.io/v1:Global").unwrap_err();
        assert!(err.to_string().contains("Global"));
    }

    #[test]
    fn test_missing_kind_separator() {
        let err = parse_scope_override("Tester:Cluster").unwrap_err();
        assert!(matches!(err, DiscoveryError::InvalidScopeOverride { .. }));
    }
}
