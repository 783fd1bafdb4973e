//! Group/version/kind value types used as scope-table keys

use std::fmt;

use crate::error::{CoreError, Result};

/// Fully qualified resource type. Equal iff all three fields match; used as
/// a map key throughout the scope table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Build from the `apiVersion` and `kind` fields of a manifest:
    /// - "apps/v1" -> group="apps", version="v1"
    /// - "v1" -> group="", version="v1" (core API)
    pub fn from_api_version_and_kind(api_version: &str, kind: &str) -> Self {
        let (group, version) = match api_version.split_once('/') {
            Some((group, version)) => (group.to_string(), version.to_string()),
            None => (String::new(), api_version.to_string()),
        };
        Self {
            group,
            version,
            kind: kind.to_string(),
        }
    }

    /// The version-independent part, used for filters.
    pub fn group_kind(&self) -> GroupKind {
        GroupKind {
            group: self.group.clone(),
            kind: self.kind.clone(),
        }
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
    }
}

/// Version-independent resource type, matching the `Kind.group` form used on
/// the command line. An empty group is the core group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKind {
    pub group: String,
    pub kind: String,
}

impl GroupKind {
    pub fn new(group: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            kind: kind.into(),
        }
    }

    /// Parse the `Kind.group` form; a bare kind means the core group.
    /// The split is at the first dot since groups are dotted domains.
    pub fn parse(value: &str) -> Self {
        match value.split_once('.') {
            Some((kind, group)) => Self::new(group, kind),
            None => Self::new("", value),
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}.{}", self.kind, self.group)
        }
    }
}

/// Split a `group/version` string; a bare token is a version in the core
/// group.
pub fn parse_group_version(value: &str) -> Result<(String, String)> {
    if value.matches('/').count() > 1 {
        return Err(CoreError::InvalidGroupVersion {
            value: value.to_string(),
        });
    }
    Ok(match value.split_once('/') {
        Some((group, version)) => (group.to_string(), version.to_string()),
        None => (String::new(), value.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gvk_from_api_version_with_group() {
        let gvk = GroupVersionKind::from_api_version_and_kind("apps/v1", "Deployment");
        assert_eq!(gvk.group, "apps");
        assert_eq!(gvk.version, "v1");
        assert_eq!(gvk.kind, "Deployment");
    }

    #[test]
    fn test_gvk_from_api_version_core_group() {
        let gvk = GroupVersionKind::from_api_version_and_kind("v1", "ConfigMap");
        assert_eq!(gvk.group, "");
        assert_eq!(gvk.version, "v1");
        assert_eq!(gvk.kind, "ConfigMap");
    }

    #[test]
    fn test_gvk_from_api_version_dotted_group() {
        let gvk = GroupVersionKind::from_api_version_and_kind("networking.k8s.io/v1", "Ingress");
        assert_eq!(gvk.group, "networking.k8s.io");
        assert_eq!(gvk.version, "v1");
    }

    #[test]
    fn test_gvk_display() {
        let gvk = GroupVersionKind::new("rbac.authorization.k8s.io", "v1", "ClusterRole");
        assert_eq!(
            gvk.to_string(),
            "rbac.authorization.k8s.io/v1, Kind=ClusterRole"
        );
    }

    #[test]
    fn test_group_kind_parse_with_group() {
        let gk = GroupKind::parse("Deployment.apps");
        assert_eq!(gk.kind, "Deployment");
        assert_eq!(gk.group, "apps");
        assert_eq!(gk.to_string(), "Deployment.apps");
    }

    #[test]
    fn test_group_kind_parse_bare_kind() {
        let gk = GroupKind::parse("Secret");
        assert_eq!(gk.kind, "Secret");
        assert_eq!(gk.group, "");
        assert_eq!(gk.to_string(), "Secret");
    }

    #[test]
    fn test_group_kind_parse_dotted_group() {
        let gk = GroupKind::parse("Tester.test.example.io");
        assert_eq!(gk.kind, "Tester");
        assert_eq!(gk.group, "test.example.io");
    }

    #[test]
    fn test_parse_group_version() {
        assert_eq!(
            parse_group_version("apps/v1").unwrap(),
            ("apps".to_string(), "v1".to_string())
        );
        assert_eq!(
            parse_group_version("v1").unwrap(),
            (String::new(), "v1".to_string())
        );
        assert_eq!(
            parse_group_version("/v1").unwrap(),
            (String::new(), "v1".to_string())
        );
    }

    #[test]
    fn test_parse_group_version_rejects_extra_slash() {
        let err = parse_group_version("a/b/v1").unwrap_err();
        assert!(err.to_string().contains("a/b/v1"));
    }
}
