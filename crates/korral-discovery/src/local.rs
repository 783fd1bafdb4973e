//! Locally backed scope resolution

use std::collections::HashMap;

use korral_core::{CoreError, GroupVersionKind, ResourceScopes};

use crate::builtin;

/// Scope table backed by the built-in entries plus anything added at runtime
/// (CRD-declared scopes, manual overrides). A lookup miss is a hard error
/// naming the unresolved GVK.
#[derive(Debug, Clone)]
pub struct LocalScopes {
    scopes: HashMap<GroupVersionKind, bool>,
}

impl LocalScopes {
    pub fn new() -> Self {
        Self {
            scopes: builtin::SCOPE_TABLE.clone(),
        }
    }
}

impl Default for LocalScopes {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceScopes for LocalScopes {
    fn is_namespaced(&self, gvk: &GroupVersionKind) -> korral_core::Result<bool> {
        self.scopes
            .get(gvk)
            .copied()
            .ok_or_else(|| CoreError::ScopeNotFound {
                gvk: gvk.to_string(),
            })
    }

    fn add_scope(&mut self, gvk: GroupVersionKind, namespaced: bool) {
        // Later entries win, including over built-ins
        self.scopes.insert(gvk, namespaced);
    }

    fn is_core_group(&self, group: &str) -> bool {
        builtin::CORE_GROUPS.contains(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookups() {
        let scopes = LocalScopes::new();
        assert!(scopes
            .is_namespaced(&GroupVersionKind::new("apps", "v1", "Deployment"))
            .unwrap());
        assert!(!scopes
            .is_namespaced(&GroupVersionKind::new("", "v1", "Namespace"))
            .unwrap());
    }

    #[test]
    fn test_unknown_gvk_is_an_error() {
        let scopes = LocalScopes::new();
        let gvk = GroupVersionKind::new("example.com", "v1", "Widget");
        let err = scopes.is_namespaced(&gvk).unwrap_err();
        assert!(err.to_string().contains("Widget"));
    }

    #[test]
    fn test_added_scope_resolves() {
        let mut scopes = LocalScopes::new();
        let gvk = GroupVersionKind::new("example.com", "v1", "Widget");
        scopes.add_scope(gvk.clone(), true);
        assert!(scopes.is_namespaced(&gvk).unwrap());
    }

    #[test]
    fn test_added_scope_overwrites_builtin() {
        let mut scopes = LocalScopes::new();
        let gvk = GroupVersionKind::new("", "v1", "Pod");
        scopes.add_scope(gvk.clone(), false);
        assert!(!scopes.is_namespaced(&gvk).unwrap());
    }

    #[test]
    fn test_core_group_membership() {
        let scopes = LocalScopes::new();
        assert!(scopes.is_core_group(""));
        assert!(scopes.is_core_group("batch"));
        assert!(!scopes.is_core_group("test.io"));
    }
}
