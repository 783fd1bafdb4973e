//! Scope resolution seam between the pipeline and discovery backends

use crate::error::Result;
use crate::gvk::GroupVersionKind;

/// Answers whether a resource kind is namespace-scoped.
///
/// Implementations layer a built-in table with CRD-declared and manually
/// supplied entries, optionally falling back to live API-server discovery.
/// The pipeline is agnostic to which backend is active.
pub trait ResourceScopes {
    /// True if the GVK names a namespace-scoped resource. `ScopeNotFound`
    /// when no layer can classify it.
    fn is_namespaced(&self, gvk: &GroupVersionKind) -> Result<bool>;

    /// Insert or overwrite a scope entry; later calls win.
    fn add_scope(&mut self, gvk: GroupVersionKind, namespaced: bool);

    /// True if `group` appears in the built-in table. Used only to decide
    /// whether output paths carry a group suffix.
    fn is_core_group(&self, group: &str) -> bool;
}
