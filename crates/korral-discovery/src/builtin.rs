//! Built-in scope table for well-known Kubernetes kinds
//!
//! Generated from upstream API group definitions. Rows are sorted by group,
//! version, kind; treat this as a versioned data asset and regenerate rather
//! than hand-edit.

use std::collections::{HashMap, HashSet};

use korral_core::GroupVersionKind;
use once_cell::sync::Lazy;

/// `(group, version, kind, namespaced)`
#[rustfmt::skip]
static BUILTIN_SCOPES: &[(&str, &str, &str, bool)] = &[
    ("", "v1", "Binding", true),
    ("", "v1", "ComponentStatus", false),
    ("", "v1", "ConfigMap", true),
    ("", "v1", "Endpoints", true),
    ("", "v1", "Event", true),
    ("", "v1", "LimitRange", true),
    ("", "v1", "Namespace", false),
    ("", "v1", "Node", false),
    ("", "v1", "PersistentVolume", false),
    ("", "v1", "PersistentVolumeClaim", true),
    ("", "v1", "Pod", true),
    ("", "v1", "PodTemplate", true),
    ("", "v1", "ReplicationController", true),
    ("", "v1", "ResourceQuota", true),
    ("", "v1", "Secret", true),
    ("", "v1", "Service", true),
    ("", "v1", "ServiceAccount", true),
    ("admissionregistration.k8s.io", "v1", "MutatingWebhookConfiguration", false),
    ("admissionregistration.k8s.io", "v1", "ValidatingAdmissionPolicy", false),
    ("admissionregistration.k8s.io", "v1", "ValidatingAdmissionPolicyBinding", false),
    ("admissionregistration.k8s.io", "v1", "ValidatingWebhookConfiguration", false),
    ("admissionregistration.k8s.io", "v1beta1", "MutatingWebhookConfiguration", false),
    ("admissionregistration.k8s.io", "v1beta1", "ValidatingWebhookConfiguration", false),
    ("apiextensions.k8s.io", "v1", "CustomResourceDefinition", false),
    ("apiextensions.k8s.io", "v1beta1", "CustomResourceDefinition", false),
    ("apiregistration.k8s.io", "v1", "APIService", false),
    ("apps", "v1", "ControllerRevision", true),
    ("apps", "v1", "DaemonSet", true),
    ("apps", "v1", "Deployment", true),
    ("apps", "v1", "ReplicaSet", true),
    ("apps", "v1", "StatefulSet", true),
    ("authentication.k8s.io", "v1", "SelfSubjectReview", false),
    ("authentication.k8s.io", "v1", "TokenReview", false),
    ("authorization.k8s.io", "v1", "LocalSubjectAccessReview", true),
    ("authorization.k8s.io", "v1", "SelfSubjectAccessReview", false),
    ("authorization.k8s.io", "v1", "SelfSubjectRulesReview", false),
    ("authorization.k8s.io", "v1", "SubjectAccessReview", false),
    ("autoscaling", "v1", "HorizontalPodAutoscaler", true),
    ("autoscaling", "v2", "HorizontalPodAutoscaler", true),
    ("autoscaling", "v2beta1", "HorizontalPodAutoscaler", true),
    ("autoscaling", "v2beta2", "HorizontalPodAutoscaler", true),
    ("batch", "v1", "CronJob", true),
    ("batch", "v1", "Job", true),
    ("batch", "v1beta1", "CronJob", true),
    ("certificates.k8s.io", "v1", "CertificateSigningRequest", false),
    ("coordination.k8s.io", "v1", "Lease", true),
    ("discovery.k8s.io", "v1", "EndpointSlice", true),
    ("events.k8s.io", "v1", "Event", true),
    ("flowcontrol.apiserver.k8s.io", "v1", "FlowSchema", false),
    ("flowcontrol.apiserver.k8s.io", "v1", "PriorityLevelConfiguration", false),
    ("flowcontrol.apiserver.k8s.io", "v1beta3", "FlowSchema", false),
    ("flowcontrol.apiserver.k8s.io", "v1beta3", "PriorityLevelConfiguration", false),
    ("networking.k8s.io", "v1", "Ingress", true),
    ("networking.k8s.io", "v1", "IngressClass", false),
    ("networking.k8s.io", "v1", "NetworkPolicy", true),
    ("node.k8s.io", "v1", "RuntimeClass", false),
    ("policy", "v1", "PodDisruptionBudget", true),
    ("policy", "v1beta1", "PodDisruptionBudget", true),
    ("policy", "v1beta1", "PodSecurityPolicy", false),
    ("rbac.authorization.k8s.io", "v1", "ClusterRole", false),
    ("rbac.authorization.k8s.io", "v1", "ClusterRoleBinding", false),
    ("rbac.authorization.k8s.io", "v1", "Role", true),
    ("rbac.authorization.k8s.io", "v1", "RoleBinding", true),
    ("scheduling.k8s.io", "v1", "PriorityClass", false),
    ("storage.k8s.io", "v1", "CSIDriver", false),
    ("storage.k8s.io", "v1", "CSINode", false),
    ("storage.k8s.io", "v1", "CSIStorageCapacity", true),
    ("storage.k8s.io", "v1", "StorageClass", false),
    ("storage.k8s.io", "v1", "VolumeAttachment", false),
];

/// Built-in GVK → namespaced lookup
pub(crate) static SCOPE_TABLE: Lazy<HashMap<GroupVersionKind, bool>> = Lazy::new(|| {
    BUILTIN_SCOPES
        .iter()
        .map(|&(group, version, kind, namespaced)| {
            (GroupVersionKind::new(group, version, kind), namespaced)
        })
        .collect()
});

/// Groups appearing in the built-in table; these get no suffix in output
/// paths
pub(crate) static CORE_GROUPS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| BUILTIN_SCOPES.iter().map(|&(group, _, _, _)| group).collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        let keys: Vec<_> = BUILTIN_SCOPES
            .iter()
            .map(|&(group, version, kind, _)| (group, version, kind))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_well_known_entries() {
        let table = &*SCOPE_TABLE;
        assert_eq!(table.get(&GroupVersionKind::new("", "v1", "Pod")), Some(&true));
        assert_eq!(
            table.get(&GroupVersionKind::new("", "v1", "Namespace")),
            Some(&false)
        );
        assert_eq!(
            table.get(&GroupVersionKind::new(
                "apiextensions.k8s.io",
                "v1",
                "CustomResourceDefinition"
            )),
            Some(&false)
        );
    }

    #[test]
    fn test_core_groups() {
        assert!(CORE_GROUPS.contains(""));
        assert!(CORE_GROUPS.contains("apps"));
        assert!(CORE_GROUPS.contains("rbac.authorization.k8s.io"));
        assert!(!CORE_GROUPS.contains("example.com"));
    }
}
