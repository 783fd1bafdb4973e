//! API-server-backed scope resolution
//!
//! Discovery information is resolved once when the inspector is built;
//! queries afterwards are synchronous, which keeps the pipeline
//! single-threaded. Failures from the remote side are never retried.

use std::path::Path;

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::core::GroupVersionKind as KubeGvk;
use kube::discovery::Scope;
use kube::{Client, Config, Discovery};

use korral_core::{CoreError, GroupVersionKind, ResourceScopes};
use korral_discovery::LocalScopes;

use crate::error::Result;

/// Scope resolution backed by a cluster's discovery API. Local layers are
/// consulted first, so no network round-trip happens for kinds the local
/// table already knows.
pub struct ApiServerScopes {
    local: LocalScopes,
    discovery: Discovery,
}

impl ApiServerScopes {
    /// Connect using the given kubeconfig, or the ambient configuration
    /// (`KUBECONFIG`, `~/.kube/config`, in-cluster) when none is given.
    pub async fn connect(kubeconfig: Option<&Path>) -> Result<Self> {
        let client = match kubeconfig {
            Some(path) => {
                let config = Config::from_custom_kubeconfig(
                    Kubeconfig::read_from(path)?,
                    &KubeConfigOptions::default(),
                )
                .await?;
                Client::try_from(config)?
            }
            None => Client::try_default().await?,
        };
        let discovery = Discovery::new(client).run().await?;
        Ok(Self {
            local: LocalScopes::new(),
            discovery,
        })
    }
}

impl ResourceScopes for ApiServerScopes {
    fn is_namespaced(&self, gvk: &GroupVersionKind) -> korral_core::Result<bool> {
        if let Ok(namespaced) = self.local.is_namespaced(gvk) {
            return Ok(namespaced);
        }

        let kube_gvk = KubeGvk::gvk(&gvk.group, &gvk.version, &gvk.kind);
        match self.discovery.resolve_gvk(&kube_gvk) {
            Some((_, capabilities)) => Ok(capabilities.scope == Scope::Namespaced),
            None => Err(CoreError::ScopeNotFound {
                gvk: gvk.to_string(),
            }),
        }
    }

    fn add_scope(&mut self, gvk: GroupVersionKind, namespaced: bool) {
        self.local.add_scope(gvk, namespaced);
    }

    fn is_core_group(&self, group: &str) -> bool {
        self.local.is_core_group(group)
    }
}
