//! # Effective Cluster State
//!
//! A mutation request carries the persisted cluster and infra-env alongside the
//! partial update it proposes. Activation rules never read either side alone:
//! [`ActiveState`] lays every delta field over its snapshot counterpart
//! (absent keeps the snapshot, cleared removes it, a value replaces it) and rules
//! only see the result.

use capgate_domain::cluster::{ClusterDelta, ClusterSnapshot, InfraEnvDelta, InfraEnvSnapshot};
use capgate_domain::field::Field;
use capgate_domain::platform::{ImageType, NetworkType, PlatformType};
use capgate_kernel::version::{Release, VersionComparator};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Snapshot plus proposed delta, as seen by activation rules.
#[derive(Debug, Clone, Copy)]
pub struct ActiveState<'a> {
    pub cluster: Option<&'a ClusterSnapshot>,
    pub infra_env: Option<&'a InfraEnvSnapshot>,
    pub cluster_delta: Option<&'a ClusterDelta>,
    pub infra_env_delta: Option<&'a InfraEnvDelta>,
    comparator: &'a dyn VersionComparator,
}

impl<'a> ActiveState<'a> {
    #[must_use]
    pub const fn new(comparator: &'a dyn VersionComparator) -> Self {
        Self { cluster: None, infra_env: None, cluster_delta: None, infra_env_delta: None, comparator }
    }

    #[must_use]
    pub fn with_cluster(mut self, cluster: impl Into<Option<&'a ClusterSnapshot>>) -> Self {
        self.cluster = cluster.into();
        self
    }

    #[must_use]
    pub fn with_infra_env(mut self, infra_env: impl Into<Option<&'a InfraEnvSnapshot>>) -> Self {
        self.infra_env = infra_env.into();
        self
    }

    #[must_use]
    pub fn with_cluster_delta(mut self, delta: impl Into<Option<&'a ClusterDelta>>) -> Self {
        self.cluster_delta = delta.into();
        self
    }

    #[must_use]
    pub fn with_infra_env_delta(mut self, delta: impl Into<Option<&'a InfraEnvDelta>>) -> Self {
        self.infra_env_delta = delta.into();
        self
    }

    /// The cluster's own release, if a cluster is present.
    #[must_use]
    pub fn cluster_release(&self) -> Option<Release<'a>> {
        self.cluster.map(|cluster| Release::new(&cluster.openshift_version, self.comparator))
    }

    fn overlay<T>(
        &self,
        pick: impl FnOnce(&'a ClusterDelta) -> &'a Field<T>,
        current: Option<&'a T>,
    ) -> Option<&'a T> {
        self.cluster_delta.map_or(current, |delta| pick(delta).overlay(current))
    }

    #[must_use]
    pub fn platform(&self) -> Option<PlatformType> {
        let cluster = self.cluster?;
        self.overlay(|d| &d.platform, cluster.platform.as_ref()).copied()
    }

    #[must_use]
    pub fn external_platform_name(&self) -> Option<&'a str> {
        let cluster = self.cluster?;
        self.overlay(|d| &d.external_platform_name, cluster.external_platform_name.as_ref())
            .map(String::as_str)
    }

    #[must_use]
    pub fn user_managed_networking(&self) -> bool {
        self.cluster.is_some_and(|cluster| {
            self.overlay(|d| &d.user_managed_networking, cluster.user_managed_networking.as_ref())
                .copied()
                .unwrap_or(false)
        })
    }

    #[must_use]
    pub fn vip_dhcp_allocation(&self) -> bool {
        self.cluster.is_some_and(|cluster| {
            self.overlay(|d| &d.vip_dhcp_allocation, cluster.vip_dhcp_allocation.as_ref())
                .copied()
                .unwrap_or(false)
        })
    }

    #[must_use]
    pub fn api_vips(&self) -> &'a [String] {
        self.cluster
            .and_then(|cluster| self.overlay(|d| &d.api_vips, Some(&cluster.api_vips)))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Empty when the cluster never had a network type; a delta cannot introduce one.
    #[must_use]
    pub fn network_type(&self) -> Option<NetworkType> {
        let current = self.cluster?.network_type.as_ref()?;
        self.overlay(|d| &d.network_type, Some(current)).copied()
    }

    /// Any of the machine, service, or cluster networks mixes IPv4 and IPv6 ranges.
    #[must_use]
    pub fn is_dual_stack(&self) -> bool {
        let Some(cluster) = self.cluster else {
            return false;
        };
        [
            self.overlay(|d| &d.machine_networks, Some(&cluster.machine_networks)),
            self.overlay(|d| &d.service_networks, Some(&cluster.service_networks)),
            self.overlay(|d| &d.cluster_networks, Some(&cluster.cluster_networks)),
        ]
        .into_iter()
        .flatten()
        .any(|cidrs| mixes_families(cidrs))
    }

    /// An add-on is enabled after the delta's replacement list, if any, is applied.
    #[must_use]
    pub fn operator_enabled(&self, name: &str) -> bool {
        let Some(cluster) = self.cluster else {
            return false;
        };
        match self.cluster_delta.map(|d| &d.olm_operators) {
            Some(Field::Value(operators)) => operators.iter().any(|op| op == name),
            Some(Field::Cleared) => false,
            Some(Field::Unset) | None => cluster.has_operator(name),
        }
    }

    /// Effective discovery image type; `None` without an infra-env.
    #[must_use]
    pub fn image_type(&self) -> Option<ImageType> {
        let infra_env = self.infra_env?;
        self.infra_env_delta
            .map_or(infra_env.image_type.as_ref(), |d| d.image_type.overlay(infra_env.image_type.as_ref()))
            .copied()
    }
}

fn mixes_families(cidrs: &[String]) -> bool {
    let (mut v4, mut v6) = (false, false);
    for cidr in cidrs {
        let address = cidr.split('/').next().unwrap_or_default().trim();
        if address.parse::<Ipv4Addr>().is_ok() {
            v4 = true;
        } else if address.parse::<Ipv6Addr>().is_ok() {
            v6 = true;
        }
    }
    v4 && v6
}
