//! Read-only views of a cluster and its infra-env, plus the partial updates
//! a mutation request proposes.

use crate::field::Field;
use crate::platform::{HighAvailabilityMode, ImageType, NetworkType, PlatformType};
use serde::{Deserialize, Serialize};

/// Persisted cluster state as far as capability decisions care.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterSnapshot {
    pub openshift_version: String,
    pub cpu_architecture: Option<String>,
    pub platform: Option<PlatformType>,
    pub external_platform_name: Option<String>,
    pub control_plane_count: Option<u32>,
    pub arbiter_count: u32,
    pub high_availability: Option<HighAvailabilityMode>,
    pub user_managed_networking: Option<bool>,
    pub vip_dhcp_allocation: Option<bool>,
    pub api_vips: Vec<String>,
    pub machine_networks: Vec<String>,
    pub service_networks: Vec<String>,
    pub cluster_networks: Vec<String>,
    pub network_type: Option<NetworkType>,
    /// Names of the add-ons currently enabled on the cluster.
    pub monitored_operators: Vec<String>,
}

impl ClusterSnapshot {
    /// One control-plane node, either by count or by `HighAvailabilityMode::None`.
    #[must_use]
    pub fn is_single_node(&self) -> bool {
        self.control_plane_count.map_or(
            self.high_availability == Some(HighAvailabilityMode::None),
            |count| count == 1,
        )
    }

    /// Two control-plane nodes backed by at least one arbiter.
    #[must_use]
    pub fn is_arbiter(&self) -> bool {
        self.arbiter_count > 0 && self.control_plane_count == Some(2)
    }

    #[must_use]
    pub fn has_operator(&self, name: &str) -> bool {
        self.monitored_operators.iter().any(|op| op == name)
    }
}

/// Persisted infra-env state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfraEnvSnapshot {
    pub image_type: Option<ImageType>,
}

/// Proposed cluster update. Every field distinguishes absent, cleared, and set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterDelta {
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub platform: Field<PlatformType>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_platform_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub user_managed_networking: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub vip_dhcp_allocation: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub api_vips: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub machine_networks: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub service_networks: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub cluster_networks: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub network_type: Field<NetworkType>,
    /// Full replacement list of enabled add-ons; an empty list disables all of them.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub olm_operators: Field<Vec<String>>,
}

/// Proposed infra-env update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfraEnvDelta {
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub image_type: Field<ImageType>,
}
