//! Identities of the two registries.
//!
//! Declaration order is registry order: listings and validation walk the variants
//! via [`strum::IntoEnumIterator`] so output is stable across calls.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// A capability or optional component whose usability the engine decides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureId {
    // Topology, manifests, and boot images
    Sno,
    Tna,
    CustomManifest,
    SingleNodeExpansion,
    MinimalIso,
    FullIso,
    NonStandardHaControlPlane,
    SkipMcoReboot,

    // Networking
    VipAutoAlloc,
    ClusterManagedNetworking,
    DualStack,
    DualStackVips,
    UserManagedNetworking,
    PlatformManagedNetworking,
    SdnNetworkType,
    OvnNetworkType,

    // Platforms
    BaremetalPlatform,
    NonePlatform,
    NutanixIntegration,
    VsphereIntegration,
    ExternalPlatformOci,
    ExternalPlatform,

    // Add-ons
    Lvm,
    Odf,
    Cnv,
    Lso,
    Mce,
    Mtv,
    NodeFeatureDiscovery,
    NvidiaGpu,
    Pipelines,
    Servicemesh,
    Serverless,
    OpenshiftAi,
    Authorino,
    Osc,
    Nmstate,
    AmdGpu,
    Kmm,
    NodeHealthcheck,
    SelfNodeRemediation,
    FenceAgentsRemediation,
    NodeMaintenance,
    KubeDescheduler,
}

impl FeatureId {
    /// Human-readable name used in listings and conflict messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sno => "Single Node OpenShift",
            Self::Tna => "TNA Clusters",
            Self::CustomManifest => "Custom Manifest",
            Self::SingleNodeExpansion => "Single Node Expansion",
            Self::MinimalIso => "Minimal ISO",
            Self::FullIso => "Full ISO",
            Self::NonStandardHaControlPlane => "Non-standard HA OCP Control Plane",
            Self::SkipMcoReboot => "Skip MCO reboot",
            Self::VipAutoAlloc => "VIP Automatic Allocation",
            Self::ClusterManagedNetworking => "Cluster Managed Networking",
            Self::DualStack => "Dual-Stack",
            Self::DualStackVips => "Dual-Stack VIPs",
            Self::UserManagedNetworking => "User Managed Networking",
            Self::PlatformManagedNetworking => "Platform managed networking",
            Self::SdnNetworkType => "Openshift SDN",
            Self::OvnNetworkType => "Openshift OVN",
            Self::BaremetalPlatform => "Baremetal Platform Integration",
            Self::NonePlatform => "None Platform Integration",
            Self::NutanixIntegration => "Nutanix Platform Integration",
            Self::VsphereIntegration => "vSphere Platform Integration",
            Self::ExternalPlatformOci => "Oracle Cloud Infrastructure external platform",
            Self::ExternalPlatform => "External Platform Integration",
            Self::Lvm => "Logical Volume Management",
            Self::Odf => "OpenShift Data Foundation",
            Self::Cnv => "OpenShift Virtualization",
            Self::Lso => "Local Storage Operator",
            Self::Mce => "multicluster engine",
            Self::Mtv => "OpenShift Migration Toolkit for Virtualization",
            Self::NodeFeatureDiscovery => "Node Feature Discovery",
            Self::NvidiaGpu => "NVIDIA GPU",
            Self::Pipelines => "Pipelines",
            Self::Servicemesh => "ServiceMesh",
            Self::Serverless => "ServerLess",
            Self::OpenshiftAi => "OpenShift AI",
            Self::Authorino => "Authorino",
            Self::Osc => "OpenShift sandboxed containers",
            Self::Nmstate => "Nmstate node network configuration",
            Self::AmdGpu => "AMD GPU",
            Self::Kmm => "Kernel Module Management",
            Self::NodeHealthcheck => "Node Healthcheck",
            Self::SelfNodeRemediation => "Self Node Remediation",
            Self::FenceAgentsRemediation => "Fence Agents Remediation",
            Self::NodeMaintenance => "Node Maintenance",
            Self::KubeDescheduler => "Kube Descheduler",
        }
    }

    /// Platform-scoped features describe a platform itself and drop out of
    /// listings once a platform is chosen.
    #[must_use]
    pub const fn is_platform_scoped(self) -> bool {
        matches!(
            self,
            Self::BaremetalPlatform
                | Self::NonePlatform
                | Self::NutanixIntegration
                | Self::VsphereIntegration
                | Self::ExternalPlatformOci
                | Self::ExternalPlatform
        )
    }
}

/// A CPU architecture, rendered with its installer spelling (`x86_64`, `arm64`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
pub enum ArchitectureId {
    #[serde(rename = "x86_64")]
    #[strum(to_string = "x86_64")]
    X86_64,
    #[serde(rename = "arm64", alias = "aarch64")]
    #[strum(to_string = "arm64", serialize = "aarch64")]
    Arm64,
    #[serde(rename = "s390x")]
    #[strum(to_string = "s390x")]
    S390x,
    #[serde(rename = "ppc64le")]
    #[strum(to_string = "ppc64le")]
    Ppc64le,
    /// Multi-architecture release payload.
    #[serde(rename = "multi")]
    #[strum(to_string = "multi")]
    Multi,
}

impl ArchitectureId {
    /// Architecture assumed when a request names none.
    pub const DEFAULT: Self = Self::X86_64;

    /// Identifier of the architecture's own support-level entry.
    #[must_use]
    pub const fn support_level_id(self) -> &'static str {
        match self {
            Self::X86_64 => "X86_64_ARCHITECTURE",
            Self::Arm64 => "ARM64_ARCHITECTURE",
            Self::S390x => "S390X_ARCHITECTURE",
            Self::Ppc64le => "PPC64LE_ARCHITECTURE",
            Self::Multi => "MULTIARCH_RELEASE_IMAGE",
        }
    }
}
