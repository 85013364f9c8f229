//! # Registries
//!
//! Both registries are exhaustive `match`es over the identity enums, so adding an
//! identity without a rule fails to compile. Rules are zero-sized and `'static`;
//! lookups never allocate and never fail. Iteration follows declaration order of
//! the identity enums.

use crate::architecture::{
    Arm64Architecture, MultiArchitecture, Ppc64leArchitecture, S390xArchitecture,
    SupportLevelArchitecture, X86_64Architecture,
};
use crate::feature::SupportLevelFeature;
use crate::features::misc::{
    CustomManifestFeature, FullIsoFeature, MinimalIsoFeature, NonStandardHaControlPlaneFeature,
    SingleNodeExpansionFeature, SkipMcoRebootFeature, SnoFeature, TnaFeature,
};
use crate::features::networking::{
    ClusterManagedNetworkingFeature, DualStackFeature, DualStackVipsFeature, OvnNetworkTypeFeature,
    PlatformManagedNetworkingFeature, SdnNetworkTypeFeature, UserManagedNetworkingFeature,
    VipAutoAllocFeature,
};
use crate::features::operators::{
    self, AmdGpuFeature, CnvFeature, LsoFeature, LvmFeature, MceFeature, MtvFeature,
    NmstateFeature, NodeFeatureDiscoveryFeature, OdfFeature, OpenshiftAiFeature, OscFeature,
};
use crate::features::platforms::{
    BaremetalPlatformFeature, ExternalPlatformFeature, ExternalPlatformOciFeature,
    NonePlatformFeature, NutanixIntegrationFeature, VsphereIntegrationFeature,
};
use capgate_domain::ids::{ArchitectureId, FeatureId};
use strum::IntoEnumIterator;

/// The rule registered for `id`.
#[must_use]
pub fn feature(id: FeatureId) -> &'static dyn SupportLevelFeature {
    match id {
        FeatureId::Sno => &SnoFeature,
        FeatureId::Tna => &TnaFeature,
        FeatureId::CustomManifest => &CustomManifestFeature,
        FeatureId::SingleNodeExpansion => &SingleNodeExpansionFeature,
        FeatureId::MinimalIso => &MinimalIsoFeature,
        FeatureId::FullIso => &FullIsoFeature,
        FeatureId::NonStandardHaControlPlane => &NonStandardHaControlPlaneFeature,
        FeatureId::SkipMcoReboot => &SkipMcoRebootFeature,

        FeatureId::VipAutoAlloc => &VipAutoAllocFeature,
        FeatureId::ClusterManagedNetworking => &ClusterManagedNetworkingFeature,
        FeatureId::DualStack => &DualStackFeature,
        FeatureId::DualStackVips => &DualStackVipsFeature,
        FeatureId::UserManagedNetworking => &UserManagedNetworkingFeature,
        FeatureId::PlatformManagedNetworking => &PlatformManagedNetworkingFeature,
        FeatureId::SdnNetworkType => &SdnNetworkTypeFeature,
        FeatureId::OvnNetworkType => &OvnNetworkTypeFeature,

        FeatureId::BaremetalPlatform => &BaremetalPlatformFeature,
        FeatureId::NonePlatform => &NonePlatformFeature,
        FeatureId::NutanixIntegration => &NutanixIntegrationFeature,
        FeatureId::VsphereIntegration => &VsphereIntegrationFeature,
        FeatureId::ExternalPlatformOci => &ExternalPlatformOciFeature,
        FeatureId::ExternalPlatform => &ExternalPlatformFeature,

        FeatureId::Lvm => &LvmFeature,
        FeatureId::Odf => &OdfFeature,
        FeatureId::Cnv => &CnvFeature,
        FeatureId::Lso => &LsoFeature,
        FeatureId::Mce => &MceFeature,
        FeatureId::Mtv => &MtvFeature,
        FeatureId::NodeFeatureDiscovery => &NodeFeatureDiscoveryFeature,
        FeatureId::NvidiaGpu => &operators::NVIDIA_GPU,
        FeatureId::Pipelines => &operators::PIPELINES,
        FeatureId::Servicemesh => &operators::SERVICEMESH,
        FeatureId::Serverless => &operators::SERVERLESS,
        FeatureId::OpenshiftAi => &OpenshiftAiFeature,
        FeatureId::Authorino => &operators::AUTHORINO,
        FeatureId::Osc => &OscFeature,
        FeatureId::Nmstate => &NmstateFeature,
        FeatureId::AmdGpu => &AmdGpuFeature,
        FeatureId::Kmm => &operators::KMM,
        FeatureId::NodeHealthcheck => &operators::NODE_HEALTHCHECK,
        FeatureId::SelfNodeRemediation => &operators::SELF_NODE_REMEDIATION,
        FeatureId::FenceAgentsRemediation => &operators::FENCE_AGENTS_REMEDIATION,
        FeatureId::NodeMaintenance => &operators::NODE_MAINTENANCE,
        FeatureId::KubeDescheduler => &operators::KUBE_DESCHEDULER,
    }
}

#[must_use]
pub fn architecture(id: ArchitectureId) -> &'static dyn SupportLevelArchitecture {
    match id {
        ArchitectureId::X86_64 => &X86_64Architecture,
        ArchitectureId::Arm64 => &Arm64Architecture,
        ArchitectureId::S390x => &S390xArchitecture,
        ArchitectureId::Ppc64le => &Ppc64leArchitecture,
        ArchitectureId::Multi => &MultiArchitecture,
    }
}

/// Every feature rule in registry order.
pub fn features() -> impl Iterator<Item = &'static dyn SupportLevelFeature> {
    FeatureId::iter().map(feature)
}

pub fn architectures() -> impl Iterator<Item = &'static dyn SupportLevelArchitecture> {
    ArchitectureId::iter().map(architecture)
}
