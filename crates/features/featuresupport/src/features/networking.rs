use crate::feature::{SupportLevelFeature, active_if, dev_preview, supported, unavailable};
use crate::filters::Filters;
use crate::state::ActiveState;
use capgate_domain::ids::{ArchitectureId, FeatureId};
use capgate_domain::platform::{NetworkType, PlatformType};
use capgate_domain::support::{ActiveLevel, IncompatibilityReason, SupportLevel};
use capgate_kernel::version::Release;

/// First release without the OpenShiftSDN plugin.
pub(crate) const SDN_REMOVED_IN: &str = "4.15";

#[derive(Debug)]
pub(crate) struct VipAutoAllocFeature;

impl SupportLevelFeature for VipAutoAllocFeature {
    fn id(&self) -> FeatureId {
        FeatureId::VipAutoAlloc
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.platform == Some(PlatformType::External) {
            return unavailable(IncompatibilityReason::Platform);
        }
        if filters.release.predates("4.15") {
            return dev_preview();
        }
        unavailable(IncompatibilityReason::OpenshiftVersion)
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![
            FeatureId::Sno,
            FeatureId::ExternalPlatformOci,
            FeatureId::NonePlatform,
            FeatureId::ExternalPlatform,
        ]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.vip_dhcp_allocation())
    }
}

#[derive(Debug)]
pub(crate) struct ClusterManagedNetworkingFeature;

impl SupportLevelFeature for ClusterManagedNetworkingFeature {
    fn id(&self) -> FeatureId {
        FeatureId::ClusterManagedNetworking
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.architecture_is(ArchitectureId::Arm64) && filters.release.below("4.11") {
            return unavailable(IncompatibilityReason::CpuArchitecture);
        }
        if filters.platform == Some(PlatformType::External) {
            return unavailable(IncompatibilityReason::Platform);
        }
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![
            FeatureId::Sno,
            FeatureId::UserManagedNetworking,
            FeatureId::ExternalPlatformOci,
            FeatureId::NonePlatform,
            FeatureId::ExternalPlatform,
        ]
    }

    fn incompatible_architectures(&self, release: &Release<'_>) -> Vec<ArchitectureId> {
        let mut architectures = vec![ArchitectureId::S390x, ArchitectureId::Ppc64le];
        if !release.reaches("4.11") {
            architectures.push(ArchitectureId::Arm64);
        }
        architectures
    }

    /// The opposite of user-managed networking. vSphere allows both modes, so
    /// there the API VIPs decide.
    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        if state.cluster.is_none() || state.user_managed_networking() {
            return ActiveLevel::NotActive;
        }
        if state.platform() == Some(PlatformType::Vsphere) {
            return active_if(!state.api_vips().is_empty());
        }
        ActiveLevel::Active
    }
}

#[derive(Debug)]
pub(crate) struct DualStackFeature;

impl SupportLevelFeature for DualStackFeature {
    fn id(&self) -> FeatureId {
        FeatureId::DualStack
    }

    fn support_level(&self, _filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        supported()
    }

    fn incompatible_features(&self, release: &Release<'_>) -> Vec<FeatureId> {
        if release.below("4.13") {
            return vec![FeatureId::VsphereIntegration];
        }
        Vec::new()
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.is_dual_stack())
    }
}

#[derive(Debug)]
pub(crate) struct DualStackVipsFeature;

impl SupportLevelFeature for DualStackVipsFeature {
    fn id(&self) -> FeatureId {
        FeatureId::DualStackVips
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.release.below("4.12") {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        if filters.is_external_oci() {
            return unavailable(IncompatibilityReason::Platform);
        }
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::ExternalPlatformOci]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.api_vips().len() > 1)
    }
}

#[derive(Debug)]
pub(crate) struct UserManagedNetworkingFeature;

impl SupportLevelFeature for UserManagedNetworkingFeature {
    fn id(&self) -> FeatureId {
        FeatureId::UserManagedNetworking
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.platform == Some(PlatformType::Nutanix) {
            return unavailable(IncompatibilityReason::Platform);
        }
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![
            FeatureId::ClusterManagedNetworking,
            FeatureId::NutanixIntegration,
            FeatureId::BaremetalPlatform,
        ]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.user_managed_networking())
    }
}

/// Networking delegated to the platform itself. Meaningless until a platform is chosen.
#[derive(Debug)]
pub(crate) struct PlatformManagedNetworkingFeature;

impl SupportLevelFeature for PlatformManagedNetworkingFeature {
    fn id(&self) -> FeatureId {
        FeatureId::PlatformManagedNetworking
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        match filters.platform {
            None => (SupportLevel::Excluded, IncompatibilityReason::None),
            Some(PlatformType::External | PlatformType::None) => supported(),
            Some(_) => (SupportLevel::Unsupported, IncompatibilityReason::None),
        }
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![
            FeatureId::BaremetalPlatform,
            FeatureId::VsphereIntegration,
            FeatureId::NutanixIntegration,
        ]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(matches!(state.platform(), Some(PlatformType::External | PlatformType::None)))
    }
}

#[derive(Debug)]
pub(crate) struct SdnNetworkTypeFeature;

impl SupportLevelFeature for SdnNetworkTypeFeature {
    fn id(&self) -> FeatureId {
        FeatureId::SdnNetworkType
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.release.predates(SDN_REMOVED_IN) {
            return supported();
        }
        unavailable(IncompatibilityReason::OpenshiftVersion)
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::OvnNetworkType]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.network_type() == Some(NetworkType::OpenShiftSdn))
    }
}

#[derive(Debug)]
pub(crate) struct OvnNetworkTypeFeature;

impl SupportLevelFeature for OvnNetworkTypeFeature {
    fn id(&self) -> FeatureId {
        FeatureId::OvnNetworkType
    }

    fn support_level(&self, _filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::SdnNetworkType]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.network_type() == Some(NetworkType::OvnKubernetes))
    }
}
