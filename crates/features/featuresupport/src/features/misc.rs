//! Topology, manifest, and boot-image capabilities.

use crate::feature::{SupportLevelFeature, active_if, dev_preview, supported, tech_preview, unavailable};
use crate::filters::Filters;
use crate::state::ActiveState;
use capgate_domain::ids::{ArchitectureId, FeatureId};
use capgate_domain::platform::{ImageType, PlatformType};
use capgate_domain::support::{ActiveLevel, IncompatibilityReason, SupportLevel};
use capgate_kernel::version::Release;

/// First release carrying two-node-plus-arbiter topologies.
const MINIMUM_VERSION_FOR_ARBITER_CLUSTERS: &str = "4.19";
const MINIMUM_VERSION_FOR_NON_STANDARD_HA: &str = "4.18";

#[derive(Debug)]
pub(crate) struct SnoFeature;

impl SupportLevelFeature for SnoFeature {
    fn id(&self) -> FeatureId {
        FeatureId::Sno
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.platform_in(&[PlatformType::Nutanix, PlatformType::Vsphere]) {
            return unavailable(IncompatibilityReason::Platform);
        }

        let late_arch = filters.architecture_is(ArchitectureId::S390x)
            || filters.architecture_is(ArchitectureId::Ppc64le);
        if late_arch && filters.release.matches("4.13") {
            return dev_preview();
        }

        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![
            FeatureId::Odf,
            FeatureId::NutanixIntegration,
            FeatureId::VsphereIntegration,
            FeatureId::ClusterManagedNetworking,
            FeatureId::VipAutoAlloc,
            FeatureId::OpenshiftAi,
            FeatureId::NodeHealthcheck,
            FeatureId::SelfNodeRemediation,
            FeatureId::FenceAgentsRemediation,
            FeatureId::NodeMaintenance,
            FeatureId::KubeDescheduler,
        ]
    }

    fn incompatible_architectures(&self, release: &Release<'_>) -> Vec<ArchitectureId> {
        if release.reaches("4.13") {
            return Vec::new();
        }
        vec![ArchitectureId::S390x, ArchitectureId::Ppc64le]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.cluster.is_some_and(|cluster| cluster.is_single_node()))
    }
}

/// Two control-plane nodes plus an arbiter.
#[derive(Debug)]
pub(crate) struct TnaFeature;

impl SupportLevelFeature for TnaFeature {
    fn id(&self) -> FeatureId {
        FeatureId::Tna
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.platform.is_some_and(|platform| platform != PlatformType::Baremetal) {
            return unavailable(IncompatibilityReason::Platform);
        }
        if filters.release.matches(MINIMUM_VERSION_FOR_ARBITER_CLUSTERS) {
            return tech_preview();
        }
        if filters.release.reaches(MINIMUM_VERSION_FOR_ARBITER_CLUSTERS) {
            return supported();
        }
        unavailable(IncompatibilityReason::OpenshiftVersion)
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![
            FeatureId::NonePlatform,
            FeatureId::NutanixIntegration,
            FeatureId::VsphereIntegration,
            FeatureId::ExternalPlatform,
            FeatureId::ExternalPlatformOci,
        ]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.cluster.is_some_and(|cluster| cluster.is_arbiter()))
    }
}

#[derive(Debug)]
pub(crate) struct CustomManifestFeature;

impl SupportLevelFeature for CustomManifestFeature {
    fn id(&self) -> FeatureId {
        FeatureId::CustomManifest
    }

    fn support_level(&self, _filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        supported()
    }

    fn active_level(&self, _state: &ActiveState<'_>) -> ActiveLevel {
        ActiveLevel::NotRelevant
    }
}

/// Adding workers to an installed single-node cluster; follows SNO once available.
#[derive(Debug)]
pub(crate) struct SingleNodeExpansionFeature;

impl SupportLevelFeature for SingleNodeExpansionFeature {
    fn id(&self) -> FeatureId {
        FeatureId::SingleNodeExpansion
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.release.below("4.11") {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        SnoFeature.support_level(filters)
    }

    fn incompatible_architectures(&self, release: &Release<'_>) -> Vec<ArchitectureId> {
        SnoFeature.incompatible_architectures(release)
    }

    fn active_level(&self, _state: &ActiveState<'_>) -> ActiveLevel {
        ActiveLevel::NotRelevant
    }
}

#[derive(Debug)]
pub(crate) struct MinimalIsoFeature;

impl SupportLevelFeature for MinimalIsoFeature {
    fn id(&self) -> FeatureId {
        FeatureId::MinimalIso
    }

    fn support_level(&self, _filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        supported()
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![ArchitectureId::S390x]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.image_type() == Some(ImageType::MinimalIso))
    }
}

#[derive(Debug)]
pub(crate) struct FullIsoFeature;

impl SupportLevelFeature for FullIsoFeature {
    fn id(&self) -> FeatureId {
        FeatureId::FullIso
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.is_external_oci() {
            return unavailable(IncompatibilityReason::Platform);
        }
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::ExternalPlatformOci]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.image_type() == Some(ImageType::FullIso))
    }
}

/// More than three control-plane nodes.
#[derive(Debug)]
pub(crate) struct NonStandardHaControlPlaneFeature;

impl SupportLevelFeature for NonStandardHaControlPlaneFeature {
    fn id(&self) -> FeatureId {
        FeatureId::NonStandardHaControlPlane
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if !filters.release.reaches(MINIMUM_VERSION_FOR_NON_STANDARD_HA) {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        if filters.platform.is_some_and(|p| !matches!(p, PlatformType::Baremetal | PlatformType::None)) {
            return unavailable(IncompatibilityReason::Platform);
        }
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![
            FeatureId::ExternalPlatform,
            FeatureId::NutanixIntegration,
            FeatureId::VsphereIntegration,
            FeatureId::ExternalPlatformOci,
        ]
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![
            ArchitectureId::Arm64,
            ArchitectureId::S390x,
            ArchitectureId::Ppc64le,
            ArchitectureId::Multi,
        ]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.cluster.and_then(|cluster| cluster.control_plane_count).is_some_and(|n| n > 3))
    }
}

/// Skipping the machine-config reboot during installation.
#[derive(Debug)]
pub(crate) struct SkipMcoRebootFeature;

impl SupportLevelFeature for SkipMcoRebootFeature {
    fn id(&self) -> FeatureId {
        FeatureId::SkipMcoReboot
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.release.below("4.15") {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        supported()
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![ArchitectureId::S390x]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        let Some(cluster) = state.cluster else {
            return ActiveLevel::NotActive;
        };
        let recent = state.cluster_release().is_some_and(|release| release.reaches("4.15"));
        let s390x = cluster
            .cpu_architecture
            .as_deref()
            .and_then(|raw| raw.parse::<ArchitectureId>().ok())
            == Some(ArchitectureId::S390x);
        active_if(recent && !s390x)
    }
}
