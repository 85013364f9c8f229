//! Platform integrations.
//!
//! These answer "can this platform be used at all" rather than describing a
//! capability, so the resolver excludes them as soon as a platform is chosen.
//! Their own rules below therefore only run for platform-less queries.

use crate::feature::{SupportLevelFeature, active_if, dev_preview, supported, unavailable};
use crate::filters::Filters;
use crate::state::ActiveState;
use capgate_domain::ids::{ArchitectureId, FeatureId};
use capgate_domain::platform::{OCI_PLATFORM_NAME, PlatformType};
use capgate_domain::support::{ActiveLevel, IncompatibilityReason, SupportLevel};
use capgate_kernel::version::Release;

fn platform_active(state: &ActiveState<'_>, platform: PlatformType) -> ActiveLevel {
    active_if(state.platform() == Some(platform))
}

#[derive(Debug)]
pub(crate) struct BaremetalPlatformFeature;

impl SupportLevelFeature for BaremetalPlatformFeature {
    fn id(&self) -> FeatureId {
        FeatureId::BaremetalPlatform
    }

    fn support_level(&self, _filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::PlatformManagedNetworking, FeatureId::UserManagedNetworking]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        platform_active(state, PlatformType::Baremetal)
    }
}

#[derive(Debug)]
pub(crate) struct NonePlatformFeature;

impl SupportLevelFeature for NonePlatformFeature {
    fn id(&self) -> FeatureId {
        FeatureId::NonePlatform
    }

    fn support_level(&self, _filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::VipAutoAlloc, FeatureId::ClusterManagedNetworking]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        platform_active(state, PlatformType::None)
    }
}

#[derive(Debug)]
pub(crate) struct NutanixIntegrationFeature;

impl SupportLevelFeature for NutanixIntegrationFeature {
    fn id(&self) -> FeatureId {
        FeatureId::NutanixIntegration
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.release.below("4.11") {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        if filters.release.matches("4.11") {
            return dev_preview();
        }
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![
            FeatureId::Sno,
            FeatureId::UserManagedNetworking,
            FeatureId::Lvm,
            FeatureId::Mce,
            FeatureId::Cnv,
            FeatureId::PlatformManagedNetworking,
        ]
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![ArchitectureId::S390x, ArchitectureId::Ppc64le, ArchitectureId::Arm64]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        platform_active(state, PlatformType::Nutanix)
    }
}

#[derive(Debug)]
pub(crate) struct VsphereIntegrationFeature;

impl SupportLevelFeature for VsphereIntegrationFeature {
    fn id(&self) -> FeatureId {
        FeatureId::VsphereIntegration
    }

    fn support_level(&self, _filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        supported()
    }

    fn incompatible_features(&self, release: &Release<'_>) -> Vec<FeatureId> {
        let mut features = vec![
            FeatureId::Sno,
            FeatureId::Lvm,
            FeatureId::PlatformManagedNetworking,
            FeatureId::Cnv,
        ];
        if release.below("4.13") {
            features.push(FeatureId::DualStack);
        }
        features
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![ArchitectureId::S390x, ArchitectureId::Ppc64le]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        platform_active(state, PlatformType::Vsphere)
    }
}

/// Oracle Cloud Infrastructure through the external platform.
#[derive(Debug)]
pub(crate) struct ExternalPlatformOciFeature;

impl SupportLevelFeature for ExternalPlatformOciFeature {
    fn id(&self) -> FeatureId {
        FeatureId::ExternalPlatformOci
    }

    // An unreadable release keeps OCI open.
    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        match filters.release.try_reaches("4.14") {
            Ok(false) => unavailable(IncompatibilityReason::OpenshiftVersion),
            Ok(true) | Err(_) => supported(),
        }
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![
            FeatureId::ClusterManagedNetworking,
            FeatureId::VipAutoAlloc,
            FeatureId::DualStackVips,
            FeatureId::FullIso,
        ]
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![ArchitectureId::S390x, ArchitectureId::Ppc64le]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(
            state.platform() == Some(PlatformType::External)
                && state.external_platform_name() == Some(OCI_PLATFORM_NAME),
        )
    }
}

#[derive(Debug)]
pub(crate) struct ExternalPlatformFeature;

impl SupportLevelFeature for ExternalPlatformFeature {
    fn id(&self) -> FeatureId {
        FeatureId::ExternalPlatform
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.release.below("4.14") {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::ClusterManagedNetworking, FeatureId::VipAutoAlloc]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        platform_active(state, PlatformType::External)
    }
}
