//! Optional add-ons installed through the operator catalog.
//!
//! An add-on is active when it is enabled after the proposed operator list is
//! applied (see [`ActiveState::operator_enabled`]). Add-ons whose tier never
//! depends on the query are described by [`PreviewOperator`] values; the rest
//! get their own rule.

use crate::feature::{
    SupportLevelFeature, active_if, dev_preview, supported, tech_preview, unavailable,
};
use crate::filters::Filters;
use crate::state::ActiveState;
use capgate_domain::ids::{ArchitectureId, FeatureId};
use capgate_domain::platform::PlatformType;
use capgate_domain::support::{ActiveLevel, IncompatibilityReason, SupportLevel};
use capgate_kernel::settings;
use capgate_kernel::version::Release;
use tracing::error;

const VIRTUALIZATION_PLATFORMS: &[PlatformType] = &[PlatformType::Vsphere, PlatformType::Nutanix];
const NON_X86: &[ArchitectureId] = &[ArchitectureId::Arm64, ArchitectureId::Ppc64le, ArchitectureId::S390x];

/// Dev-preview add-on with fixed incompatibilities.
#[derive(Debug)]
pub(crate) struct PreviewOperator {
    id: FeatureId,
    operator: &'static str,
    architectures: &'static [ArchitectureId],
    features: &'static [FeatureId],
}

impl PreviewOperator {
    const fn new(id: FeatureId, operator: &'static str) -> Self {
        Self { id, operator, architectures: &[], features: &[] }
    }

    const fn architectures(mut self, architectures: &'static [ArchitectureId]) -> Self {
        self.architectures = architectures;
        self
    }

    const fn features(mut self, features: &'static [FeatureId]) -> Self {
        self.features = features;
        self
    }
}

impl SupportLevelFeature for PreviewOperator {
    fn id(&self) -> FeatureId {
        self.id
    }

    fn support_level(&self, _filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        dev_preview()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        self.features.to_vec()
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        self.architectures.to_vec()
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.operator_enabled(self.operator))
    }
}

pub(crate) static NVIDIA_GPU: PreviewOperator =
    PreviewOperator::new(FeatureId::NvidiaGpu, "nvidia-gpu").architectures(NON_X86);
pub(crate) static PIPELINES: PreviewOperator = PreviewOperator::new(FeatureId::Pipelines, "pipelines");
pub(crate) static SERVICEMESH: PreviewOperator =
    PreviewOperator::new(FeatureId::Servicemesh, "servicemesh");
pub(crate) static SERVERLESS: PreviewOperator = PreviewOperator::new(FeatureId::Serverless, "serverless");
pub(crate) static AUTHORINO: PreviewOperator =
    PreviewOperator::new(FeatureId::Authorino, "authorino").architectures(&[ArchitectureId::Arm64]);
pub(crate) static KMM: PreviewOperator = PreviewOperator::new(FeatureId::Kmm, "kmm");
pub(crate) static NODE_HEALTHCHECK: PreviewOperator =
    PreviewOperator::new(FeatureId::NodeHealthcheck, "node-healthcheck").features(&[FeatureId::Sno]);
pub(crate) static SELF_NODE_REMEDIATION: PreviewOperator =
    PreviewOperator::new(FeatureId::SelfNodeRemediation, "self-node-remediation")
        .features(&[FeatureId::Sno]);
pub(crate) static FENCE_AGENTS_REMEDIATION: PreviewOperator =
    PreviewOperator::new(FeatureId::FenceAgentsRemediation, "fence-agents-remediation")
        .features(&[FeatureId::Sno]);
pub(crate) static NODE_MAINTENANCE: PreviewOperator =
    PreviewOperator::new(FeatureId::NodeMaintenance, "node-maintenance").features(&[FeatureId::Sno]);
pub(crate) static KUBE_DESCHEDULER: PreviewOperator =
    PreviewOperator::new(FeatureId::KubeDescheduler, "kube-descheduler").features(&[FeatureId::Sno]);

#[derive(Debug)]
pub(crate) struct LvmFeature;

impl SupportLevelFeature for LvmFeature {
    fn id(&self) -> FeatureId {
        FeatureId::Lvm
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.release.below("4.11") {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        if filters.platform_in(VIRTUALIZATION_PLATFORMS) {
            return unavailable(IncompatibilityReason::Platform);
        }
        if filters.release.matches("4.11") {
            return dev_preview();
        }
        supported()
    }

    fn incompatible_features(&self, release: &Release<'_>) -> Vec<FeatureId> {
        let mut features = vec![
            FeatureId::NutanixIntegration,
            FeatureId::VsphereIntegration,
            FeatureId::Odf,
            FeatureId::OpenshiftAi,
        ];
        if release.below("4.15") {
            features.extend([FeatureId::VipAutoAlloc, FeatureId::ClusterManagedNetworking]);
        }
        features
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![ArchitectureId::S390x, ArchitectureId::Ppc64le]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.operator_enabled("lvm"))
    }
}

#[derive(Debug)]
pub(crate) struct OdfFeature;

impl SupportLevelFeature for OdfFeature {
    fn id(&self) -> FeatureId {
        FeatureId::Odf
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.is_external_oci() {
            return unavailable(IncompatibilityReason::Platform);
        }
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::Sno, FeatureId::Lvm, FeatureId::ExternalPlatformOci]
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![ArchitectureId::Arm64]
    }

    // `ocs` is the name the add-on carried before it was renamed.
    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.operator_enabled("odf") || state.operator_enabled("ocs"))
    }
}

#[derive(Debug)]
pub(crate) struct CnvFeature;

impl SupportLevelFeature for CnvFeature {
    fn id(&self) -> FeatureId {
        FeatureId::Cnv
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.platform_in(VIRTUALIZATION_PLATFORMS) {
            return unavailable(IncompatibilityReason::Platform);
        }
        if filters.architecture_is(ArchitectureId::Arm64) {
            return dev_preview();
        }
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::NutanixIntegration, FeatureId::VsphereIntegration]
    }

    fn incompatible_architectures(&self, release: &Release<'_>) -> Vec<ArchitectureId> {
        let mut architectures = vec![ArchitectureId::S390x, ArchitectureId::Ppc64le];
        if release.below("4.14") {
            architectures.push(ArchitectureId::Arm64);
        }
        architectures
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.operator_enabled("cnv"))
    }
}

#[derive(Debug)]
pub(crate) struct LsoFeature;

impl SupportLevelFeature for LsoFeature {
    fn id(&self) -> FeatureId {
        FeatureId::Lso
    }

    fn support_level(&self, _filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        supported()
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![ArchitectureId::Arm64]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.operator_enabled("lso"))
    }
}

#[derive(Debug)]
pub(crate) struct MceFeature;

impl SupportLevelFeature for MceFeature {
    fn id(&self) -> FeatureId {
        FeatureId::Mce
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.release.below("4.10") {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        if filters.platform == Some(PlatformType::Nutanix) {
            return unavailable(IncompatibilityReason::Platform);
        }
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::NutanixIntegration]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.operator_enabled("mce"))
    }
}

/// Migration toolkit; only meaningful on top of virtualization.
#[derive(Debug)]
pub(crate) struct MtvFeature;

impl SupportLevelFeature for MtvFeature {
    fn id(&self) -> FeatureId {
        FeatureId::Mtv
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.platform_in(VIRTUALIZATION_PLATFORMS) {
            return unavailable(IncompatibilityReason::Platform);
        }
        if filters.release.below("4.14") {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::NutanixIntegration, FeatureId::VsphereIntegration]
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![ArchitectureId::Arm64, ArchitectureId::S390x, ArchitectureId::Ppc64le]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.operator_enabled("mtv") && state.operator_enabled("cnv"))
    }
}

#[derive(Debug)]
pub(crate) struct NodeFeatureDiscoveryFeature;

impl SupportLevelFeature for NodeFeatureDiscoveryFeature {
    fn id(&self) -> FeatureId {
        FeatureId::NodeFeatureDiscovery
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.release.below("4.6") {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        dev_preview()
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![ArchitectureId::Ppc64le, ArchitectureId::S390x]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.operator_enabled("node-feature-discovery"))
    }
}

#[derive(Debug)]
pub(crate) struct OpenshiftAiFeature;

impl SupportLevelFeature for OpenshiftAiFeature {
    fn id(&self) -> FeatureId {
        FeatureId::OpenshiftAi
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.release.below("4.12") {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        if filters.is_external_oci() {
            return unavailable(IncompatibilityReason::Platform);
        }
        dev_preview()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::Lvm, FeatureId::Sno, FeatureId::ExternalPlatformOci]
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        NON_X86.to_vec()
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.operator_enabled("openshift-ai"))
    }
}

/// Sandboxed containers.
#[derive(Debug)]
pub(crate) struct OscFeature;

impl SupportLevelFeature for OscFeature {
    fn id(&self) -> FeatureId {
        FeatureId::Osc
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.platform_in(VIRTUALIZATION_PLATFORMS) {
            return unavailable(IncompatibilityReason::Platform);
        }
        if filters.release.below("4.10") {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        tech_preview()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![FeatureId::NutanixIntegration, FeatureId::VsphereIntegration]
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![ArchitectureId::Arm64, ArchitectureId::S390x, ArchitectureId::Ppc64le]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.operator_enabled("osc"))
    }
}

#[derive(Debug)]
pub(crate) struct NmstateFeature;

impl SupportLevelFeature for NmstateFeature {
    fn id(&self) -> FeatureId {
        FeatureId::Nmstate
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if filters.platform_in(&[PlatformType::Nutanix, PlatformType::External]) {
            return unavailable(IncompatibilityReason::Platform);
        }
        if filters.release.below("4.12") {
            return unavailable(IncompatibilityReason::OpenshiftVersion);
        }
        supported()
    }

    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        vec![
            FeatureId::NutanixIntegration,
            FeatureId::ExternalPlatform,
            FeatureId::ExternalPlatformOci,
        ]
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        vec![ArchitectureId::Arm64, ArchitectureId::S390x, ArchitectureId::Ppc64le]
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.operator_enabled("nmstate"))
    }
}

/// AMD GPU add-on, offered only on the releases listed in the installed settings.
#[derive(Debug)]
pub(crate) struct AmdGpuFeature;

impl AmdGpuFeature {
    fn offered_on(release: &Release<'_>) -> bool {
        settings::with_feature_support(|config| {
            config.amd_gpu_supported_openshift_versions.iter().any(|listed| {
                if listed == "*" {
                    return true;
                }
                match release.try_matches(listed) {
                    Ok(equal) => equal,
                    Err(err) => {
                        error!(
                            error = %err,
                            listed = %listed,
                            version = release.as_str(),
                            "Failed to compare versions for the AMD GPU add-on"
                        );
                        false
                    }
                }
            })
        })
    }
}

impl SupportLevelFeature for AmdGpuFeature {
    fn id(&self) -> FeatureId {
        FeatureId::AmdGpu
    }

    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason) {
        if Self::offered_on(&filters.release) {
            return dev_preview();
        }
        unavailable(IncompatibilityReason::OpenshiftVersion)
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        NON_X86.to_vec()
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel {
        active_if(state.operator_enabled("amd-gpu"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capgate_domain::cluster::{ClusterDelta, ClusterSnapshot};
    use capgate_domain::field::Field;
    use capgate_kernel::version::BaseVersion;

    fn filters(version: &str) -> Filters<'_> {
        Filters::new(Release::new(version, &BaseVersion))
    }

    #[test]
    fn lvm_tiers() {
        assert_eq!(LvmFeature.support_level(&filters("4.11.0")), dev_preview());
        assert_eq!(
            LvmFeature.support_level(&filters("4.11.0").with_platform(PlatformType::Vsphere)),
            unavailable(IncompatibilityReason::Platform)
        );
        assert_eq!(LvmFeature.support_level(&filters("4.12.0")), supported());
    }

    #[test]
    fn lvm_networking_conflicts_retire_at_4_15() {
        let old = LvmFeature.incompatible_features(&Release::new("4.14", &BaseVersion));
        let new = LvmFeature.incompatible_features(&Release::new("4.15", &BaseVersion));
        assert!(old.contains(&FeatureId::VipAutoAlloc));
        assert!(!new.contains(&FeatureId::ClusterManagedNetworking));
    }

    #[test]
    fn mce_opens_at_4_10() {
        assert_eq!(MceFeature.support_level(&filters("4.9")).0, SupportLevel::Unavailable);
        assert_eq!(MceFeature.support_level(&filters("4.11.20")), supported());
    }

    #[test]
    fn mtv_needs_virtualization_enabled() {
        let cluster = ClusterSnapshot {
            openshift_version: "4.14".to_owned(),
            monitored_operators: vec!["mtv".to_owned()],
            ..ClusterSnapshot::default()
        };
        let state = ActiveState::new(&BaseVersion).with_cluster(&cluster);
        assert_eq!(MtvFeature.active_level(&state), ActiveLevel::NotActive);

        let delta = ClusterDelta {
            olm_operators: Field::Value(vec!["mtv".to_owned(), "cnv".to_owned()]),
            ..ClusterDelta::default()
        };
        assert_eq!(MtvFeature.active_level(&state.with_cluster_delta(&delta)), ActiveLevel::Active);
    }

    #[test]
    fn preview_operators_carry_their_lists() {
        let release = Release::new("4.16", &BaseVersion);
        assert_eq!(NODE_MAINTENANCE.incompatible_features(&release), vec![FeatureId::Sno]);
        assert_eq!(AUTHORINO.incompatible_architectures(&release), vec![ArchitectureId::Arm64]);
        assert_eq!(PIPELINES.support_level(&filters("4.16")), dev_preview());
    }
}
