//! # Incompatibility Validation
//!
//! Runs before a cluster or infra-env mutation is committed. The checks are
//! strictly ordered and stop at the first failure:
//!
//! 1. **Architecture**: the target architecture must be supported on the cluster's release.
//! 2. **Feature pairs**: no two active features may declare each other incompatible.
//!    Declarations are one-sided, so both directions are checked.
//! 3. **Feature vs architecture**: no active feature may list the target architecture.
//!
//! Features reporting [`ActiveLevel::NotRelevant`] never take part.

use crate::FeatureSupport;
use crate::error::FeatureSupportError;
use crate::feature::SupportLevelFeature;
use crate::features::networking::SDN_REMOVED_IN;
use crate::registry;
use crate::resolver::parse_architecture;
use crate::state::ActiveState;
use capgate_domain::cluster::{ClusterDelta, ClusterSnapshot, InfraEnvDelta, InfraEnvSnapshot};
use capgate_domain::ids::{ArchitectureId, FeatureId};
use capgate_domain::support::{ActiveLevel, SupportLevel};
use strum::IntoEnumIterator;
use tracing::debug;

impl FeatureSupport {
    /// Features exercised by the effective configuration, in registry order.
    #[must_use]
    pub fn active_features(&self, state: &ActiveState<'_>) -> Vec<FeatureId> {
        FeatureId::iter()
            .filter(|&id| registry::feature(id).active_level(state) == ActiveLevel::Active)
            .collect()
    }

    /// Rejects configurations that combine incompatible features or target an
    /// architecture the release or an active feature cannot run on.
    ///
    /// Without an explicit `architecture` the cluster's own is used.
    ///
    /// # Errors
    /// * [`FeatureSupportError::InvalidIdentifier`] if the cluster names an unknown architecture.
    /// * [`FeatureSupportError::IncompatibleArchitecture`] for an unsupported architecture.
    /// * [`FeatureSupportError::IncompatibleFeatures`] for the first conflicting pair.
    /// * [`FeatureSupportError::FeatureArchitectureConflict`] for the first active
    ///   feature that cannot run on the architecture.
    pub fn validate(
        &self,
        architecture: Option<ArchitectureId>,
        cluster: Option<&ClusterSnapshot>,
        infra_env: Option<&InfraEnvSnapshot>,
        cluster_delta: Option<&ClusterDelta>,
        infra_env_delta: Option<&InfraEnvDelta>,
    ) -> Result<(), FeatureSupportError> {
        let Some(cluster) = cluster else {
            return Ok(());
        };
        let version = cluster.openshift_version.as_str();
        let release = self.release(version);
        let architecture = match architecture {
            Some(architecture) => Some(architecture),
            None => cluster.cpu_architecture.as_deref().map(parse_architecture).transpose()?,
        };

        if let Some(architecture) = architecture
            && !version.is_empty()
            && self.resolve_architecture(architecture, version) != SupportLevel::Supported
        {
            debug!(%architecture, version, "Architecture is not supported on this release");
            return Err(FeatureSupportError::IncompatibleArchitecture {
                architecture,
                version: version.to_owned(),
            });
        }

        let state = self
            .active_state()
            .with_cluster(cluster)
            .with_infra_env(infra_env)
            .with_cluster_delta(cluster_delta)
            .with_infra_env_delta(infra_env_delta);
        let active: Vec<&dyn SupportLevelFeature> =
            self.active_features(&state).into_iter().map(registry::feature).collect();

        for (index, feature) in active.iter().enumerate() {
            let declared = feature.incompatible_features(&release);
            for other in &active[index + 1..] {
                let conflict = declared.contains(&other.id())
                    || other.incompatible_features(&release).contains(&feature.id());
                if conflict {
                    debug!(feature = %feature.id(), other = %other.id(), version, "Incompatible features");
                    return Err(FeatureSupportError::IncompatibleFeatures {
                        feature: feature.id(),
                        other: other.id(),
                        version: version.to_owned(),
                    });
                }
            }
        }

        if let Some(architecture) = architecture
            && let Some(feature) = active
                .iter()
                .find(|feature| feature.incompatible_architectures(&release).contains(&architecture))
        {
            debug!(feature = %feature.id(), %architecture, version, "Feature cannot run on architecture");
            return Err(FeatureSupportError::FeatureArchitectureConflict {
                feature: feature.id(),
                architecture,
                version: version.to_owned(),
            });
        }

        Ok(())
    }

    /// Per-feature checks on the effective configuration that go beyond pairwise
    /// compatibility. Today this rejects the OpenShiftSDN network type on releases
    /// that no longer ship it.
    ///
    /// # Errors
    /// Returns [`FeatureSupportError::UnsupportedNetworkType`] in that case.
    pub fn validate_active_features(
        &self,
        cluster: Option<&ClusterSnapshot>,
        cluster_delta: Option<&ClusterDelta>,
    ) -> Result<(), FeatureSupportError> {
        let Some(cluster) = cluster else {
            return Ok(());
        };
        let state = self.active_state().with_cluster(cluster).with_cluster_delta(cluster_delta);
        let sdn = registry::feature(FeatureId::SdnNetworkType);

        if sdn.active_level(&state) == ActiveLevel::Active
            && !self.release(&cluster.openshift_version).predates(SDN_REMOVED_IN)
        {
            return Err(FeatureSupportError::UnsupportedNetworkType {
                version: cluster.openshift_version.clone(),
            });
        }
        Ok(())
    }
}
