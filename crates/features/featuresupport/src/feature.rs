use crate::filters::Filters;
use crate::state::ActiveState;
use capgate_domain::ids::{ArchitectureId, FeatureId};
use capgate_domain::support::{ActiveLevel, IncompatibilityReason, SupportLevel};
use capgate_kernel::version::Release;
use std::fmt::Debug;

/// Contract every capability implements.
///
/// Implementations are stateless unit structs living in the registry for the
/// whole process; every method is a pure function of its arguments.
pub trait SupportLevelFeature: Debug + Send + Sync {
    fn id(&self) -> FeatureId;

    fn name(&self) -> &'static str {
        self.id().display_name()
    }

    /// The capability's own rule. Architecture and platform-scope gates have
    /// already been applied by the resolver when this runs.
    fn support_level(&self, filters: &Filters<'_>) -> (SupportLevel, IncompatibilityReason);

    /// Capabilities that cannot be combined with this one on `release`.
    fn incompatible_features(&self, _release: &Release<'_>) -> Vec<FeatureId> {
        Vec::new()
    }

    fn incompatible_architectures(&self, _release: &Release<'_>) -> Vec<ArchitectureId> {
        Vec::new()
    }

    fn active_level(&self, state: &ActiveState<'_>) -> ActiveLevel;
}

/// `Supported` with no reason attached.
pub(crate) const fn supported() -> (SupportLevel, IncompatibilityReason) {
    (SupportLevel::Supported, IncompatibilityReason::None)
}

pub(crate) const fn dev_preview() -> (SupportLevel, IncompatibilityReason) {
    (SupportLevel::DevPreview, IncompatibilityReason::None)
}

pub(crate) const fn tech_preview() -> (SupportLevel, IncompatibilityReason) {
    (SupportLevel::TechPreview, IncompatibilityReason::None)
}

pub(crate) const fn unavailable(reason: IncompatibilityReason) -> (SupportLevel, IncompatibilityReason) {
    (SupportLevel::Unavailable, reason)
}

pub(crate) const fn active_if(active: bool) -> ActiveLevel {
    if active { ActiveLevel::Active } else { ActiveLevel::NotActive }
}
