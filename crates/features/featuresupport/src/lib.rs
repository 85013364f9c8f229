//! # Capability Support Engine
//!
//! Decides, for a target release, CPU architecture, and infrastructure platform, which
//! capabilities and add-ons a cluster may use, at what maturity tier, and whether a
//! cluster's current or proposed configuration combines capabilities that cannot coexist.
//!
//! ## Architecture
//!
//! 1.  **Registries ([`registry`]):** one stateless rule per [`FeatureId`] and per
//!     [`ArchitectureId`], resolved through exhaustive matches.
//! 2.  **Resolution ([`FeatureSupport::resolve_feature`]):** architecture gate, platform-scope
//!     exclusion, then the capability's own version and platform rule.
//! 3.  **Activation ([`ActiveState`]):** the proposed update laid over the stored snapshot,
//!     field by field.
//! 4.  **Validation ([`FeatureSupport::validate`]):** architecture, feature pairs in both
//!     directions, then feature-versus-architecture.
//! 5.  **Listings ([`FeatureSupport::list_features`]):** the full tier table for display.
//!
//! ## Guarantees
//!
//! * **Pure**: no I/O and no interior caches. Only the AMD GPU rule reads the process-wide
//!   settings from `capgate_kernel::settings`, under a scoped lock.
//! * **Fail closed**: an unreadable release resolves to the less permissive answer instead
//!   of an error.
//! * **Deterministic**: identical inputs give identical outputs, in registry order.
//!
//! ```rust
//! use capgate_domain::ids::{ArchitectureId, FeatureId};
//! use capgate_domain::support::SupportLevel;
//! use capgate_featuresupport::FeatureSupport;
//!
//! let engine = FeatureSupport::default();
//! assert_eq!(engine.resolve_architecture(ArchitectureId::Arm64, "4.9.0"), SupportLevel::Unavailable);
//! assert!(engine.is_feature_supported(FeatureId::Lvm, "4.12.0", None));
//! ```

pub mod architecture;
mod error;
pub mod feature;
mod features;
pub mod filters;
pub mod list;
pub mod registry;
pub mod resolver;
pub mod state;
pub mod validator;

pub use crate::architecture::SupportLevelArchitecture;
pub use crate::error::{FeatureSupportError, FeatureSupportErrorExt};
pub use crate::feature::SupportLevelFeature;
pub use crate::filters::Filters;
pub use crate::list::FeatureEntry;
pub use crate::resolver::{parse_architecture, parse_feature, parse_platform};
pub use crate::state::ActiveState;
pub use capgate_domain::ids::{ArchitectureId, FeatureId};

use capgate_kernel::version::{BaseVersion, Release, VersionComparator};
use std::sync::Arc;

/// Entry point of the engine. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct FeatureSupport {
    comparator: Arc<dyn VersionComparator>,
}

impl Default for FeatureSupport {
    fn default() -> Self {
        Self::with_comparator(Arc::new(BaseVersion))
    }
}

impl FeatureSupport {
    #[must_use]
    pub fn with_comparator(comparator: Arc<dyn VersionComparator>) -> Self {
        Self { comparator }
    }

    #[must_use]
    pub fn release<'a>(&'a self, version: &'a str) -> Release<'a> {
        Release::new(version, self.comparator.as_ref())
    }

    /// Filters for `version` with nothing else set.
    #[must_use]
    pub fn filters<'a>(&'a self, version: &'a str) -> Filters<'a> {
        Filters::new(self.release(version))
    }

    /// Empty activation state bound to this engine's comparator.
    #[must_use]
    pub fn active_state(&self) -> ActiveState<'_> {
        ActiveState::new(self.comparator.as_ref())
    }
}

/// Human-readable name of a feature.
#[must_use]
pub const fn feature_name(id: FeatureId) -> &'static str {
    id.display_name()
}
