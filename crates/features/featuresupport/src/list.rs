use crate::FeatureSupport;
use crate::registry;
use capgate_domain::ids::{ArchitectureId, FeatureId};
use capgate_domain::platform::PlatformType;
use capgate_domain::support::{IncompatibilityReason, SupportLevel};
use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// One row of a feature listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    pub id: FeatureId,
    pub name: &'static str,
    pub support_level: SupportLevel,
    /// Set only for tiers other than `Supported`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<IncompatibilityReason>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub incompatibilities: Vec<FeatureId>,
}

impl FeatureSupport {
    /// Tier of every feature for a query, in registry order.
    ///
    /// Without an architecture the default one is assumed. If that architecture
    /// is itself not supported on `version`, every feature is reported
    /// `Unsupported`. Entries resolving to `Excluded` are left out.
    #[must_use]
    pub fn list_features(
        &self,
        version: &str,
        architecture: Option<ArchitectureId>,
        platform: Option<PlatformType>,
        external_platform_name: Option<&str>,
    ) -> Vec<FeatureEntry> {
        let architecture = architecture.unwrap_or(ArchitectureId::DEFAULT);
        let filters = self
            .filters(version)
            .with_architecture(architecture)
            .with_platform(platform)
            .with_external_platform_name(external_platform_name);

        let override_all = self.resolve_architecture(architecture, version) != SupportLevel::Supported;

        FeatureId::iter()
            .filter_map(|id| {
                let (support_level, reason) = if override_all {
                    (SupportLevel::Unsupported, IncompatibilityReason::CpuArchitecture)
                } else {
                    self.resolve_feature(id, &filters)
                };
                if support_level == SupportLevel::Excluded {
                    return None;
                }

                let mut entry = FeatureEntry {
                    id,
                    name: id.display_name(),
                    support_level,
                    reason: None,
                    incompatibilities: Vec::new(),
                };
                if support_level != SupportLevel::Supported {
                    entry.reason = Some(reason);
                    entry.incompatibilities =
                        registry::feature(id).incompatible_features(&filters.release);
                }
                Some(entry)
            })
            .collect()
    }

    /// Tier of every architecture on `version`.
    #[must_use]
    pub fn list_architectures(&self, version: &str) -> BTreeMap<ArchitectureId, SupportLevel> {
        ArchitectureId::iter().map(|id| (id, self.resolve_architecture(id, version))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_architecture_overrides_every_feature() {
        let engine = FeatureSupport::default();
        let listing = engine.list_features("4.9.0", Some(ArchitectureId::Arm64), None, None);
        assert!(!listing.is_empty());
        assert!(listing.iter().all(|entry| entry.support_level == SupportLevel::Unsupported));
    }

    #[test]
    fn platform_less_listing_drops_only_platform_managed_networking() {
        let engine = FeatureSupport::default();
        let listing = engine.list_features("4.14", None, None, None);
        assert_eq!(listing.len(), 43);
        assert!(listing.iter().all(|entry| entry.id != FeatureId::PlatformManagedNetworking));
    }

    #[test]
    fn supported_entries_carry_no_reason() {
        let engine = FeatureSupport::default();
        let listing = engine.list_features("4.14", None, None, None);
        let sno = listing.iter().find(|entry| entry.id == FeatureId::Sno).unwrap();
        assert_eq!(sno.reason, None);
        assert!(sno.incompatibilities.is_empty());

        let vip = listing.iter().find(|entry| entry.id == FeatureId::VipAutoAlloc).unwrap();
        assert_eq!(vip.support_level, SupportLevel::DevPreview);
        assert_eq!(vip.reason, Some(IncompatibilityReason::None));
        assert!(vip.incompatibilities.contains(&FeatureId::Sno));
    }
}
