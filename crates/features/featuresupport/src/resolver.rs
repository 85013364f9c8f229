//! Support-level resolution for single identities.

use crate::feature::unavailable;
use crate::filters::Filters;
use crate::registry;
use crate::{FeatureSupport, FeatureSupportError};
use capgate_domain::ids::{ArchitectureId, FeatureId};
use capgate_domain::platform::{OCI_PLATFORM_NAME, PlatformType};
use capgate_domain::support::{IncompatibilityReason, SupportLevel};

impl FeatureSupport {
    /// Tier of a feature for the given query.
    ///
    /// Gates run in a fixed order: the architecture gate first, then the
    /// platform-scope exclusion, then the feature's own rule. Never fails; an
    /// unreadable release resolves to the less permissive answer.
    #[must_use]
    pub fn resolve_feature(
        &self,
        id: FeatureId,
        filters: &Filters<'_>,
    ) -> (SupportLevel, IncompatibilityReason) {
        let rule = registry::feature(id);

        if let Some(architecture) = filters.architecture
            && rule.incompatible_architectures(&filters.release).contains(&architecture)
        {
            return unavailable(IncompatibilityReason::CpuArchitecture);
        }

        if id.is_platform_scoped() && filters.platform.is_some() {
            return (SupportLevel::Excluded, IncompatibilityReason::None);
        }

        rule.support_level(filters)
    }

    #[must_use]
    pub fn resolve_architecture(&self, id: ArchitectureId, version: &str) -> SupportLevel {
        registry::architecture(id).support_level(&self.release(version))
    }

    /// Generally available, no preview tier.
    #[must_use]
    pub fn is_feature_supported(
        &self,
        id: FeatureId,
        version: &str,
        architecture: Option<ArchitectureId>,
    ) -> bool {
        let filters = self.filters(version).with_architecture(architecture);
        self.resolve_feature(id, &filters).0 == SupportLevel::Supported
    }

    /// Usable at all, preview tiers included.
    #[must_use]
    pub fn is_feature_available(
        &self,
        id: FeatureId,
        version: &str,
        architecture: Option<ArchitectureId>,
    ) -> bool {
        let filters = self.filters(version).with_architecture(architecture);
        self.resolve_feature(id, &filters).0.is_available()
    }

    /// # Errors
    /// Returns [`FeatureSupportError::InvalidIdentifier`] for an unknown architecture name.
    pub fn is_architecture_supported(
        &self,
        architecture: &str,
        version: &str,
    ) -> Result<bool, FeatureSupportError> {
        let id = parse_architecture(architecture)?;
        Ok(self.resolve_architecture(id, version) == SupportLevel::Supported)
    }

    /// Whether a platform can host a cluster at `version`.
    ///
    /// `external` paired with the `oci` name selects the OCI integration.
    ///
    /// # Errors
    /// Returns [`FeatureSupportError::InvalidIdentifier`] for an unknown platform name.
    pub fn is_platform_supported(
        &self,
        platform: &str,
        external_platform_name: Option<&str>,
        version: &str,
        architecture: Option<ArchitectureId>,
    ) -> Result<bool, FeatureSupportError> {
        let id = match parse_platform(platform)? {
            PlatformType::Baremetal => FeatureId::BaremetalPlatform,
            PlatformType::None => FeatureId::NonePlatform,
            PlatformType::Nutanix => FeatureId::NutanixIntegration,
            PlatformType::Vsphere => FeatureId::VsphereIntegration,
            PlatformType::External if external_platform_name == Some(OCI_PLATFORM_NAME) => {
                FeatureId::ExternalPlatformOci
            }
            PlatformType::External => FeatureId::ExternalPlatform,
        };

        Ok(self.is_feature_available(id, version, architecture))
    }
}

/// # Errors
/// Returns [`FeatureSupportError::InvalidIdentifier`] for an unknown feature name.
pub fn parse_feature(raw: &str) -> Result<FeatureId, FeatureSupportError> {
    raw.trim()
        .parse()
        .map_err(|_| FeatureSupportError::InvalidIdentifier { kind: "feature", value: raw.to_owned() })
}

/// Accepts installer spellings, including `aarch64`.
///
/// # Errors
/// Returns [`FeatureSupportError::InvalidIdentifier`] for an unknown architecture name.
pub fn parse_architecture(raw: &str) -> Result<ArchitectureId, FeatureSupportError> {
    raw.trim().parse().map_err(|_| FeatureSupportError::InvalidIdentifier {
        kind: "cpu architecture",
        value: raw.to_owned(),
    })
}

/// # Errors
/// Returns [`FeatureSupportError::InvalidIdentifier`] for an unknown platform name.
pub fn parse_platform(raw: &str) -> Result<PlatformType, FeatureSupportError> {
    raw.trim().parse().map_err(|_| FeatureSupportError::InvalidIdentifier {
        kind: "platform type",
        value: raw.to_owned(),
    })
}
