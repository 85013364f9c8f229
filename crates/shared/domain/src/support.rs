use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Maturity tier of a capability or architecture for a given release.
///
/// [`SupportLevel::Excluded`] is not a tier: it tells listings to omit the entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SupportLevel {
    Supported,
    Unsupported,
    TechPreview,
    DevPreview,
    Unavailable,
    Excluded,
}

impl SupportLevel {
    /// Usable at all: generally available or one of the preview tiers.
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Supported | Self::TechPreview | Self::DevPreview)
    }
}

/// Axis that made a capability unavailable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum IncompatibilityReason {
    CpuArchitecture,
    OpenshiftVersion,
    Platform,
    #[default]
    None,
}

/// Whether a capability is exercised by a cluster's effective configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ActiveLevel {
    Active,
    NotActive,
    /// No on/off toggle exists; never part of a conflict check.
    NotRelevant,
}
