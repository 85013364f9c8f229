use capgate_domain::ids::{ArchitectureId, FeatureId};
use std::borrow::Cow;

/// Errors surfaced by the capability engine.
///
/// The conflict variants render the messages API consumers already match on,
/// so their wording is part of the contract.
#[capgate_derive::capgate_error]
pub enum FeatureSupportError {
    /// Unknown feature, architecture, or platform string.
    #[error("invalid {kind} '{value}'")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error(
        "cannot use {architecture} architecture because it's not compatible on version {version} of OpenShift"
    )]
    IncompatibleArchitecture { architecture: ArchitectureId, version: String },

    #[error(
        "cannot use {} because it's not compatible with {} on version {version} of OpenShift",
        .feature.display_name(),
        .other.display_name()
    )]
    IncompatibleFeatures { feature: FeatureId, other: FeatureId, version: String },

    #[error(
        "cannot use {} because it's not compatible with the {architecture} architecture on version {version} of OpenShift",
        .feature.display_name()
    )]
    FeatureArchitectureConflict { feature: FeatureId, architecture: ArchitectureId, version: String },

    #[error("Openshift version {version} is not supported for OpenShiftSDN NetworkType")]
    UnsupportedNetworkType { version: String },

    #[error("Internal feature support error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
