//! Facade crate for the capgate engine and its shared modules.
//! Re-exports domain/kernel primitives and the capability engine.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `capgate` (the `logger` feature is on by default).
//! - Call [`init`] once at startup to install the add-on settings from configuration.

pub use capgate_domain as domain;
pub use capgate_featuresupport as featuresupport;
pub use capgate_kernel as kernel;
#[cfg(feature = "logger")]
pub use capgate_logger as logger;

pub use capgate_featuresupport::{FeatureSupport, FeatureSupportError};

use capgate_domain::config::Config;

/// Installs the process-wide settings from `config` and returns a ready engine.
#[must_use]
pub fn init(config: &Config) -> FeatureSupport {
    kernel::settings::install(config.features.clone());
    FeatureSupport::default()
}
