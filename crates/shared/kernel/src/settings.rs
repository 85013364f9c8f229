//! Process-wide add-on settings.
//!
//! Capability rules read these through [`with_feature_support`]; the lock is held only
//! for the duration of the closure. Binaries call [`install`] once after loading their
//! configuration. If nothing is installed, the defaults apply.

use capgate_domain::config::FeatureSupportConfig;
use parking_lot::Mutex;
use std::sync::OnceLock;
use tracing::debug;

static FEATURE_SUPPORT: OnceLock<Mutex<FeatureSupportConfig>> = OnceLock::new();

fn slot() -> &'static Mutex<FeatureSupportConfig> {
    FEATURE_SUPPORT.get_or_init(|| Mutex::new(FeatureSupportConfig::default()))
}

/// Replaces the active feature-support settings.
pub fn install(config: FeatureSupportConfig) {
    debug!(
        amd_gpu_versions = ?config.amd_gpu_supported_openshift_versions,
        "Installing feature support settings"
    );
    *slot().lock() = config;
}

/// Runs `read` against the active settings under the lock.
pub fn with_feature_support<R>(read: impl FnOnce(&FeatureSupportConfig) -> R) -> R {
    let guard = slot().lock();
    read(&guard)
}

/// Restores the defaults.
pub fn reset() {
    install(FeatureSupportConfig::default());
}
