use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by binaries and the engine.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConfigInner {
    pub logger: LoggerConfig,
    pub features: FeatureSupportConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(flatten, default)]
    inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Config {
    fn deref_mut(&mut self) -> &mut ConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: String,
    pub console: bool,
    pub path: Option<PathBuf>,
    pub json: bool,
}

/// Knobs consulted by individual capability rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeatureSupportConfig {
    /// Releases on which the AMD GPU add-on may be offered; `*` matches every release.
    pub amd_gpu_supported_openshift_versions: Vec<String>,
}

// --- Default ---

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, path: None, json: false }
    }
}

impl Default for FeatureSupportConfig {
    fn default() -> Self {
        Self { amd_gpu_supported_openshift_versions: vec!["*".to_owned()] }
    }
}
