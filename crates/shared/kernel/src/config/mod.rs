use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Error raised while assembling configuration sources.
#[capgate_derive::capgate_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Config error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// File extensions accepted by [`load_config`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["toml", "json", "yaml", "yml"];

/// Prefix of environment overrides, e.g. `CAPGATE__LOGGER__LEVEL=debug`.
pub const ENV_PREFIX: &str = "CAPGATE";

/// Loads layered configuration into `T`.
///
/// 1. **File** (optional): TOML, JSON, or YAML, picked by extension. A given path must exist.
/// 2. **Environment**: variables prefixed with `CAPGATE__`; nested keys use `__`
///    (`CAPGATE__FEATURES__AMD_GPU_SUPPORTED_OPENSHIFT_VERSIONS=4.16,4.17`). Values
///    containing commas become lists.
///
/// Without a file, `T` is built from its serde defaults plus the environment.
///
/// # Errors
/// * [`ConfigError::Internal`] if the file extension is not one of [`SUPPORTED_EXTENSIONS`].
/// * [`ConfigError::Config`] if the file is missing or malformed, or the merged values
///   do not fit `T`.
///
/// # Example
/// ```rust
/// use capgate_kernel::config::load_config;
/// use capgate_kernel::domain::config::Config;
///
/// let cfg: Config = load_config(None::<&str>).unwrap_or_default();
/// assert_eq!(cfg.logger.level, "info");
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = &path {
        let path: &Path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        if !SUPPORTED_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str()) {
            return Err(format!("unsupported config format '{}'", path.display()).into());
        }
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("features.amd_gpu_supported_openshift_versions")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
