//! Kernel services shared by the engine and the binaries.
//! Keep this crate lightweight: configuration loading, release version comparison,
//! and the process-wide add-on settings.
//!
//! ## Version comparison
//! ```rust
//! use capgate_kernel::version::{BaseVersion, Release};
//!
//! let release = Release::new("4.13.2", &BaseVersion);
//! assert!(release.reaches("4.13"));
//! assert!(release.below("4.14"));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use capgate_kernel::config::load_config;
//! let cfg: capgate_kernel::domain::config::Config = load_config(Some("capgate.toml")).unwrap();
//! ```

pub mod config;
pub mod settings;
pub mod version;

pub use capgate_domain as domain;
