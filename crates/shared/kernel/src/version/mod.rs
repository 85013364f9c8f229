//! # Release Version Comparison
//!
//! Release versions look like `major.minor[.patch[-prerelease]]` (`4.13`, `4.14.0-rc.1`,
//! `4.15.0-0.nightly-2023-10-10`). Capability rules only care about the *base* version,
//! i.e. `major.minor`: `4.11.20` is "4.11" for every decision.
//!
//! Comparisons go through the [`VersionComparator`] trait so callers can swap the
//! policy. [`BaseVersion`] is the stock implementation built on `semver`.
//! A failed comparison returns [`VersionError`]; [`Release`] turns that into the
//! conservative answer so parse failures never escape the engine.

mod release;

pub use release::Release;

use semver::Version;
use std::borrow::Cow;
use std::fmt::Debug;

#[capgate_derive::capgate_error]
pub enum VersionError {
    #[error("Unparsable release version{}: {source}", format_context(.context))]
    Parse { source: semver::Error, context: Option<Cow<'static, str>> },

    #[error("Internal version error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Semantic comparison of release versions.
///
/// Every method reads as "`version` relative to `base`".
pub trait VersionComparator: Debug + Send + Sync {
    /// `version < base`.
    ///
    /// # Errors
    /// Returns [`VersionError`] if either side cannot be parsed.
    fn less_than(&self, base: &str, version: &str) -> Result<bool, VersionError>;

    /// `version == base`.
    ///
    /// # Errors
    /// Returns [`VersionError`] if either side cannot be parsed.
    fn equal(&self, base: &str, version: &str) -> Result<bool, VersionError>;

    /// `version >= base`.
    ///
    /// # Errors
    /// Returns [`VersionError`] if either side cannot be parsed.
    fn greater_or_equal(&self, base: &str, version: &str) -> Result<bool, VersionError> {
        self.less_than(base, version).map(|less| !less)
    }
}

/// Compares only `major.minor`; patch and prerelease are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseVersion;

impl BaseVersion {
    /// Parses a release string and truncates it to `(major, minor)`.
    ///
    /// # Errors
    /// Returns [`VersionError::Parse`] for empty or malformed input, or
    /// [`VersionError::Internal`] if the numbers overflow.
    pub fn base(raw: &str) -> Result<(u64, u64), VersionError> {
        let version = parse_release(raw)?;
        Ok((version.major, version.minor))
    }
}

impl VersionComparator for BaseVersion {
    fn less_than(&self, base: &str, version: &str) -> Result<bool, VersionError> {
        Ok(Self::base(version)? < Self::base(base)?)
    }

    fn equal(&self, base: &str, version: &str) -> Result<bool, VersionError> {
        Ok(Self::base(version)? == Self::base(base)?)
    }
}

/// Parses a release version, padding `4` / `4.13` to a full `major.minor.patch` triple.
///
/// # Errors
/// Returns [`VersionError::Parse`] if the padded string is still not valid semver.
pub fn parse_release(raw: &str) -> Result<Version, VersionError> {
    let raw = raw.trim();
    let split = raw.find(['-', '+']).unwrap_or(raw.len());
    let (core, suffix) = raw.split_at(split);

    let padded = match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => raw.to_owned(),
    };

    Version::parse(&padded).map_err(|source| VersionError::Parse {
        source,
        context: Some(format!("release '{raw}'").into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pads_short_versions() {
        assert_eq!(parse_release("4.13").unwrap(), Version::new(4, 13, 0));
        assert_eq!(parse_release("4").unwrap(), Version::new(4, 0, 0));
        assert_eq!(parse_release(" 4.11.20 ").unwrap(), Version::new(4, 11, 20));
    }

    #[test]
    fn parse_keeps_prerelease() {
        let v = parse_release("4.14-rc.1").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (4, 14, 0));
        assert_eq!(v.pre.as_str(), "rc.1");

        let nightly = parse_release("4.15.0-0.nightly-2023-10-10-121212").unwrap();
        assert_eq!(BaseVersion::base(&nightly.to_string()).unwrap(), (4, 15));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_release("").is_err());
        assert!(parse_release("four.thirteen").is_err());
        assert!(parse_release("4.x").is_err());
    }

    #[test]
    fn base_comparisons_ignore_patch_and_prerelease() {
        let cmp = BaseVersion;
        assert!(!cmp.less_than("4.11", "4.11.2").unwrap());
        assert!(cmp.less_than("4.12", "4.11.99").unwrap());
        assert!(cmp.equal("4.13", "4.13.0-rc.3").unwrap());
        assert!(cmp.greater_or_equal("4.14", "4.14.0-ec.1").unwrap());
        assert!(!cmp.greater_or_equal("4.15", "4.14.9").unwrap());
    }

    #[test]
    fn comparisons_surface_parse_errors() {
        let err = BaseVersion.less_than("4.11", "latest").unwrap_err();
        assert_eq!(err.kind(), "Parse");
        assert!(err.to_string().contains("release 'latest'"));
    }
}
