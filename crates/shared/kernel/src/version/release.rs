use super::{VersionComparator, VersionError};

/// A release version bound to the comparator that interprets it.
///
/// The boolean helpers fold comparison failures into the answer that keeps a
/// capability *less* available; the `try_*` methods expose the raw result for
/// the few rules that need a different fallback.
#[derive(Debug, Clone, Copy)]
pub struct Release<'a> {
    version: &'a str,
    comparator: &'a dyn VersionComparator,
}

impl<'a> Release<'a> {
    pub const fn new(version: &'a str, comparator: &'a dyn VersionComparator) -> Self {
        Self { version, comparator }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.version
    }

    /// # Errors
    /// Returns [`VersionError`] if either side cannot be parsed.
    pub fn try_below(&self, base: &str) -> Result<bool, VersionError> {
        self.comparator.less_than(base, self.version)
    }

    /// # Errors
    /// Returns [`VersionError`] if either side cannot be parsed.
    pub fn try_reaches(&self, base: &str) -> Result<bool, VersionError> {
        self.comparator.greater_or_equal(base, self.version)
    }

    /// # Errors
    /// Returns [`VersionError`] if either side cannot be parsed.
    pub fn try_matches(&self, base: &str) -> Result<bool, VersionError> {
        self.comparator.equal(base, self.version)
    }

    /// Older than `base`, or not comparable.
    #[must_use]
    pub fn below(&self, base: &str) -> bool {
        !matches!(self.try_below(base), Ok(false))
    }

    /// At least `base`, and comparable.
    #[must_use]
    pub fn reaches(&self, base: &str) -> bool {
        matches!(self.try_reaches(base), Ok(true))
    }

    /// Same base version as `base`, and comparable.
    #[must_use]
    pub fn matches(&self, base: &str) -> bool {
        matches!(self.try_matches(base), Ok(true))
    }

    /// Older than `target`, treating an empty version as "older than anything".
    ///
    /// Used by rules for capabilities that are being retired: an unparsable,
    /// non-empty version is *not* older, so the retiring capability stays closed.
    #[must_use]
    pub fn predates(&self, target: &str) -> bool {
        self.version.is_empty() || matches!(self.try_below(target), Ok(true))
    }
}
