use capgate_domain::ids::ArchitectureId;
use capgate_domain::platform::{OCI_PLATFORM_NAME, PlatformType};
use capgate_kernel::version::Release;

/// Per-query context for support-level resolution.
///
/// Built once per request and passed by reference to every rule:
///
/// ```rust
/// use capgate_domain::ids::ArchitectureId;
/// use capgate_domain::platform::PlatformType;
/// use capgate_featuresupport::Filters;
/// use capgate_kernel::version::{BaseVersion, Release};
///
/// let filters = Filters::new(Release::new("4.14", &BaseVersion))
///     .with_architecture(ArchitectureId::Arm64)
///     .with_platform(PlatformType::External)
///     .with_external_platform_name("oci");
/// assert!(filters.is_external_oci());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Filters<'a> {
    pub release: Release<'a>,
    pub architecture: Option<ArchitectureId>,
    pub platform: Option<PlatformType>,
    /// Only meaningful together with [`PlatformType::External`].
    pub external_platform_name: Option<&'a str>,
}

impl<'a> Filters<'a> {
    #[must_use]
    pub const fn new(release: Release<'a>) -> Self {
        Self { release, architecture: None, platform: None, external_platform_name: None }
    }

    #[must_use]
    pub fn with_architecture(mut self, architecture: impl Into<Option<ArchitectureId>>) -> Self {
        self.architecture = architecture.into();
        self
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<Option<PlatformType>>) -> Self {
        self.platform = platform.into();
        self
    }

    #[must_use]
    pub fn with_external_platform_name(mut self, name: impl Into<Option<&'a str>>) -> Self {
        self.external_platform_name = name.into();
        self
    }

    /// The requested platform is one of `platforms`.
    #[must_use]
    pub fn platform_in(&self, platforms: &[PlatformType]) -> bool {
        self.platform.is_some_and(|platform| platforms.contains(&platform))
    }

    #[must_use]
    pub fn architecture_is(&self, architecture: ArchitectureId) -> bool {
        self.architecture == Some(architecture)
    }

    /// External platform qualified as Oracle Cloud Infrastructure.
    #[must_use]
    pub fn is_external_oci(&self) -> bool {
        self.platform == Some(PlatformType::External)
            && self.external_platform_name == Some(OCI_PLATFORM_NAME)
    }
}
