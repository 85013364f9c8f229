use capgate_domain::ids::ArchitectureId;
use capgate_domain::support::SupportLevel;
use capgate_kernel::version::Release;
use std::fmt::Debug;

/// Version-gated rule for a CPU architecture.
///
/// Architectures carry no incompatibility graph; features name the
/// architectures they cannot run on.
pub trait SupportLevelArchitecture: Debug + Send + Sync {
    fn id(&self) -> ArchitectureId;

    fn support_level(&self, release: &Release<'_>) -> SupportLevel;
}

/// `Supported` when the release passed the gate, `Unavailable` otherwise.
const fn gated(available: bool) -> SupportLevel {
    if available { SupportLevel::Supported } else { SupportLevel::Unavailable }
}

#[derive(Debug)]
pub(crate) struct X86_64Architecture;

impl SupportLevelArchitecture for X86_64Architecture {
    fn id(&self) -> ArchitectureId {
        ArchitectureId::X86_64
    }

    fn support_level(&self, _release: &Release<'_>) -> SupportLevel {
        SupportLevel::Supported
    }
}

#[derive(Debug)]
pub(crate) struct Arm64Architecture;

impl SupportLevelArchitecture for Arm64Architecture {
    fn id(&self) -> ArchitectureId {
        ArchitectureId::Arm64
    }

    fn support_level(&self, release: &Release<'_>) -> SupportLevel {
        gated(!release.below("4.10"))
    }
}

#[derive(Debug)]
pub(crate) struct S390xArchitecture;

impl SupportLevelArchitecture for S390xArchitecture {
    fn id(&self) -> ArchitectureId {
        ArchitectureId::S390x
    }

    fn support_level(&self, release: &Release<'_>) -> SupportLevel {
        gated(!release.below("4.12"))
    }
}

#[derive(Debug)]
pub(crate) struct Ppc64leArchitecture;

impl SupportLevelArchitecture for Ppc64leArchitecture {
    fn id(&self) -> ArchitectureId {
        ArchitectureId::Ppc64le
    }

    fn support_level(&self, release: &Release<'_>) -> SupportLevel {
        gated(!release.below("4.12"))
    }
}

/// Multi-architecture release payload.
#[derive(Debug)]
pub(crate) struct MultiArchitecture;

impl SupportLevelArchitecture for MultiArchitecture {
    fn id(&self) -> ArchitectureId {
        ArchitectureId::Multi
    }

    fn support_level(&self, release: &Release<'_>) -> SupportLevel {
        if release.below("4.11") {
            SupportLevel::Unavailable
        } else if release.below("4.14") {
            SupportLevel::TechPreview
        } else {
            SupportLevel::Supported
        }
    }
}
