use capgate_domain::platform::PlatformType;
use capgate_domain::support::SupportLevel;
use capgate_featuresupport::registry;
use capgate_featuresupport::{
    ArchitectureId, FeatureId, FeatureSupport, SupportLevelArchitecture, SupportLevelFeature,
};
use proptest::prelude::*;
use proptest::sample::select;
use strum::IntoEnumIterator;

fn feature() -> impl Strategy<Value = FeatureId> {
    select(FeatureId::iter().collect::<Vec<_>>())
}

fn architecture() -> impl Strategy<Value = ArchitectureId> {
    select(ArchitectureId::iter().collect::<Vec<_>>())
}

fn platform() -> impl Strategy<Value = Option<PlatformType>> {
    proptest::option::of(select(PlatformType::iter().collect::<Vec<_>>()))
}

proptest! {
    #[test]
    fn architecture_support_never_regresses(id in architecture(), minor in 6u64..20, bump in 1u64..5) {
        let engine = FeatureSupport::default();
        let before = engine.resolve_architecture(id, &format!("4.{minor}"));
        let after = engine.resolve_architecture(id, &format!("4.{}", minor + bump));
        if before == SupportLevel::Supported {
            prop_assert_eq!(after, SupportLevel::Supported);
        }
    }

    #[test]
    fn feature_support_never_regresses(
        id in feature(),
        platform in platform(),
        minor in 6u64..25,
        bump in 1u64..6,
    ) {
        // Both are withdrawn on purpose in later releases.
        prop_assume!(!matches!(id, FeatureId::SdnNetworkType | FeatureId::VipAutoAlloc));

        let engine = FeatureSupport::default();
        let at = |version: &str| engine.resolve_feature(id, &engine.filters(version).with_platform(platform)).0;
        let before = at(&format!("4.{minor}"));
        let after = at(&format!("4.{}", (minor + bump).min(25)));
        if before == SupportLevel::Supported {
            prop_assert_eq!(after, SupportLevel::Supported);
        }
    }

    #[test]
    fn resolution_is_deterministic(
        id in feature(),
        arch in proptest::option::of(architecture()),
        platform in platform(),
        minor in 6u64..20,
    ) {
        let engine = FeatureSupport::default();
        let version = format!("4.{minor}.0");
        let filters = engine.filters(&version).with_architecture(arch).with_platform(platform);
        prop_assert_eq!(engine.resolve_feature(id, &filters), engine.resolve_feature(id, &filters));
    }

    #[test]
    fn platform_scoped_features_are_excluded_once_a_platform_is_chosen(
        id in feature(),
        chosen in select(PlatformType::iter().collect::<Vec<_>>()),
        minor in 6u64..20,
    ) {
        let engine = FeatureSupport::default();
        let version = format!("4.{minor}");
        let (level, _) = engine.resolve_feature(id, &engine.filters(&version).with_platform(chosen));
        if id.is_platform_scoped() {
            prop_assert_eq!(level, SupportLevel::Excluded);
        } else if id != FeatureId::PlatformManagedNetworking {
            prop_assert_ne!(level, SupportLevel::Excluded);
        }
    }

    #[test]
    fn listed_architecture_conflicts_make_features_unavailable(
        id in feature(),
        arch in architecture(),
        minor in 6u64..20,
    ) {
        let engine = FeatureSupport::default();
        let version = format!("4.{minor}");
        let conflicts = registry::feature(id).incompatible_architectures(&engine.release(&version));
        if conflicts.contains(&arch) {
            prop_assert!(!engine.is_feature_available(id, &version, Some(arch)));
        }
    }

    #[test]
    fn arbitrary_versions_never_panic(raw in "\\PC{0,12}", id in feature(), arch in architecture()) {
        let engine = FeatureSupport::default();
        let _ = engine.is_feature_supported(id, &raw, Some(arch));
        let _ = engine.list_features(&raw, Some(arch), None, None);
        let _ = engine.list_architectures(&raw);
    }
}

#[test]
fn registry_covers_every_identity() {
    for id in FeatureId::iter() {
        assert_eq!(registry::feature(id).id(), id);
    }
    for id in ArchitectureId::iter() {
        assert_eq!(registry::architecture(id).id(), id);
    }
}
