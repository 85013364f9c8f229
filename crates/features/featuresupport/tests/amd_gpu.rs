use capgate_domain::config::FeatureSupportConfig;
use capgate_domain::support::SupportLevel;
use capgate_featuresupport::{ArchitectureId, FeatureId, FeatureSupport};
use capgate_kernel::settings;
use serial_test::serial;

fn amd_gpu(engine: &FeatureSupport, version: &str) -> SupportLevel {
    engine.resolve_feature(FeatureId::AmdGpu, &engine.filters(version)).0
}

#[test]
#[serial]
fn wildcard_offers_every_release() {
    settings::reset();
    let engine = FeatureSupport::default();
    assert_eq!(amd_gpu(&engine, "4.12"), SupportLevel::DevPreview);
    assert_eq!(amd_gpu(&engine, "4.19.3"), SupportLevel::DevPreview);
}

#[test]
#[serial]
fn installed_versions_restrict_the_offer() {
    settings::install(FeatureSupportConfig {
        amd_gpu_supported_openshift_versions: vec!["4.17".to_owned(), "4.18".to_owned()],
    });
    let engine = FeatureSupport::default();

    assert_eq!(amd_gpu(&engine, "4.17.2"), SupportLevel::DevPreview);
    assert_eq!(amd_gpu(&engine, "4.18"), SupportLevel::DevPreview);
    assert_eq!(amd_gpu(&engine, "4.16"), SupportLevel::Unavailable);
    assert_eq!(amd_gpu(&engine, "garbage"), SupportLevel::Unavailable);

    settings::reset();
}

#[test]
#[serial]
fn non_x86_is_rejected_regardless_of_settings() {
    settings::reset();
    let engine = FeatureSupport::default();
    assert!(!engine.is_feature_available(FeatureId::AmdGpu, "4.18", Some(ArchitectureId::Arm64)));
    assert!(engine.is_feature_available(FeatureId::AmdGpu, "4.18", Some(ArchitectureId::X86_64)));
}
