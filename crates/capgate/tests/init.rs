use capgate::domain::config::Config;
use capgate::domain::ids::FeatureId;
use capgate::domain::support::{IncompatibilityReason, SupportLevel};
use capgate::kernel::settings;

#[test]
fn init_installs_feature_settings() {
    let mut config = Config::default();
    config.features.amd_gpu_supported_openshift_versions = vec!["4.17".to_owned()];

    let engine = capgate::init(&config);
    assert!(settings::with_feature_support(|cfg| cfg.amd_gpu_supported_openshift_versions == ["4.17"]));

    let at = |version: &str| engine.resolve_feature(FeatureId::AmdGpu, &engine.filters(version));
    assert_eq!(at("4.17").0, SupportLevel::DevPreview);
    assert_eq!(at("4.16"), (SupportLevel::Unavailable, IncompatibilityReason::OpenshiftVersion));

    settings::reset();
}
