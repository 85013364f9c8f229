use capgate::featuresupport::{FeatureEntry, FeatureSupport, parse_architecture, parse_platform};
use anyhow::Result;

/// Prints the feature listing for a release as a table or JSON.
///
/// # Errors
/// Returns an error for an unknown architecture or platform name, or if JSON encoding fails.
pub fn list_features(
    engine: &FeatureSupport,
    version: &str,
    arch: Option<&str>,
    platform: Option<&str>,
    external_name: Option<&str>,
    json: bool,
) -> Result<()> {
    let arch = arch.map(parse_architecture).transpose()?;
    let platform = platform.map(parse_platform).transpose()?;
    let listing = engine.list_features(version, arch, platform, external_name);

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        render_feature_table(version, &listing);
    }
    Ok(())
}

fn render_feature_table(version: &str, listing: &[FeatureEntry]) {
    println!("\nFeatures for OpenShift {version}:\n");
    println!("{:<48} {:<14} {:<18} {}", "Feature", "Support", "Reason", "Incompatible with");
    println!("{:-<110}", "");

    for entry in listing {
        let reason = entry.reason.map(|r| r.to_string()).unwrap_or_default();
        let incompatible =
            entry.incompatibilities.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        println!("{:<48} {:<14} {:<18} {}", entry.name, entry.support_level, reason, incompatible);
    }
    println!();
}
