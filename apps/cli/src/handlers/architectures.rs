use capgate::featuresupport::FeatureSupport;
use anyhow::Result;

/// Prints the support level of every CPU architecture on `version`.
///
/// # Errors
/// Returns an error if JSON encoding fails.
pub fn list_architectures(engine: &FeatureSupport, version: &str, json: bool) -> Result<()> {
    let table = engine.list_architectures(version);

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!("\nArchitectures for OpenShift {version}:\n");
    println!("{:<10} {:<24} {}", "Arch", "Id", "Support");
    println!("{:-<50}", "");
    for (arch, level) in &table {
        println!("{:<10} {:<24} {}", arch, arch.support_level_id(), level);
    }
    println!();
    Ok(())
}
