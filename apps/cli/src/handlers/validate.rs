use crate::models::snapshot::Snapshot;
use anyhow::{Context, Result};
use capgate::featuresupport::{FeatureSupport, parse_architecture};
use std::fs;
use std::path::Path;
use tracing::info;

/// Validates the snapshot document at `path`.
///
/// Runs the pairwise and architecture checks first, then the per-feature ones.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, the architecture is
/// unknown, or the configuration is incompatible.
pub fn validate_snapshot(engine: &FeatureSupport, path: &Path, arch: Option<&str>) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
    let arch = arch.map(parse_architecture).transpose()?;

    let cluster = snapshot.cluster.as_ref();
    let cluster_delta = snapshot.cluster_delta.as_ref();
    engine.validate(
        arch,
        cluster,
        snapshot.infra_env.as_ref(),
        cluster_delta,
        snapshot.infra_env_delta.as_ref(),
    )?;
    engine.validate_active_features(cluster, cluster_delta)?;

    let Some(cluster) = cluster else {
        println!("✅ No cluster in snapshot, nothing to validate");
        return Ok(());
    };

    let state = engine
        .active_state()
        .with_cluster(cluster)
        .with_infra_env(snapshot.infra_env.as_ref())
        .with_cluster_delta(cluster_delta)
        .with_infra_env_delta(snapshot.infra_env_delta.as_ref());
    let active = engine.active_features(&state);
    info!(count = active.len(), version = %cluster.openshift_version, "Snapshot is compatible");

    println!("✅ Compatible on OpenShift {}", cluster.openshift_version);
    for id in active {
        println!("  - {} ({id})", id.display_name());
    }
    Ok(())
}
