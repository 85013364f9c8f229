#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn capgate() -> Command {
    let mut cmd = Command::cargo_bin("capgate").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_snapshot(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("snapshot.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn features_table_lists_display_names() {
    capgate()
        .args(["features", "--version", "4.14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Features for OpenShift 4.14"))
        .stdout(predicate::str::contains("VIP Automatic Allocation"))
        .stdout(predicate::str::contains("dev-preview"));
}

#[test]
fn features_json_is_machine_readable() {
    let output = capgate()
        .args(["features", "--version", "4.16", "--platform", "baremetal", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = listing.as_array().unwrap();
    assert_eq!(entries.len(), 38);
    assert!(entries.iter().all(|entry| entry["id"] != "BAREMETAL_PLATFORM"));
}

#[test]
fn unknown_platform_fails() {
    capgate()
        .args(["features", "--version", "4.14", "--platform", "openstack"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid platform type 'openstack'"));
}

#[test]
fn architectures_json() {
    let output = capgate().args(["architectures", "--version", "4.13", "--json"]).output().unwrap();
    assert!(output.status.success());

    let table: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(table["multi"], "tech-preview");
    assert_eq!(table["s390x"], "supported");
}

#[test]
fn validate_accepts_compatible_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(
        &dir,
        r#"{
            "cluster": {
                "openshift_version": "4.13",
                "user_managed_networking": true,
                "monitored_operators": ["lvm"]
            },
            "infra_env": { "image_type": "full-iso" }
        }"#,
    );

    capgate()
        .args(["validate", "--arch", "x86_64", "--snapshot"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Compatible on OpenShift 4.13"))
        .stdout(predicate::str::contains("Logical Volume Management"));
}

#[test]
fn validate_reports_conflicts() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(
        &dir,
        r#"{
            "cluster": { "openshift_version": "4.13", "user_managed_networking": true },
            "infra_env": { "image_type": "full-iso" },
            "infra_env_delta": { "image_type": "minimal-iso" }
        }"#,
    );

    capgate()
        .args(["validate", "--arch", "s390x", "--snapshot"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot use Minimal ISO because it's not compatible with the s390x architecture",
        ));
}

#[test]
fn validate_rejects_sdn_on_recent_releases() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(
        &dir,
        r#"{
            "cluster": {
                "openshift_version": "4.16",
                "user_managed_networking": true,
                "network_type": "OVNKubernetes"
            },
            "cluster_delta": { "network_type": "OpenShiftSDN" }
        }"#,
    );

    capgate()
        .args(["validate", "--snapshot"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not supported for OpenShiftSDN NetworkType"));
}

#[test]
fn missing_snapshot_file_fails() {
    capgate()
        .args(["validate", "--snapshot", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read snapshot"));
}

#[test]
fn config_file_restricts_amd_gpu() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("capgate.toml");
    fs::write(
        &config,
        "[logger]\nlevel = \"warn\"\n\n[features]\namd_gpu_supported_openshift_versions = [\"4.17\"]\n",
    )
    .unwrap();

    let output = capgate()
        .arg("--config")
        .arg(&config)
        .args(["features", "--version", "4.16", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let amd = listing.as_array().unwrap().iter().find(|entry| entry["id"] == "AMD_GPU").unwrap();
    assert_eq!(amd["support_level"], "unavailable");
    assert_eq!(amd["reason"], "openshiftVersion");
}

#[test]
fn no_arguments_prints_help() {
    capgate().assert().failure().stderr(predicate::str::contains("Usage"));
}
