use capgate_domain::cluster::{ClusterDelta, ClusterSnapshot, InfraEnvDelta, InfraEnvSnapshot};
use capgate_domain::field::Field;
use capgate_domain::platform::{ImageType, PlatformType};
use capgate_featuresupport::{ArchitectureId, FeatureId, FeatureSupport, FeatureSupportError};

fn cluster(version: &str) -> ClusterSnapshot {
    ClusterSnapshot {
        openshift_version: version.to_owned(),
        user_managed_networking: Some(true),
        ..ClusterSnapshot::default()
    }
}

fn operators(names: &[&str]) -> ClusterDelta {
    ClusterDelta {
        olm_operators: Field::Value(names.iter().map(|&name| name.to_owned()).collect()),
        ..ClusterDelta::default()
    }
}

#[test]
fn single_node_is_rejected_on_ppc64le_before_4_13() {
    let engine = FeatureSupport::default();
    let sno = ClusterSnapshot { control_plane_count: Some(1), ..cluster("4.12") };

    let err = engine.validate(Some(ArchitectureId::Ppc64le), Some(&sno), None, None, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot use Single Node OpenShift because it's not compatible with the ppc64le architecture on version 4.12 of OpenShift"
    );
    assert_eq!(err.kind(), "FeatureArchitectureConflict");

    let newer = ClusterSnapshot { openshift_version: "4.13".to_owned(), ..sno };
    assert!(engine.validate(Some(ArchitectureId::Ppc64le), Some(&newer), None, None, None).is_ok());
}

#[test]
fn minimal_iso_delta_is_rejected_on_s390x() {
    let engine = FeatureSupport::default();
    let cluster = cluster("4.13");
    let full = InfraEnvSnapshot { image_type: Some(ImageType::FullIso) };

    assert!(engine.validate(Some(ArchitectureId::S390x), Some(&cluster), Some(&full), None, None).is_ok());

    let minimal = InfraEnvDelta { image_type: Field::Value(ImageType::MinimalIso) };
    let err = engine
        .validate(Some(ArchitectureId::S390x), Some(&cluster), Some(&full), None, Some(&minimal))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot use Minimal ISO because it's not compatible with the s390x architecture on version 4.13 of OpenShift"
    );
}

#[test]
fn architecture_too_new_for_release() {
    let engine = FeatureSupport::default();
    let cluster = ClusterSnapshot { platform: Some(PlatformType::Nutanix), ..cluster("4.8") };

    let err = engine.validate(Some(ArchitectureId::Arm64), Some(&cluster), None, None, None).unwrap_err();
    assert!(matches!(err, FeatureSupportError::IncompatibleArchitecture { .. }));
    assert_eq!(
        err.to_string(),
        "cannot use arm64 architecture because it's not compatible on version 4.8 of OpenShift"
    );
}

#[test]
fn cluster_architecture_is_used_when_none_is_given() {
    let engine = FeatureSupport::default();
    let cluster = ClusterSnapshot { cpu_architecture: Some("aarch64".to_owned()), ..cluster("4.9") };

    let err = engine.validate(None, Some(&cluster), None, None, None).unwrap_err();
    assert!(err.to_string().starts_with("cannot use arm64 architecture"));
}

#[test]
fn arm64_baremetal_with_managed_networking_from_4_11() {
    let engine = FeatureSupport::default();
    let cluster = ClusterSnapshot {
        platform: Some(PlatformType::Baremetal),
        user_managed_networking: Some(false),
        ..cluster("4.11")
    };
    assert!(engine.validate(Some(ArchitectureId::Arm64), Some(&cluster), None, None, None).is_ok());

    let older = ClusterSnapshot { openshift_version: "4.10".to_owned(), ..cluster };
    let err = engine.validate(Some(ArchitectureId::Arm64), Some(&older), None, None, None).unwrap_err();
    assert!(matches!(
        err,
        FeatureSupportError::FeatureArchitectureConflict { feature: FeatureId::ClusterManagedNetworking, .. }
    ));
}

#[test]
fn managed_networking_on_ppc64le_needs_user_managed_networking() {
    let engine = FeatureSupport::default();
    let managed = ClusterSnapshot { user_managed_networking: Some(false), ..cluster("4.12") };

    let err = engine.validate(Some(ArchitectureId::Ppc64le), Some(&managed), None, None, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot use Cluster Managed Networking because it's not compatible with the ppc64le architecture on version 4.12 of OpenShift"
    );

    let delta = ClusterDelta { user_managed_networking: Field::Value(true), ..ClusterDelta::default() };
    assert!(
        engine
            .validate(Some(ArchitectureId::Ppc64le), Some(&managed), None, Some(&delta), None)
            .is_ok()
    );
}

#[test]
fn virtualization_conflicts_with_virtualized_platforms() {
    let engine = FeatureSupport::default();
    let delta = operators(&["cnv"]);

    for platform in [PlatformType::Nutanix, PlatformType::Vsphere] {
        let cluster = ClusterSnapshot {
            platform: Some(platform),
            user_managed_networking: Some(false),
            api_vips: vec!["192.168.10.10".to_owned()],
            ..cluster("4.14")
        };
        let err = engine.validate(None, Some(&cluster), None, Some(&delta), None).unwrap_err();
        let FeatureSupportError::IncompatibleFeatures { feature, other, version } = &err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(*other, FeatureId::Cnv, "{platform}");
        assert!(matches!(feature, FeatureId::NutanixIntegration | FeatureId::VsphereIntegration));
        assert_eq!(version, "4.14");
        assert!(err.to_string().contains("OpenShift Virtualization"));

        assert!(engine.validate(None, Some(&cluster), None, None, None).is_ok());
    }
}

#[test]
fn one_sided_declarations_are_checked_both_ways() {
    let engine = FeatureSupport::default();

    // Only the arbiter topology declares the conflict, and it comes first.
    let arbiter = ClusterSnapshot {
        control_plane_count: Some(2),
        arbiter_count: 1,
        platform: Some(PlatformType::None),
        ..cluster("4.19")
    };
    let err = engine.validate(None, Some(&arbiter), None, None, None).unwrap_err();
    assert!(matches!(
        err,
        FeatureSupportError::IncompatibleFeatures {
            feature: FeatureId::Tna,
            other: FeatureId::NonePlatform,
            ..
        }
    ));

    // Only sandboxed containers declare the conflict, and they come last.
    let vsphere = ClusterSnapshot { platform: Some(PlatformType::Vsphere), ..cluster("4.16") };
    let err = engine.validate(None, Some(&vsphere), None, Some(&operators(&["osc"])), None).unwrap_err();
    assert!(matches!(
        err,
        FeatureSupportError::IncompatibleFeatures {
            feature: FeatureId::VsphereIntegration,
            other: FeatureId::Osc,
            ..
        }
    ));
}

#[test]
fn empty_operator_list_disables_every_add_on() {
    let engine = FeatureSupport::default();
    let cluster = ClusterSnapshot {
        platform: Some(PlatformType::Nutanix),
        monitored_operators: vec!["cnv".to_owned(), "lvm".to_owned()],
        ..cluster("4.14")
    };
    let cluster = ClusterSnapshot { user_managed_networking: Some(false), ..cluster };

    assert!(engine.validate(None, Some(&cluster), None, None, None).is_err());
    assert!(engine.validate(None, Some(&cluster), None, Some(&operators(&[])), None).is_ok());

    let disable_all = operators(&[]);
    let state = engine.active_state().with_cluster(&cluster).with_cluster_delta(&disable_all);
    let active = engine.active_features(&state);
    assert!(!active.contains(&FeatureId::Cnv));
    assert!(!active.contains(&FeatureId::Lvm));
    assert!(active.contains(&FeatureId::NutanixIntegration));
}

#[test]
fn platform_change_in_delta_drives_activation() {
    let engine = FeatureSupport::default();
    let cluster = ClusterSnapshot {
        platform: Some(PlatformType::Baremetal),
        user_managed_networking: Some(false),
        monitored_operators: vec!["lvm".to_owned()],
        ..cluster("4.16")
    };
    assert!(engine.validate(None, Some(&cluster), None, None, None).is_ok());

    let to_nutanix = ClusterDelta { platform: Field::Value(PlatformType::Nutanix), ..ClusterDelta::default() };
    let err = engine.validate(None, Some(&cluster), None, Some(&to_nutanix), None).unwrap_err();
    assert!(matches!(err, FeatureSupportError::IncompatibleFeatures { .. }));
}

#[test]
fn multi_architecture_payload_is_strictly_gated() {
    let engine = FeatureSupport::default();
    let cluster = cluster("4.13");

    let err = engine.validate(Some(ArchitectureId::Multi), Some(&cluster), None, None, None).unwrap_err();
    assert!(matches!(err, FeatureSupportError::IncompatibleArchitecture { .. }));

    let ga = ClusterSnapshot { openshift_version: "4.14".to_owned(), ..cluster };
    assert!(engine.validate(Some(ArchitectureId::Multi), Some(&ga), None, None, None).is_ok());
}

#[test]
fn unknown_release_skips_the_architecture_gate() {
    let engine = FeatureSupport::default();
    let cluster = cluster("");
    assert!(engine.validate(Some(ArchitectureId::S390x), Some(&cluster), None, None, None).is_ok());
}

#[test]
fn sno_conflicts_with_odf_below_4_14() {
    let engine = FeatureSupport::default();
    let sno = ClusterSnapshot {
        control_plane_count: Some(1),
        monitored_operators: vec!["odf".to_owned()],
        ..cluster("4.13.0")
    };

    let err = engine.validate(None, Some(&sno), None, None, None).unwrap_err();
    assert!(
        matches!(
            err,
            FeatureSupportError::IncompatibleFeatures { feature: FeatureId::Sno, other: FeatureId::Odf, ref version }
                if version == "4.13.0"
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn sno_and_odf_stay_incompatible_on_newer_releases() {
    let engine = FeatureSupport::default();
    let sno = ClusterSnapshot {
        control_plane_count: Some(1),
        monitored_operators: vec!["odf".to_owned()],
        ..cluster("4.14")
    };

    let err = engine.validate(None, Some(&sno), None, None, None).unwrap_err();
    assert!(matches!(
        err,
        FeatureSupportError::IncompatibleFeatures { feature: FeatureId::Sno, other: FeatureId::Odf, .. }
    ));

    let lvm_instead = operators(&["lvm"]);
    assert!(engine.validate(None, Some(&sno), None, Some(&lvm_instead), None).is_ok());
}

#[test]
fn unknown_cluster_architecture_is_rejected() {
    let engine = FeatureSupport::default();
    let cluster = ClusterSnapshot {
        cpu_architecture: Some("riscv64".to_owned()),
        control_plane_count: Some(1),
        ..cluster("4.12")
    };

    let err = engine.validate(None, Some(&cluster), None, None, None).unwrap_err();
    assert_eq!(err.kind(), "InvalidIdentifier");
    assert_eq!(err.to_string(), engine.is_architecture_supported("riscv64", "4.12").unwrap_err().to_string());

    // An explicit architecture takes precedence over the stored one.
    assert!(engine.validate(Some(ArchitectureId::X86_64), Some(&cluster), None, None, None).is_ok());
}

#[test]
fn vip_auto_allocation_tracks_the_dhcp_delta() {
    let engine = FeatureSupport::default();
    let stored_off = ClusterSnapshot { vip_dhcp_allocation: Some(false), ..cluster("4.14") };
    let stored_on = ClusterSnapshot { vip_dhcp_allocation: Some(true), ..cluster("4.14") };
    let active = |cluster: &ClusterSnapshot, delta: &ClusterDelta| {
        let state = engine.active_state().with_cluster(cluster).with_cluster_delta(delta);
        engine.active_features(&state).contains(&FeatureId::VipAutoAlloc)
    };

    let enable = ClusterDelta { vip_dhcp_allocation: Field::Value(true), ..ClusterDelta::default() };
    let disable = ClusterDelta { vip_dhcp_allocation: Field::Value(false), ..ClusterDelta::default() };
    let clear = ClusterDelta { vip_dhcp_allocation: Field::Cleared, ..ClusterDelta::default() };

    assert!(active(&stored_off, &enable));
    assert!(!active(&stored_off, &ClusterDelta::default()));
    assert!(!active(&stored_on, &disable));
    assert!(!active(&stored_on, &clear));
    assert!(active(&stored_on, &ClusterDelta::default()));
}
