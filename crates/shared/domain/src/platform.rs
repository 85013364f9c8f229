use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// External platform name that selects Oracle Cloud Infrastructure.
pub const OCI_PLATFORM_NAME: &str = "oci";

/// Infrastructure provider hosting the cluster.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlatformType {
    Baremetal,
    None,
    Nutanix,
    Vsphere,
    External,
}

/// Discovery image flavour of an infra-env.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ImageType {
    MinimalIso,
    FullIso,
}

/// Cluster network plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum NetworkType {
    #[serde(rename = "OpenShiftSDN")]
    #[strum(serialize = "OpenShiftSDN")]
    OpenShiftSdn,
    #[serde(rename = "OVNKubernetes")]
    #[strum(serialize = "OVNKubernetes")]
    OvnKubernetes,
}

/// Control-plane redundancy requested for the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum HighAvailabilityMode {
    Full,
    None,
}
