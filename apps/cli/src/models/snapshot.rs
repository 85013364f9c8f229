use capgate::domain::cluster::{ClusterDelta, ClusterSnapshot, InfraEnvDelta, InfraEnvSnapshot};
use serde::Deserialize;

/// Input document of `capgate validate`. Every part is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Snapshot {
    pub cluster: Option<ClusterSnapshot>,
    pub infra_env: Option<InfraEnvSnapshot>,
    pub cluster_delta: Option<ClusterDelta>,
    pub infra_env_delta: Option<InfraEnvDelta>,
}
