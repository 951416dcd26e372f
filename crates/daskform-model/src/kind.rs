use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::error::{ModelError, ModelResult};

/// Backend strategy used to obtain compute workers.
///
/// This is a closed set: the dialog offers exactly these choices, and the
/// descriptor derivation dispatches on it with an exhaustive match.
/// Unknown identifiers are rejected at the string boundary ([`FromStr`])
/// instead of falling through to a no-op config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ClusterKind {
    /// In-process worker pool on the notebook host.
    Local,
    /// Worker pool submitted through the SLURM batch scheduler.
    Slurm,
    /// Managed Dask gateway backed by the Kubernetes pool.
    GatewayK8s,
    /// Managed Dask gateway backed by the batch-scheduler pool.
    GatewaySlurm,
}

impl ClusterKind {
    /// Returns the kind as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            ClusterKind::Local => "local",
            ClusterKind::Slurm => "slurm",
            ClusterKind::GatewayK8s => "gateway-k8s",
            ClusterKind::GatewaySlurm => "gateway-slurm",
        }
    }

    /// `true` for kinds that run workers under a selected runtime environment.
    ///
    /// `Local` reuses the notebook's own process environment, so the
    /// environment selector is irrelevant for it.
    pub fn wants_environment(&self) -> bool {
        !matches!(self, ClusterKind::Local)
    }
}

impl Default for ClusterKind {
    fn default() -> Self {
        ClusterKind::Local
    }
}

impl FromStr for ClusterKind {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "" => Ok(ClusterKind::Local),
            "slurm" | "batch" => Ok(ClusterKind::Slurm),
            "gateway-k8s" | "gateway-kubernetes" => Ok(ClusterKind::GatewayK8s),
            "gateway-slurm" | "gateway-batch" => Ok(ClusterKind::GatewaySlurm),
            other => Err(ModelError::UnknownClusterKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(ClusterKind::Local.kind(), "local");
        assert_eq!(ClusterKind::Slurm.kind(), "slurm");
        assert_eq!(ClusterKind::GatewayK8s.kind(), "gateway-k8s");
        assert_eq!(ClusterKind::GatewaySlurm.kind(), "gateway-slurm");
    }

    #[test]
    fn from_str_accepts_canonical_and_alias_names() {
        assert_eq!("local".parse::<ClusterKind>().unwrap(), ClusterKind::Local);
        assert_eq!("batch".parse::<ClusterKind>().unwrap(), ClusterKind::Slurm);
        assert_eq!(
            " Gateway-K8s ".parse::<ClusterKind>().unwrap(),
            ClusterKind::GatewayK8s
        );
    }

    #[test]
    fn from_str_rejects_unknown_kind() {
        match "yarn".parse::<ClusterKind>() {
            Err(ModelError::UnknownClusterKind(s)) => assert_eq!(s, "yarn"),
            other => panic!("expected UnknownClusterKind, got {other:?}"),
        }
    }

    #[test]
    fn serde_uses_kebab_case_tags() {
        let json = serde_json::to_string(&ClusterKind::GatewaySlurm).unwrap();
        assert_eq!(json, "\"gateway-slurm\"");

        let back: ClusterKind = serde_json::from_str("\"gateway-k8s\"").unwrap();
        assert_eq!(back, ClusterKind::GatewayK8s);
    }

    #[test]
    fn only_local_skips_environment_selection() {
        assert!(!ClusterKind::Local.wants_environment());
        assert!(ClusterKind::Slurm.wants_environment());
        assert!(ClusterKind::GatewayK8s.wants_environment());
        assert!(ClusterKind::GatewaySlurm.wants_environment());
    }
}
