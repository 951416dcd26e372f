use serde::{Deserialize, Serialize};

use daskform_model::{ClusterKind, ShapeLimits, WorkerLimits};

/// Defaults and bounds applied when seeding and editing a form.
///
/// This is an explicit value passed into [`FormState::initialize`]
/// (not ambient module state), so hosts and tests can vary the policy
/// without touching anything shared.
///
/// [`FormState::initialize`]: crate::form::FormState::initialize
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormPolicy {
    /// Clamping policy for the worker auto-scaling bounds.
    pub worker_limits: WorkerLimits,
    /// Defaults and caps for the per-worker resource shape.
    pub shape_limits: ShapeLimits,
    /// Language tag an environment must carry to be selectable.
    pub language: String,
    /// Identity substrings that mark users of external institutions.
    pub markers: Vec<String>,
    /// Kind seeded for identities matching one of the markers.
    ///
    /// Marked users have no local batch account, so they get the
    /// Kubernetes-backed gateway instead of the scheduler default.
    pub marked_kind: ClusterKind,
    /// Kind seeded for everyone else (and when no identity is known).
    pub default_kind: ClusterKind,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            worker_limits: WorkerLimits::default(),
            shape_limits: ShapeLimits::default(),
            language: "python".to_string(),
            markers: vec!["fnal".to_string(), "cern".to_string()],
            marked_kind: ClusterKind::GatewayK8s,
            default_kind: ClusterKind::Slurm,
        }
    }
}

impl FormPolicy {
    /// Pick the default cluster kind for the given caller identity.
    ///
    /// The check is a case-insensitive substring match against the
    /// configured markers; no identity means the plain default.
    pub fn kind_for_identity(&self, identity: Option<&str>) -> ClusterKind {
        match identity {
            Some(who) => {
                let who = who.to_ascii_lowercase();
                if self.markers.iter().any(|m| who.contains(m.as_str())) {
                    self.marked_kind
                } else {
                    self.default_kind
                }
            }
            None => self.default_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let policy = FormPolicy::default();
        assert_eq!(policy.language, "python");
        assert_eq!(policy.marked_kind, ClusterKind::GatewayK8s);
        assert_eq!(policy.default_kind, ClusterKind::Slurm);
        assert_eq!(policy.markers, vec!["fnal", "cern"]);
    }

    #[test]
    fn marked_identity_gets_the_gateway_kind() {
        let policy = FormPolicy::default();
        assert_eq!(
            policy.kind_for_identity(Some("alice-fnal")),
            ClusterKind::GatewayK8s
        );
        assert_eq!(
            policy.kind_for_identity(Some("bob.CERN.ch")),
            ClusterKind::GatewayK8s
        );
    }

    #[test]
    fn unmarked_or_missing_identity_gets_the_default_kind() {
        let policy = FormPolicy::default();
        assert_eq!(
            policy.kind_for_identity(Some("carol-purdue")),
            ClusterKind::Slurm
        );
        assert_eq!(policy.kind_for_identity(None), ClusterKind::Slurm);
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let policy: FormPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, FormPolicy::default());
    }
}
