use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use daskform_model::{
    ClusterKind, EnvironmentCatalog, ModelError, RuntimeEnvironment, WorkerBounds, WorkerShape,
};

use crate::{error::CoreError, policy::FormPolicy};

/// How the dialog was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogOutcome {
    /// The user pressed apply; the form contents become the new config.
    Accepted,
    /// The user cancelled; any previously active config stays untouched.
    Cancelled,
}

/// Snapshot of the open dialog's selections.
///
/// Created once when the dialog opens, rebuilt by every edit (the setters
/// consume `self` and return the next snapshot), and discarded when the
/// dialog closes. The seeding policy travels with the state so edits can
/// apply the same defaults and clamps the form was opened with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub kind: ClusterKind,
    pub bounds: WorkerBounds,
    pub shape: WorkerShape,
    /// Selected runtime environment, cloned out of the host catalog.
    pub environment: Option<RuntimeEnvironment>,
    /// Caller identity the kind default was derived from, if known.
    pub identity: Option<String>,
    pub policy: FormPolicy,
}

impl FormState {
    /// Seed a fresh form from the policy, the host's environment catalog,
    /// and an optional caller identity.
    ///
    /// The cluster kind comes from [`FormPolicy::kind_for_identity`];
    /// bounds and shape from the policy defaults; the environment from the
    /// catalog's declared default restricted to the policy language.
    pub fn initialize(
        policy: FormPolicy,
        catalog: &EnvironmentCatalog,
        identity: Option<&str>,
    ) -> Self {
        let kind = policy.kind_for_identity(identity);
        let environment = catalog.default_for_language(&policy.language).cloned();
        debug!(
            kind = kind.kind(),
            environment = environment.as_ref().map(|e| e.id.as_str()),
            "seeded form state"
        );
        Self {
            kind,
            bounds: WorkerBounds::from_limits(&policy.worker_limits),
            shape: WorkerShape::from_limits(&policy.shape_limits),
            environment,
            identity: identity.map(str::to_string),
            policy,
        }
    }

    /// Replace the cluster kind. Other fields are deliberately left
    /// alone; callers re-apply defaults themselves if they want a reset.
    pub fn with_kind(mut self, kind: ClusterKind) -> Self {
        trace!(kind = kind.kind(), "kind changed");
        self.kind = kind;
        self
    }

    /// Apply a raw minimum-workers edit (clamp/default rules in
    /// [`WorkerBounds::set_minimum`]).
    pub fn with_minimum(mut self, raw: &str) -> Self {
        self.bounds.set_minimum(raw, &self.policy.worker_limits);
        trace!(raw, minimum = self.bounds.minimum, maximum = self.bounds.maximum, "minimum edited");
        self
    }

    /// Apply a raw maximum-workers edit.
    pub fn with_maximum(mut self, raw: &str) -> Self {
        self.bounds.set_maximum(raw, &self.policy.worker_limits);
        trace!(raw, minimum = self.bounds.minimum, maximum = self.bounds.maximum, "maximum edited");
        self
    }

    /// Apply a raw worker-cores edit.
    pub fn with_cores(mut self, raw: &str) -> Self {
        self.shape.set_cores(raw, &self.policy.shape_limits);
        trace!(raw, cores = self.shape.cores, "cores edited");
        self
    }

    /// Apply a raw worker-memory edit (gigabytes).
    pub fn with_memory(mut self, raw: &str) -> Self {
        self.shape.set_memory(raw, &self.policy.shape_limits);
        trace!(raw, memory_gb = self.shape.memory_gb, "memory edited");
        self
    }

    /// Select a runtime environment by catalog id.
    ///
    /// An id the catalog does not list is a caller error, not a silent
    /// no-op: ignoring it would leave the form showing a selection that
    /// the derived descriptor does not use.
    pub fn with_environment(
        mut self,
        catalog: &EnvironmentCatalog,
        id: &str,
    ) -> Result<Self, CoreError> {
        let env = catalog
            .get(id)
            .ok_or_else(|| ModelError::UnknownEnvironment(id.to_string()))?;
        trace!(environment = id, "environment selected");
        self.environment = Some(env.clone());
        Ok(self)
    }
}
