//! Mapping from form state to the launch descriptor consumed by the
//! external cluster launcher.
//!
//! Each [`ClusterKind`] has its own builder; `derive` is an exhaustive
//! match over the closed set, so a missing backend is a compile error
//! rather than a silent fall-through to an empty config.

use serde_json::json;
use tracing::{debug, instrument};

use daskform_model::{ClusterKind, LaunchDescriptor, RuntimeEnvironment};

use crate::{error::CoreError, form::{DialogOutcome, FormState}};

/// Site constants for the SLURM-submitted pool.
mod slurm {
    pub const CLASS: &str = "PurdueSLURMCluster";
    pub const MODULE: &str = "purdue_slurm";
    pub const ACCOUNT: &str = "cms";
    pub const QOS: &str = "normal";
    pub const RESERVATION: &str = "DASKTEST";
    pub const STDOUT_TEMPLATE: &str = "-o /tmp/dask_job.%j.%N.out";
    pub const STDERR_TEMPLATE: &str = "-e /tmp/dask_job.%j.%N.error";
}

/// Site constants for the managed gateway endpoints.
mod gateway {
    pub const CLASS: &str = "GatewayCluster";
    pub const MODULE: &str = "dask_gateway";

    pub const K8S_ADDRESS: &str = "http://dask-gateway-k8s.geddes.rcac.purdue.edu";
    pub const K8S_PROXY_ADDRESS: &str = "traefik-dask-gateway-k8s.cms.geddes.rcac.purdue.edu:8786";

    pub const SLURM_ADDRESS: &str = "http://dask-gateway-slurm.geddes.rcac.purdue.edu";
    pub const SLURM_PROXY_ADDRESS: &str =
        "traefik-dask-gateway-slurm.cms.geddes.rcac.purdue.edu:8786";
}

/// Constants for the in-process pool.
mod local {
    pub const CLASS: &str = "LocalCluster";
    pub const MODULE: &str = "dask.distributed";
}

/// Build the launch descriptor for the current selections.
///
/// Pure with respect to `state`: identical states yield structurally
/// identical descriptors. The only failure mode is a missing runtime
/// environment for a backend that needs one, which is a data error
/// (an empty host catalog), not a form-validation error.
#[instrument(level = "debug", skip(state), fields(kind = state.kind.kind()))]
pub fn derive(state: &FormState) -> Result<LaunchDescriptor, CoreError> {
    let descriptor = match state.kind {
        ClusterKind::Local => LaunchDescriptor::new(local::CLASS, local::MODULE),
        ClusterKind::Slurm => slurm_descriptor(state, required_environment(state)?),
        ClusterKind::GatewayK8s => gateway_descriptor(
            state,
            required_environment(state)?,
            gateway::K8S_ADDRESS,
            gateway::K8S_PROXY_ADDRESS,
        )?,
        ClusterKind::GatewaySlurm => gateway_descriptor(
            state,
            required_environment(state)?,
            gateway::SLURM_ADDRESS,
            gateway::SLURM_PROXY_ADDRESS,
        )?,
    };
    debug!(class = %descriptor.factory.class_name, "derived launch descriptor");
    Ok(descriptor)
}

/// Resolve the dialog outcome.
///
/// Cancel always yields `None` — the caller keeps whatever config was
/// active before the dialog opened, regardless of edits made meanwhile.
pub fn finalize(
    state: &FormState,
    outcome: DialogOutcome,
) -> Result<Option<LaunchDescriptor>, CoreError> {
    match outcome {
        DialogOutcome::Accepted => derive(state).map(Some),
        DialogOutcome::Cancelled => Ok(None),
    }
}

fn required_environment(state: &FormState) -> Result<&RuntimeEnvironment, CoreError> {
    state
        .environment
        .as_ref()
        .ok_or_else(|| CoreError::MissingEnvironment(state.kind.kind().to_string()))
}

fn slurm_descriptor(state: &FormState, env: &RuntimeEnvironment) -> LaunchDescriptor {
    let directives = vec![
        format!("--qos={}", slurm::QOS),
        format!("--reservation={}", slurm::RESERVATION),
        slurm::STDOUT_TEMPLATE.to_string(),
        slurm::STDERR_TEMPLATE.to_string(),
    ];
    LaunchDescriptor::new(slurm::CLASS, slurm::MODULE)
        .kwarg("account", slurm::ACCOUNT)
        .kwarg("cores", state.shape.cores)
        .kwarg("memory", state.shape.memory_spec())
        .kwarg("job_extra_directives", json!(directives))
        .kwarg("python", env.executable().unwrap_or_default())
        .with_adapt(state.bounds)
}

fn gateway_descriptor(
    state: &FormState,
    env: &RuntimeEnvironment,
    address: &str,
    proxy_address: &str,
) -> Result<LaunchDescriptor, CoreError> {
    // Gateway workers activate the environment by prefix, so a bare
    // executable path with no bin/ parent cannot be used here.
    let prefix = env.base_prefix().ok_or_else(|| {
        CoreError::MissingEnvironment(format!("{} (no usable interpreter path)", env.id))
    })?;
    Ok(LaunchDescriptor::new(gateway::CLASS, gateway::MODULE)
        .kwarg("address", address)
        .kwarg("proxy_address", proxy_address)
        .kwarg("worker_cores", state.shape.cores)
        .kwarg("worker_memory", state.shape.memory_spec())
        .kwarg("env", prefix)
        .with_adapt(state.bounds))
}
