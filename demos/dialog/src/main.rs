use tracing::info;
use tracing_subscriber::EnvFilter;

use daskform_core::prelude::*;
use daskform_model::{ClusterKind, EnvironmentCatalog, RuntimeEnvironment};

/// Walks one dialog session end to end: seed the form from a catalog and
/// identity, apply a few edits, derive the descriptor, persist the state.
fn main() -> anyhow::Result<()> {
    // 1) logger
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();
    info!("logger initialized");

    // 2) host-provided catalog (kernelspec listing on a real host)
    let catalog = EnvironmentCatalog {
        default_id: Some("python3".to_string()),
        environments: vec![
            RuntimeEnvironment {
                id: "python3".to_string(),
                display_name: "Python3 kernel".to_string(),
                argv: vec!["/depot/cms/kernels/python3/bin/python3".to_string()],
                language: "python".to_string(),
            },
            RuntimeEnvironment {
                id: "python3-ml".to_string(),
                display_name: "Python3 [ML] kernel".to_string(),
                argv: vec!["/depot/cms/kernels/python3-ml/bin/python3".to_string()],
                language: "python".to_string(),
            },
        ],
    };

    // 3) persisted-config port
    let store = MemoryStore::new();
    let identity = std::env::args().nth(1);

    // 4) open the dialog: saved state if present, fresh seed otherwise
    let state = match store.load()? {
        Some(saved) => saved,
        None => FormState::initialize(FormPolicy::default(), &catalog, identity.as_deref()),
    };
    info!(kind = state.kind.kind(), "form opened");

    // 5) the user edits a few fields
    let state = state
        .with_kind(ClusterKind::GatewayK8s)
        .with_minimum("2")
        .with_maximum("10")
        .with_cores("4")
        .with_memory("8")
        .with_environment(&catalog, "python3-ml")?;

    // 6) apply
    match finalize(&state, DialogOutcome::Accepted)? {
        Some(descriptor) => {
            store.save(&state)?;
            println!("{}", serde_json::to_string_pretty(&descriptor)?);
        }
        None => info!("dialog cancelled, keeping previous configuration"),
    }

    Ok(())
}
