mod environment;
pub use environment::{EnvironmentCatalog, RuntimeEnvironment};

mod bounds;
pub use bounds::{WorkerBounds, WorkerLimits};

mod shape;
pub use shape::{ShapeLimits, WorkerShape};

/// Identifier of a runtime environment as listed by the host catalog.
///
/// Matches the kernelspec name on Jupyter-backed hosts.
pub type EnvironmentId = String;
