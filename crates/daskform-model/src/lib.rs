mod domain;
pub use domain::{EnvironmentCatalog, EnvironmentId, RuntimeEnvironment};
pub use domain::{ShapeLimits, WorkerBounds, WorkerLimits, WorkerShape};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::ClusterKind;

mod descriptor;
pub use descriptor::{AdaptBounds, FactorySpec, LaunchDescriptor, ScalingDefaults};
