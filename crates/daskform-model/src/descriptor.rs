use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::domain::WorkerBounds;

/// Declarative record describing which cluster backend to instantiate.
///
/// The shape of this record is a contract with the external launcher
/// (a dask `factory` config block plus optional `default.adapt` scaling
/// bounds); field names are fixed by that contract, not by this crate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LaunchDescriptor {
    pub factory: FactorySpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ScalingDefaults>,
}

/// Backend implementation name, namespace, and keyword arguments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FactorySpec {
    /// Backend implementation name.
    #[serde(rename = "class")]
    pub class_name: String,
    /// Backend namespace (python module for dask launchers).
    pub module: String,
    /// Positional arguments; the contract keeps this empty.
    pub args: Vec<Value>,
    /// Backend-specific keyword map.
    pub kwargs: Map<String, Value>,
}

/// `default` block carrying the auto-scaling bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ScalingDefaults {
    pub adapt: AdaptBounds,
}

/// `minimum`/`maximum` worker counts handed to the launcher's adapt call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AdaptBounds {
    pub minimum: u32,
    pub maximum: u32,
}

impl From<WorkerBounds> for AdaptBounds {
    fn from(b: WorkerBounds) -> Self {
        Self {
            minimum: b.minimum,
            maximum: b.maximum,
        }
    }
}

impl LaunchDescriptor {
    /// Start a descriptor for the given backend class and module, with no
    /// kwargs and no scaling bounds.
    pub fn new(class_name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            factory: FactorySpec {
                class_name: class_name.into(),
                module: module.into(),
                args: Vec::new(),
                kwargs: Map::new(),
            },
            default: None,
        }
    }

    /// Add a keyword argument (builder style).
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.factory.kwargs.insert(key.into(), value.into());
        self
    }

    /// Attach the `default.adapt` scaling bounds (builder style).
    pub fn with_adapt(mut self, bounds: impl Into<AdaptBounds>) -> Self {
        self.default = Some(ScalingDefaults {
            adapt: bounds.into(),
        });
        self
    }
}
