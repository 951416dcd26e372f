use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::domain::EnvironmentId;

/// A named, pre-installed language environment selectable for worker processes.
///
/// Entries are enumerated by the host (kernelspec listing on Jupyter hosts)
/// and immutable once listed; this crate only reads them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RuntimeEnvironment {
    /// Catalog identifier (kernelspec name).
    pub id: EnvironmentId,
    /// Human-readable label shown in the selector.
    pub display_name: String,
    /// Executable argv; `argv[0]` is the interpreter path.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub argv: Vec<String>,
    /// Language tag (e.g. "python").
    pub language: String,
}

impl RuntimeEnvironment {
    /// Interpreter path, i.e. the first argv element.
    pub fn executable(&self) -> Option<&str> {
        self.argv.first().map(|s| s.as_str())
    }

    /// Environment root, derived by stripping the trailing `bin/<exe>`
    /// segment from the interpreter path.
    ///
    /// Gateway backends want the environment prefix
    /// (`/depot/kernels/python3`), not the interpreter
    /// (`/depot/kernels/python3/bin/python3`). Paths without a `bin`
    /// parent are returned as `None`.
    pub fn base_prefix(&self) -> Option<String> {
        let exe = self.executable()?;
        let path = std::path::Path::new(exe);
        let bin = path.parent()?;
        if bin.file_name()? != "bin" {
            return None;
        }
        Some(bin.parent()?.to_string_lossy().into_owned())
    }
}

/// Ordered listing of runtime environments plus the host's declared default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EnvironmentCatalog {
    /// Identifier of the host's preferred environment, if it declared one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_id: Option<EnvironmentId>,
    /// Environments in the order the host listed them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<RuntimeEnvironment>,
}

impl EnvironmentCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the catalog lists no environments.
    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    /// Look up an environment by id.
    pub fn get(&self, id: &str) -> Option<&RuntimeEnvironment> {
        self.environments.iter().find(|e| e.id == id)
    }

    /// Pick the default environment restricted to the given language.
    ///
    /// The host's declared default wins when it carries the expected
    /// language tag; otherwise the first environment with that tag is
    /// used. `None` when nothing in the catalog matches.
    pub fn default_for_language(&self, language: &str) -> Option<&RuntimeEnvironment> {
        if let Some(id) = &self.default_id
            && let Some(env) = self.get(id)
            && env.language == language
        {
            return Some(env);
        }
        self.environments.iter().find(|e| e.language == language)
    }
}
