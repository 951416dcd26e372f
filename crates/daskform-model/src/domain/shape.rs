use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Defaults and caps for [`WorkerShape`], matching the rendered controls.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct ShapeLimits {
    /// Cores a worker falls back to when the raw input does not parse.
    pub default_cores: u32,
    /// Largest selectable core count.
    pub max_cores: u32,
    /// Memory a worker falls back to when the raw input does not parse.
    pub default_memory_gb: f64,
    /// Largest selectable per-worker memory.
    pub max_memory_gb: f64,
}

impl Default for ShapeLimits {
    fn default() -> Self {
        Self {
            default_cores: 1,
            max_cores: 32,
            default_memory_gb: 2.0,
            max_memory_gb: 16.0,
        }
    }
}

/// Per-worker resource sizing: cores and memory in gigabytes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct WorkerShape {
    pub cores: u32,
    pub memory_gb: f64,
}

impl WorkerShape {
    /// Seed the shape from the policy defaults.
    pub fn from_limits(limits: &ShapeLimits) -> Self {
        Self {
            cores: limits.default_cores,
            memory_gb: limits.default_memory_gb,
        }
    }

    /// Apply a raw cores edit.
    ///
    /// Invalid input or anything below one core resets to the default;
    /// valid values are clamped to the cap declared by the control.
    pub fn set_cores(&mut self, raw: &str, limits: &ShapeLimits) {
        self.cores = match raw.trim().parse::<i64>() {
            Ok(n) if n >= 1 => n.min(i64::from(limits.max_cores)) as u32,
            _ => limits.default_cores,
        };
    }

    /// Apply a raw memory edit (gigabytes).
    ///
    /// Invalid or negative input resets to the default; valid values are
    /// kept within `[1.0, max_memory_gb]`.
    pub fn set_memory(&mut self, raw: &str, limits: &ShapeLimits) {
        self.memory_gb = match raw.trim().parse::<f64>() {
            Ok(gb) if gb >= 0.0 && gb.is_finite() => gb.clamp(1.0, limits.max_memory_gb),
            _ => limits.default_memory_gb,
        };
    }

    /// Dask-style memory string for descriptor kwargs, e.g. `"2G"`.
    ///
    /// Whole gigabytes are printed without a fractional part.
    pub fn memory_spec(&self) -> String {
        if self.memory_gb.fract() == 0.0 {
            format!("{}G", self.memory_gb as u64)
        } else {
            format!("{}G", self.memory_gb)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_limits() {
        let limits = ShapeLimits::default();
        let shape = WorkerShape::from_limits(&limits);
        assert_eq!(shape.cores, 1);
        assert_eq!(shape.memory_gb, 2.0);
    }

    #[test]
    fn invalid_cores_reset_to_default() {
        let limits = ShapeLimits::default();
        let mut shape = WorkerShape::from_limits(&limits);
        shape.set_cores("4", &limits);
        assert_eq!(shape.cores, 4);

        shape.set_cores("zero", &limits);
        assert_eq!(shape.cores, limits.default_cores);

        shape.set_cores("0", &limits);
        assert_eq!(shape.cores, limits.default_cores);

        shape.set_cores("-2", &limits);
        assert_eq!(shape.cores, limits.default_cores);
    }

    #[test]
    fn cores_are_capped_at_the_control_maximum() {
        let limits = ShapeLimits::default();
        let mut shape = WorkerShape::from_limits(&limits);
        shape.set_cores("128", &limits);
        assert_eq!(shape.cores, limits.max_cores);
    }

    #[test]
    fn invalid_or_negative_memory_resets_to_default() {
        let limits = ShapeLimits::default();
        let mut shape = WorkerShape::from_limits(&limits);
        shape.set_memory("4.5", &limits);
        assert_eq!(shape.memory_gb, 4.5);

        shape.set_memory("lots", &limits);
        assert_eq!(shape.memory_gb, limits.default_memory_gb);

        shape.set_memory("-1", &limits);
        assert_eq!(shape.memory_gb, limits.default_memory_gb);

        shape.set_memory("NaN", &limits);
        assert_eq!(shape.memory_gb, limits.default_memory_gb);
    }

    #[test]
    fn memory_is_clamped_into_declared_range() {
        let limits = ShapeLimits::default();
        let mut shape = WorkerShape::from_limits(&limits);
        shape.set_memory("0.25", &limits);
        assert_eq!(shape.memory_gb, 1.0);

        shape.set_memory("64", &limits);
        assert_eq!(shape.memory_gb, limits.max_memory_gb);
    }

    #[test]
    fn memory_spec_formats_whole_and_fractional_values() {
        let limits = ShapeLimits::default();
        let mut shape = WorkerShape::from_limits(&limits);
        assert_eq!(shape.memory_spec(), "2G");

        shape.set_memory("3.5", &limits);
        assert_eq!(shape.memory_spec(), "3.5G");
    }
}
