use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Clamping policy for [`WorkerBounds`].
///
/// Kept as an explicit struct (not module constants) so hosts and tests
/// can vary the policy without touching shared state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct WorkerLimits {
    /// Lowest admissible worker count.
    pub floor: u32,
    /// Highest admissible worker count.
    pub ceiling: u32,
    /// Value `minimum` falls back to when the raw input does not parse.
    pub default_minimum: u32,
    /// Value `maximum` falls back to when the raw input does not parse.
    pub default_maximum: u32,
}

impl Default for WorkerLimits {
    fn default() -> Self {
        Self {
            floor: 0,
            ceiling: 1000,
            default_minimum: 1,
            default_maximum: 2,
        }
    }
}

/// Auto-scaling range for the number of workers in a pool.
///
/// Invariant: `minimum <= maximum`, re-established on every edit. The two
/// endpoints are always mutated together: raising the floor pushes the
/// ceiling up, lowering the ceiling pulls the floor down, never the other
/// way around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct WorkerBounds {
    pub minimum: u32,
    pub maximum: u32,
}

impl WorkerBounds {
    /// Seed bounds from the policy defaults.
    pub fn from_limits(limits: &WorkerLimits) -> Self {
        let mut b = Self {
            minimum: limits.default_minimum,
            maximum: limits.default_maximum,
        };
        b.maximum = b.maximum.max(b.minimum);
        b
    }

    /// Apply a raw minimum edit.
    ///
    /// Parse failure resets `minimum` to the policy default (not to the
    /// previous value). The parsed value is clamped into
    /// `[floor, ceiling]`, then `maximum` is raised to keep the invariant.
    pub fn set_minimum(&mut self, raw: &str, limits: &WorkerLimits) {
        self.minimum = match raw.trim().parse::<i64>() {
            Ok(n) => clamp(n, limits),
            Err(_) => limits.default_minimum,
        };
        self.maximum = self.maximum.max(self.minimum);
    }

    /// Apply a raw maximum edit; symmetric to [`WorkerBounds::set_minimum`],
    /// lowering `minimum` to keep the invariant.
    pub fn set_maximum(&mut self, raw: &str, limits: &WorkerLimits) {
        self.maximum = match raw.trim().parse::<i64>() {
            Ok(n) => clamp(n, limits),
            Err(_) => limits.default_maximum,
        };
        self.minimum = self.minimum.min(self.maximum);
    }
}

fn clamp(n: i64, limits: &WorkerLimits) -> u32 {
    n.clamp(i64::from(limits.floor), i64::from(limits.ceiling)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(minimum: u32, maximum: u32) -> WorkerBounds {
        WorkerBounds { minimum, maximum }
    }

    #[test]
    fn seeded_bounds_respect_invariant() {
        let limits = WorkerLimits {
            default_minimum: 5,
            default_maximum: 2,
            ..Default::default()
        };
        let b = WorkerBounds::from_limits(&limits);
        assert!(b.minimum <= b.maximum);
    }

    #[test]
    fn negative_minimum_clamps_to_floor() {
        let limits = WorkerLimits::default();
        let mut b = bounds(1, 2);
        b.set_minimum("-5", &limits);
        assert_eq!(b, bounds(0, 2));
    }

    #[test]
    fn minimum_above_maximum_raises_the_ceiling() {
        let limits = WorkerLimits::default();
        let mut b = bounds(1, 4);
        b.set_minimum("10", &limits);
        assert_eq!(b, bounds(10, 10));
    }

    #[test]
    fn maximum_below_minimum_lowers_the_floor() {
        let limits = WorkerLimits::default();
        let mut b = bounds(8, 16);
        b.set_maximum("3", &limits);
        assert_eq!(b, bounds(3, 3));
    }

    #[test]
    fn unparsable_minimum_resets_to_default_constant() {
        let limits = WorkerLimits::default();
        let mut b = bounds(7, 9);
        b.set_minimum("seven", &limits);
        assert_eq!(b.minimum, limits.default_minimum);
        assert_eq!(b.maximum, 9);
    }

    #[test]
    fn unparsable_maximum_resets_then_reclamps_minimum() {
        let limits = WorkerLimits::default();
        let mut b = bounds(40, 50);
        b.set_maximum("abc", &limits);
        assert_eq!(b.maximum, limits.default_maximum);
        assert_eq!(b.minimum, limits.default_maximum);
    }

    #[test]
    fn ceiling_is_enforced() {
        let limits = WorkerLimits::default();
        let mut b = bounds(0, 2);
        b.set_maximum("99999", &limits);
        assert_eq!(b.maximum, limits.ceiling);
    }

    #[test]
    fn invariant_holds_for_any_edit_order() {
        let limits = WorkerLimits::default();
        for a in ["-3", "0", "2", "17", "1200", "junk"] {
            for z in ["-3", "0", "2", "17", "1200", "junk"] {
                let mut b = bounds(1, 2);
                b.set_minimum(a, &limits);
                b.set_maximum(z, &limits);
                assert!(b.minimum <= b.maximum, "min-then-max failed for {a}/{z}");

                let mut b = bounds(1, 2);
                b.set_maximum(z, &limits);
                b.set_minimum(a, &limits);
                assert!(b.minimum <= b.maximum, "max-then-min failed for {a}/{z}");
            }
        }
    }

    #[test]
    fn clamping_is_idempotent() {
        let limits = WorkerLimits::default();
        for raw in ["-3", "0", "2", "1200", "junk"] {
            let mut once = bounds(1, 2);
            once.set_minimum(raw, &limits);
            let mut twice = once;
            twice.set_minimum(raw, &limits);
            assert_eq!(once, twice, "set_minimum not idempotent for {raw}");
        }
    }
}
