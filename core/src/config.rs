use crate::error::{GraphError, Result};
use crate::graph::Weight;

/// Default number of vertex slots, valid ids are `1..=MAX_VERTICES`.
pub const MAX_VERTICES: usize = 1000;

/// Largest capacity a graph may be configured with. The engine's linear scan
/// costs O(capacity) per round, so this also bounds the per-query work.
pub const CAPACITY_LIMIT: usize = 1_000_000;

/// Largest accepted edge weight. A simple path has fewer than
/// `CAPACITY_LIMIT` edges, so its total weight always fits in a `Weight`.
pub const MAX_WEIGHT: Weight = Weight::MAX / CAPACITY_LIMIT as Weight;

/// What edge insertion does with a vertex id outside `1..=capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Skip the insertion and report `Ok(false)`.
    #[default]
    Ignore,
    /// Fail with [`GraphError::OutOfRange`].
    Reject,
}

/// Construction-time settings for a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    pub capacity: usize,
    pub bounds: BoundsPolicy,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self {
            capacity: MAX_VERTICES,
            bounds: BoundsPolicy::Ignore,
        }
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    /// Shorthand for `bounds(BoundsPolicy::Reject)`.
    pub fn strict(self) -> Self {
        self.bounds(BoundsPolicy::Reject)
    }

    /// Check the settings against their allowed ranges.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 || self.capacity > CAPACITY_LIMIT {
            return Err(GraphError::InvalidCapacity {
                capacity: self.capacity,
                max: CAPACITY_LIMIT,
            });
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GraphConfig::default();
        assert_eq!(config.capacity, MAX_VERTICES);
        assert_eq!(config.bounds, BoundsPolicy::Ignore);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GraphConfig::new().capacity(8).strict();
        assert_eq!(config.capacity, 8);
        assert_eq!(config.bounds, BoundsPolicy::Reject);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = GraphConfig::new().capacity(0).validate().unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidCapacity {
                capacity: 0,
                max: CAPACITY_LIMIT
            }
        );
    }

    #[test]
    fn test_max_weight_path_fits() {
        let longest = MAX_WEIGHT.checked_mul(CAPACITY_LIMIT as Weight - 1);
        assert!(longest.is_some());
    }

    #[test]
    fn test_capacity_limit() {
        assert!(GraphConfig::new()
            .capacity(CAPACITY_LIMIT)
            .validate()
            .is_ok());
        assert!(GraphConfig::new()
            .capacity(CAPACITY_LIMIT + 1)
            .validate()
            .is_err());
    }
}
