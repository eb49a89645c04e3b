//! Collision rules and results

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Rules for batch collision checking
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollisionRules {
    /// Extra gap allowed between boundaries before a pair stops being reported.
    /// 0 reports exactly the pairs for which `circle_collision` is true.
    pub clearance: f64,
}

impl Default for CollisionRules {
    fn default() -> Self {
        Self { clearance: 0.0 }
    }
}

impl CollisionRules {
    pub fn is_valid(&self) -> bool {
        self.clearance.is_finite() && self.clearance >= 0.0
    }
}

/// A pair of circles within the configured clearance of each other
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CollisionPair {
    /// Always less than `circle_b_id`
    pub circle_a_id: u64,
    pub circle_b_id: u64,
    /// Center-to-center distance
    pub distance: f64,
    /// Boundary-to-boundary distance, negative when overlapping
    pub gap: f64,
    /// Point between the two boundaries, for visualization
    pub contact: Point,
}
