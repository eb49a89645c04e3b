//! R-tree spatial index over circles

use crate::geometry::{Circle, Point};
use rstar::{PointDistance, RTree, RTreeObject, AABB};

/// Circle wrapper for R-tree spatial indexing
#[derive(Clone, Debug)]
pub struct IndexedCircle {
    pub id: u64,
    pub circle: Circle,
    pub bounds: AABB<[f64; 2]>,
}

impl IndexedCircle {
    /// `None` when the circle has no usable bounding box (a NaN coordinate or
    /// radius, or an infinite center with an infinite radius). Such circles
    /// never satisfy `circle_collision`. Infinite bounds are clamped to the
    /// finite range so the tree can still order them.
    pub fn new(id: u64, circle: Circle) -> Option<Self> {
        let b = circle.bounds();
        if b.iter().any(|v| v.is_nan()) {
            return None;
        }
        let [min_x, min_y, max_x, max_y] = b.map(|v| v.clamp(f64::MIN, f64::MAX));
        let bounds = AABB::from_corners([min_x, min_y], [max_x, max_y]);
        Some(Self { id, circle, bounds })
    }
}

impl RTreeObject for IndexedCircle {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.bounds
    }
}

impl PointDistance for IndexedCircle {
    /// Squared distance to the disc; 0 for points inside it
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = point[0] - self.circle.center.x;
        let dy = point[1] - self.circle.center.y;
        let outside = ((dx * dx + dy * dy).sqrt() - self.circle.radius).max(0.0);
        outside * outside
    }
}

/// Bulk-load an R-tree from `(id, circle)` pairs.
/// Circles without usable bounds are left out (see [`IndexedCircle::new`]).
pub fn build_circle_index(circles: &[(u64, Circle)]) -> RTree<IndexedCircle> {
    let objects: Vec<IndexedCircle> = circles
        .iter()
        .filter_map(|&(id, circle)| IndexedCircle::new(id, circle))
        .collect();

    if objects.len() < circles.len() {
        log::debug!(
            "Skipped {} circles with undefined bounds",
            circles.len() - objects.len()
        );
    }

    RTree::bulk_load(objects)
}

/// Ids of every circle whose disc contains `point`, ascending
pub fn circles_at_point(index: &RTree<IndexedCircle>, point: Point) -> Vec<u64> {
    let mut ids: Vec<u64> = index
        .locate_all_at_point(&[point.x, point.y])
        .filter(|c| c.circle.contains_point(point))
        .map(|c| c.id)
        .collect();
    ids.sort_unstable();
    ids
}
