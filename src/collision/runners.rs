//! Collision runner functions
//!
//! Contains the main entry points for batch collision checks:
//! - Full check over every circle in the index
//! - Targeted check for pairs involving specific circles

use crate::geometry::{circle_contact_point, circle_gap, distance_between_points};
use rayon::prelude::*;
use rstar::{RTree, AABB};
use std::collections::HashSet;

use super::index::IndexedCircle;
use super::types::{CollisionPair, CollisionRules};

/// Check one pair against the rules
pub fn check_pair(
    a: &IndexedCircle,
    b: &IndexedCircle,
    rules: &CollisionRules,
) -> Option<CollisionPair> {
    let distance = distance_between_points(a.circle.center, b.circle.center);
    if distance <= a.circle.radius + b.circle.radius + rules.clearance {
        let (first, second) = if a.id < b.id { (a, b) } else { (b, a) };
        Some(CollisionPair {
            circle_a_id: first.id,
            circle_b_id: second.id,
            distance,
            gap: circle_gap(first.circle, second.circle),
            contact: circle_contact_point(first.circle, second.circle),
        })
    } else {
        None
    }
}

/// Neighbors of `obj` whose envelopes come within `clearance` of its own
fn candidates<'a>(
    index: &'a RTree<IndexedCircle>,
    obj: &IndexedCircle,
    clearance: f64,
) -> Vec<&'a IndexedCircle> {
    let lower = obj.bounds.lower();
    let upper = obj.bounds.upper();
    let search_bounds = AABB::from_corners(
        [lower[0] - clearance, lower[1] - clearance],
        [upper[0] + clearance, upper[1] + clearance],
    );
    index.locate_in_envelope_intersecting(&search_bounds).collect()
}

/// Run a full collision check over every circle in the index.
/// Pairs are sorted by (circle_a_id, circle_b_id).
pub fn run_full_collision_check(
    index: &RTree<IndexedCircle>,
    rules: &CollisionRules,
) -> Vec<CollisionPair> {
    let start = std::time::Instant::now();
    let objects: Vec<&IndexedCircle> = index.iter().collect();

    let mut pairs: Vec<CollisionPair> = objects
        .par_iter()
        .flat_map(|obj_a| {
            candidates(index, obj_a, rules.clearance)
                .into_iter()
                // Only check each pair once (a.id < b.id)
                .filter(|obj_b| obj_a.id < obj_b.id)
                .filter_map(|obj_b| check_pair(obj_a, obj_b, rules))
                .collect::<Vec<_>>()
        })
        .collect();

    pairs.sort_by_key(|p| (p.circle_a_id, p.circle_b_id));

    log::info!(
        "Full collision check: {} pairs among {} circles in {:.2}ms",
        pairs.len(),
        objects.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    pairs
}

/// Run a collision check limited to pairs involving at least one of `ids`.
/// Ids not present in the index are ignored.
pub fn run_targeted_collision_check(
    index: &RTree<IndexedCircle>,
    ids: &[u64],
    rules: &CollisionRules,
) -> Vec<CollisionPair> {
    let start = std::time::Instant::now();
    let targets: HashSet<u64> = ids.iter().copied().collect();
    let objects: Vec<&IndexedCircle> = index.iter().filter(|o| targets.contains(&o.id)).collect();

    if objects.len() < targets.len() {
        log::debug!(
            "Targeted collision check: {} of {} requested ids are not loaded",
            targets.len() - objects.len(),
            targets.len()
        );
    }

    let mut pairs: Vec<CollisionPair> = objects
        .par_iter()
        .flat_map(|obj_a| {
            candidates(index, obj_a, rules.clearance)
                .into_iter()
                .filter(|obj_b| obj_a.id != obj_b.id)
                // Two targets meet twice; keep the visit from the lower id
                .filter(|obj_b| !targets.contains(&obj_b.id) || obj_a.id < obj_b.id)
                .filter_map(|obj_b| check_pair(obj_a, obj_b, rules))
                .collect::<Vec<_>>()
        })
        .collect();

    pairs.sort_by_key(|p| (p.circle_a_id, p.circle_b_id));

    log::info!(
        "Targeted collision check: {} pairs for {} circles in {:.2}ms",
        pairs.len(),
        objects.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::build_circle_index;
    use crate::geometry::{Circle, Point};

    fn sample_index() -> RTree<IndexedCircle> {
        build_circle_index(&[
            (1, Circle::new(Point::new(0.0, 0.0), 5.0)),
            (2, Circle::new(Point::new(8.0, 0.0), 5.0)),
            (3, Circle::new(Point::new(20.0, 0.0), 1.0)),
            (4, Circle::new(Point::new(23.0, 0.0), 2.0)),
        ])
    }

    #[test]
    fn test_full_check_finds_overlaps_and_touching() {
        let pairs = run_full_collision_check(&sample_index(), &CollisionRules::default());
        let ids: Vec<(u64, u64)> = pairs.iter().map(|p| (p.circle_a_id, p.circle_b_id)).collect();
        // 1-2 overlap (8 <= 10), 3-4 touch (3 == 3)
        assert_eq!(ids, vec![(1, 2), (3, 4)]);
        assert_eq!(pairs[0].gap, -2.0);
        assert_eq!(pairs[1].gap, 0.0);
    }

    #[test]
    fn test_clearance_widens_search() {
        let rules = CollisionRules { clearance: 5.0 };
        let pairs = run_full_collision_check(&sample_index(), &rules);
        let ids: Vec<(u64, u64)> = pairs.iter().map(|p| (p.circle_a_id, p.circle_b_id)).collect();
        // 2-3: distance 12, radii 6, gap 6 > 5 stays out
        assert_eq!(ids, vec![(1, 2), (3, 4)]);

        let rules = CollisionRules { clearance: 6.0 };
        let pairs = run_full_collision_check(&sample_index(), &rules);
        assert!(pairs.iter().any(|p| p.circle_a_id == 2 && p.circle_b_id == 3));
    }

    #[test]
    fn test_targeted_check() {
        let index = sample_index();
        let pairs = run_targeted_collision_check(&index, &[2], &CollisionRules::default());
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].circle_a_id, pairs[0].circle_b_id), (1, 2));

        // Both ends targeted still yields one entry
        let pairs = run_targeted_collision_check(&index, &[1, 2, 99], &CollisionRules::default());
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_empty_index() {
        let index = build_circle_index(&[]);
        assert!(run_full_collision_check(&index, &CollisionRules::default()).is_empty());
    }
}
