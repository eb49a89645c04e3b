//! Line (segment) measurements: angles, intersections, and distances
//!
//! A `Line` is treated as the finite segment `point1 -> point2` everywhere in
//! this module.

use super::types::{midpoint, Line, Point};
use std::f64::consts::PI;

fn cross(a: [f64; 2], b: [f64; 2]) -> f64 {
    a[0] * b[1] - a[1] * b[0]
}

fn dot(a: [f64; 2], b: [f64; 2]) -> f64 {
    a[0] * b[0] + a[1] * b[1]
}

/// Unsigned angle in radians between the direction vectors of two lines.
///
/// Range is [0, PI]: parallel lines give 0, anti-parallel lines give PI.
/// Returns 0 when either line has zero length.
pub fn angle_between_lines(line1: Line, line2: Line) -> f64 {
    if line1.is_degenerate() || line2.is_degenerate() {
        return 0.0;
    }

    let d1 = line1.direction();
    let d2 = line2.direction();
    cross(d1, d2).abs().atan2(dot(d1, d2))
}

/// Signed rotation in radians from `line1`'s direction to `line2`'s direction.
///
/// Positive values rotate from +x toward +y, matching
/// [`angle_between_points`](super::points::angle_between_points). Range is
/// (-PI, PI]; zero-length lines give 0.
pub fn signed_angle_between_lines(line1: Line, line2: Line) -> f64 {
    if line1.is_degenerate() || line2.is_degenerate() {
        return 0.0;
    }

    let d1 = line1.direction();
    let d2 = line2.direction();
    let angle = cross(d1, d2).atan2(dot(d1, d2));
    if angle == -PI {
        PI
    } else {
        angle
    }
}

// Past 2^500 a squared coordinate difference can overflow to infinity, so
// such inputs are measured after an exact power-of-two downscale.
fn range_scale(points: &[Point]) -> f64 {
    let max = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0, f64::max);
    if max > 2f64.powi(500) {
        2f64.powi(-600)
    } else {
        1.0
    }
}

fn scale_point(p: Point, factor: f64) -> Point {
    Point::new(p.x * factor, p.y * factor)
}

fn scale_line(line: Line, factor: f64) -> Line {
    Line::new(scale_point(line.point1, factor), scale_point(line.point2, factor))
}

/// Point-to-segment minimum distance and the closest point on the segment
pub fn point_segment_distance(p: Point, line: Line) -> (f64, Point) {
    let scale = range_scale(&[p, line.point1, line.point2]);
    if scale == 1.0 {
        return point_segment_distance_in_range(p, line);
    }

    let (d, closest) =
        point_segment_distance_in_range(scale_point(p, scale), scale_line(line, scale));
    (d / scale, scale_point(closest, 1.0 / scale))
}

fn point_segment_distance_in_range(p: Point, line: Line) -> (f64, Point) {
    let a = line.point1;
    let ab = line.direction();
    let ap = [p.x - a.x, p.y - a.y];
    let ab_len2 = dot(ab, ab);

    if ab_len2 == 0.0 {
        // Degenerate segment
        let d = (ap[0] * ap[0] + ap[1] * ap[1]).sqrt();
        return (d, a);
    }

    let t = (dot(ap, ab) / ab_len2).clamp(0.0, 1.0);
    let closest = Point::new(a.x + t * ab[0], a.y + t * ab[1]);
    let dx = p.x - closest.x;
    let dy = p.y - closest.y;

    ((dx * dx + dy * dy).sqrt(), closest)
}

/// Crossing point of two segments.
///
/// `None` when the segments do not meet, or when they are parallel (which
/// includes collinear overlap and zero-length segments).
pub fn line_intersection(line1: Line, line2: Line) -> Option<Point> {
    let scale = range_scale(&[line1.point1, line1.point2, line2.point1, line2.point2]);
    if scale == 1.0 {
        return line_intersection_in_range(line1, line2);
    }

    line_intersection_in_range(scale_line(line1, scale), scale_line(line2, scale))
        .map(|p| scale_point(p, 1.0 / scale))
}

fn line_intersection_in_range(line1: Line, line2: Line) -> Option<Point> {
    let r = line1.direction();
    let s = line2.direction();
    let denom = cross(r, s);
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }

    let qp = [line2.point1.x - line1.point1.x, line2.point1.y - line1.point1.y];
    let t = cross(qp, s) / denom;
    let u = cross(qp, r) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Point::new(line1.point1.x + t * r[0], line1.point1.y + t * r[1]))
    } else {
        None
    }
}

/// Segment-to-segment minimum distance.
///
/// Also returns the midpoint of the closest pair of points, which is the
/// crossing point when the segments intersect. Any non-finite coordinate
/// makes the distance NaN. Coordinates of any finite magnitude are handled.
pub fn segment_distance(line1: Line, line2: Line) -> (f64, Point) {
    let endpoints = [line1.point1, line1.point2, line2.point1, line2.point2];
    if !endpoints.iter().all(Point::is_finite) {
        return (f64::NAN, Point::new(f64::NAN, f64::NAN));
    }

    let scale = range_scale(&endpoints);
    if scale == 1.0 {
        return segment_distance_in_range(line1, line2);
    }

    let (d, closest) =
        segment_distance_in_range(scale_line(line1, scale), scale_line(line2, scale));
    (d / scale, scale_point(closest, 1.0 / scale))
}

fn segment_distance_in_range(line1: Line, line2: Line) -> (f64, Point) {
    if let Some(p) = line_intersection_in_range(line1, line2) {
        return (0.0, p);
    }

    // Non-crossing segments are closest at an endpoint of one of them
    let candidates = [
        (line1.point1, line2),
        (line1.point2, line2),
        (line2.point1, line1),
        (line2.point2, line1),
    ];

    let mut min_d = f64::INFINITY;
    let mut closest = line1.point1;
    for (p, other) in candidates {
        let (d, q) = point_segment_distance_in_range(p, other);
        if d < min_d {
            min_d = d;
            closest = midpoint(p, q);
        }
    }

    (min_d, closest)
}

/// Minimum distance between two finite segments (0 when they touch or cross)
pub fn distance_between_lines(line1: Line, line2: Line) -> f64 {
    segment_distance(line1, line2).0
}
