//! Point-to-point measurements

use super::types::Point;
use std::f64::consts::PI;

/// Euclidean distance between two points
pub fn distance_between_points(first: Point, second: Point) -> f64 {
    let dx = second.x - first.x;
    let dy = second.y - first.y;
    (dx * dx + dy * dy).sqrt()
}

/// Angle in radians of the vector `first -> second`, measured from the +x
/// axis toward +y. Range is (-PI, PI]. Coincident points give 0.
///
/// In a y-down screen frame a positive angle is a clockwise rotation.
pub fn angle_between_points(first: Point, second: Point) -> f64 {
    let dx = second.x - first.x;
    let dy = second.y - first.y;

    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    let angle = dy.atan2(dx);
    // atan2(-0.0, negative) lands on -PI
    if angle == -PI {
        PI
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_distance_3_4_5() {
        let d = distance_between_points(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_distance_nan_propagates() {
        let d = distance_between_points(Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0));
        assert!(d.is_nan());
        let d = distance_between_points(Point::new(f64::INFINITY, 0.0), Point::new(1.0, 1.0));
        assert_eq!(d, f64::INFINITY);
    }

    #[test]
    fn test_angle_axes() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(angle_between_points(origin, Point::new(1.0, 0.0)), 0.0);
        assert!((angle_between_points(origin, Point::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((angle_between_points(origin, Point::new(0.0, -1.0)) + FRAC_PI_2).abs() < 1e-12);
        assert_eq!(angle_between_points(origin, Point::new(-1.0, 0.0)), PI);
    }

    #[test]
    fn test_angle_coincident_points() {
        let p = Point::new(4.0, -7.0);
        assert_eq!(angle_between_points(p, p), 0.0);
        assert_eq!(angle_between_points(Point::new(0.0, 0.0), Point::new(-0.0, -0.0)), 0.0);
    }

    #[test]
    fn test_angle_negative_zero_folds_to_pi() {
        let a = angle_between_points(Point::new(0.0, 0.0), Point::new(-1.0, -0.0));
        assert_eq!(a, PI);
    }
}
