// Properties of the geometry helpers checked over a fixed grid of sample points
use slide_geometry::{
    angle_between_lines, angle_between_points, circle_collision, distance_between_lines,
    distance_between_points, make_circle, make_line, Line, Point,
};
use std::f64::consts::PI;

const EPS: f64 = 1e-9;

fn sample_points() -> Vec<Point> {
    let coords = [-7.5, -1.0, 0.0, 0.25, 3.0, 12.0];
    coords
        .iter()
        .flat_map(|&x| coords.iter().map(move |&y| Point::new(x, y)))
        .collect()
}

fn sample_lines() -> Vec<Line> {
    let points = sample_points();
    points
        .iter()
        .step_by(5)
        .flat_map(|&a| points.iter().step_by(7).map(move |&b| make_line(a, b)))
        .collect()
}

#[test]
fn test_distance_to_self_is_zero() {
    for p in sample_points() {
        assert_eq!(distance_between_points(p, p), 0.0);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let points = sample_points();
    for &a in &points {
        for &b in &points {
            assert_eq!(distance_between_points(a, b), distance_between_points(b, a));
        }
    }
}

#[test]
fn test_triangle_inequality() {
    let points = sample_points();
    for &a in points.iter().step_by(3) {
        for &b in points.iter().step_by(2) {
            for &c in &points {
                let direct = distance_between_points(a, c);
                let detour = distance_between_points(a, b) + distance_between_points(b, c);
                assert!(direct <= detour + EPS, "{:?} {:?} {:?}", a, b, c);
            }
        }
    }
}

#[test]
fn test_reference_values() {
    assert_eq!(distance_between_points(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    assert_eq!(angle_between_points(Point::new(0.0, 0.0), Point::new(1.0, 0.0)), 0.0);

    let origin = Point::new(0.0, 0.0);
    assert!(circle_collision(make_circle(origin, 5.0), make_circle(Point::new(8.0, 0.0), 5.0)));
    assert!(!circle_collision(make_circle(origin, 1.0), make_circle(Point::new(10.0, 0.0), 1.0)));
    assert!(circle_collision(make_circle(origin, 3.0), make_circle(Point::new(6.0, 0.0), 3.0)));
}

#[test]
fn test_angle_between_points_range() {
    let points = sample_points();
    for &a in &points {
        assert_eq!(angle_between_points(a, a), 0.0);
        for &b in &points {
            let angle = angle_between_points(a, b);
            assert!(angle > -PI && angle <= PI, "{} out of range", angle);
        }
    }
}

#[test]
fn test_angle_between_lines_symmetric_and_bounded() {
    let lines = sample_lines();
    for &l1 in &lines {
        for &l2 in &lines {
            let a = angle_between_lines(l1, l2);
            assert!((0.0..=PI).contains(&a), "{} out of range", a);
            assert!((a - angle_between_lines(l2, l1)).abs() < EPS);
        }
    }
}

#[test]
fn test_distance_between_lines_properties() {
    let lines = sample_lines();
    for &l1 in &lines {
        assert_eq!(distance_between_lines(l1, l1), 0.0);
        for &l2 in &lines {
            let d = distance_between_lines(l1, l2);
            assert!(d >= 0.0);
            assert!((d - distance_between_lines(l2, l1)).abs() < EPS);
            // Never farther than any pair of endpoints
            let endpoint_min = [
                distance_between_points(l1.point1, l2.point1),
                distance_between_points(l1.point1, l2.point2),
                distance_between_points(l1.point2, l2.point1),
                distance_between_points(l1.point2, l2.point2),
            ]
            .into_iter()
            .fold(f64::INFINITY, f64::min);
            assert!(d <= endpoint_min + EPS);
        }
    }
}

#[test]
fn test_circle_constructor_round_trip() {
    let center = Point::new(-3.25, 8.5);
    let circle = make_circle(center, 0.125);
    assert_eq!(circle.center.x, -3.25);
    assert_eq!(circle.center.y, 8.5);
    assert_eq!(circle.radius, 0.125);
}
