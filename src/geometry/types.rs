//! Core geometric primitives (Point, Line, Circle, IntersectionMarker, Square)

use serde::{Deserialize, Serialize};

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Segment between two points. The points may coincide.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    pub point1: Point,
    pub point2: Point,
}

impl Line {
    pub fn new(point1: Point, point2: Point) -> Self {
        Self { point1, point2 }
    }

    /// Direction vector from `point1` to `point2`
    pub fn direction(&self) -> [f64; 2] {
        [self.point2.x - self.point1.x, self.point2.y - self.point1.y]
    }

    pub fn length(&self) -> f64 {
        let [dx, dy] = self.direction();
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self) -> Point {
        midpoint(self.point1, self.point2)
    }

    /// True when both endpoints are the same point
    pub fn is_degenerate(&self) -> bool {
        let [dx, dy] = self.direction();
        dx == 0.0 && dy == 0.0
    }
}

/// Circle with center and radius (radius >= 0 is up to the caller)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Bounding box [min_x, min_y, max_x, max_y]
    pub fn bounds(&self) -> [f64; 4] {
        let r = self.radius.abs();
        [
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        ]
    }

    /// Points on the boundary count as inside
    pub fn contains_point(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        (dx * dx + dy * dy).sqrt() <= self.radius
    }
}

/// Two lines forming an "X" plus a center point.
///
/// `center` is whatever the caller passed in; it is not checked against the
/// actual crossing of `line1` and `line2`. Use [`IntersectionMarker::from_lines`]
/// to derive it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IntersectionMarker {
    pub line1: Line,
    pub line2: Line,
    pub center: Point,
}

impl IntersectionMarker {
    pub fn new(line1: Line, line2: Line, center: Point) -> Self {
        Self { line1, line2, center }
    }

    /// Marker centered on the crossing point of the two segments, if they cross
    pub fn from_lines(line1: Line, line2: Line) -> Option<Self> {
        super::lines::line_intersection(line1, line2).map(|center| Self::new(line1, line2, center))
    }
}

/// Axis-aligned rectangle described by its center and extents
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Square {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Square {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self { center, width, height }
    }

    /// Bounding box [min_x, min_y, max_x, max_y]; negative extents span the
    /// same box as their magnitude
    pub fn bounds(&self) -> [f64; 4] {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let (x1, x2) = (self.center.x - half_w, self.center.x + half_w);
        let (y1, y2) = (self.center.y - half_h, self.center.y + half_h);
        [x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)]
    }

    pub fn contains_point(&self, point: Point) -> bool {
        let [min_x, min_y, max_x, max_y] = self.bounds();
        point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
    }
}

pub fn make_circle(center: Point, radius: f64) -> Circle {
    Circle::new(center, radius)
}

pub fn make_line(point1: Point, point2: Point) -> Line {
    Line::new(point1, point2)
}

pub fn make_x(line1: Line, line2: Line, center: Point) -> IntersectionMarker {
    IntersectionMarker::new(line1, line2, center)
}

pub fn make_square(center: Point, width: f64, height: f64) -> Square {
    Square::new(center, width, height)
}

/// Midpoint of two points
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_keep_fields() {
        let center = Point::new(1.5, -2.25);
        let circle = make_circle(center, 7.0);
        assert_eq!(circle.center, center);
        assert_eq!(circle.radius, 7.0);

        let line = make_line(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(line.point1, Point::new(0.0, 0.0));
        assert_eq!(line.point2, Point::new(3.0, 4.0));

        let square = make_square(center, -2.0, 5.0);
        assert_eq!(square.width, -2.0);
        assert_eq!(square.height, 5.0);

        // center is stored as given, even when it is nowhere near the lines
        let x = make_x(line, line, Point::new(100.0, 100.0));
        assert_eq!(x.center, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_line_helpers() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(line.length(), 5.0);
        assert_eq!(line.midpoint(), Point::new(1.5, 2.0));
        assert!(!line.is_degenerate());
        assert!(Line::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0)).is_degenerate());
    }

    #[test]
    fn test_square_bounds() {
        let square = Square::new(Point::new(10.0, 10.0), 4.0, 2.0);
        assert_eq!(square.bounds(), [8.0, 9.0, 12.0, 11.0]);
        assert!(square.contains_point(Point::new(12.0, 11.0)));
        assert!(!square.contains_point(Point::new(12.1, 10.0)));

        let flipped = Square::new(Point::new(10.0, 10.0), -4.0, -2.0);
        assert_eq!(flipped.bounds(), square.bounds());
    }

    #[test]
    fn test_circle_contains_point() {
        let circle = Circle::new(Point::new(0.0, 0.0), 5.0);
        assert!(circle.contains_point(Point::new(3.0, 4.0)));
        assert!(!circle.contains_point(Point::new(3.0, 4.1)));
        assert_eq!(circle.bounds(), [-5.0, -5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_marker_from_lines() {
        let l1 = Line::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
        let l2 = Line::new(Point::new(0.0, -1.0), Point::new(0.0, 1.0));
        let marker = IntersectionMarker::from_lines(l1, l2).unwrap();
        assert_eq!(marker.center, Point::new(0.0, 0.0));

        let far = Line::new(Point::new(5.0, 5.0), Point::new(6.0, 6.0));
        assert!(IntersectionMarker::from_lines(l1, far).is_none());
    }

    #[test]
    fn test_serialization_field_names() {
        let circle = Circle::new(Point::new(1.0, 2.0), 3.0);
        let json = serde_json::to_value(circle).unwrap();
        assert_eq!(json["center"]["x"], 1.0);
        assert_eq!(json["radius"], 3.0);
    }
}
