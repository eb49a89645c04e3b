//! Circle overlap tests

use super::points::distance_between_points;
use super::types::{Circle, Point};

/// True when the circles overlap or touch.
///
/// Touching circles (center distance exactly equal to the radius sum) collide.
/// NaN anywhere makes the comparison, and so the result, false.
pub fn circle_collision(circle1: Circle, circle2: Circle) -> bool {
    distance_between_points(circle1.center, circle2.center) <= circle1.radius + circle2.radius
}

/// Distance between the two boundaries; negative when the circles overlap
pub fn circle_gap(circle1: Circle, circle2: Circle) -> f64 {
    distance_between_points(circle1.center, circle2.center) - (circle1.radius + circle2.radius)
}

/// Point on the center-to-center segment halfway between the two boundaries
pub fn circle_contact_point(circle1: Circle, circle2: Circle) -> Point {
    let d = distance_between_points(circle1.center, circle2.center);
    if d == 0.0 {
        return circle1.center;
    }

    // Parameter along center1 -> center2 where the boundary midpoint sits
    let t = (d + circle1.radius - circle2.radius) / (2.0 * d);
    Point::new(
        circle1.center.x + (circle2.center.x - circle1.center.x) * t,
        circle1.center.y + (circle2.center.y - circle1.center.y) * t,
    )
}
