//! Geometry module for 2D UI primitives
//!
//! Stateless value types and pure functions: distances, angles, and collision
//! tests over points, lines, circles, "X" markers, and squares. Nothing here
//! returns an error; NaN and infinity propagate like ordinary float math.
//!
//! # Submodules
//! - `types` - Value types and their constructors
//! - `points` - Point distance and direction
//! - `lines` - Segment angles, intersections, and distances
//! - `circles` - Circle overlap tests

mod types;
mod points;
mod lines;
mod circles;

pub use types::{
    Point,
    Line,
    Circle,
    IntersectionMarker,
    Square,
    make_circle,
    make_line,
    make_x,
    make_square,
    midpoint,
};

pub use points::{
    distance_between_points,
    angle_between_points,
};

pub use lines::{
    angle_between_lines,
    signed_angle_between_lines,
    distance_between_lines,
    segment_distance,
    point_segment_distance,
    line_intersection,
};

pub use circles::{
    circle_collision,
    circle_gap,
    circle_contact_point,
};
