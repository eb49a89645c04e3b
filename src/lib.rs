//! 2D geometry helpers for SlideChat's drawing surface
//!
//! Points, lines, circles, "X" markers, and squares, with distance, angle,
//! and collision functions over them. `collision` adds an R-tree backed batch
//! checker and `server` exposes everything as newline-delimited JSON-RPC.
//!
//! # Example
//! ```
//! use slide_geometry::{circle_collision, distance_between_points, make_circle, Point};
//!
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(3.0, 4.0);
//! assert_eq!(distance_between_points(a, b), 5.0);
//! assert!(circle_collision(make_circle(a, 3.0), make_circle(Point::new(6.0, 0.0), 3.0)));
//! ```

pub mod collision;
pub mod geometry;
pub mod server;

pub use geometry::*;
pub use collision::{CollisionPair, CollisionRules};
