//! Batch collision checking for circles
//!
//! Uses R-tree spatial indexing for candidate pair filtering and Rayon for
//! parallel processing. A pair is reported when the center distance is at
//! most the radius sum plus the configured clearance, so with the default
//! rules the result matches pairwise `circle_collision` exactly.
//!
//! # Submodules
//! - `types` - Rules and result types
//! - `index` - R-tree wrapper and point queries
//! - `runners` - Full and targeted collision checks

mod types;
mod index;
mod runners;

pub use types::{CollisionPair, CollisionRules};

pub use index::{
    IndexedCircle,
    build_circle_index,
    circles_at_point,
};

pub use runners::{
    check_pair,
    run_full_collision_check,
    run_targeted_collision_check,
};
