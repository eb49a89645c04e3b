//! Server state management for the geometry server

use crate::collision::{build_circle_index, CollisionRules, IndexedCircle};
use crate::geometry::Circle;
use indexmap::IndexMap;
use rstar::RTree;

/// Loaded circles, their spatial index, and the active collision rules
pub struct ServerState {
    /// Insertion ordered; reloading an id replaces its circle in place
    pub circles: IndexMap<u64, Circle>,
    pub spatial_index: Option<RTree<IndexedCircle>>,
    pub rules: CollisionRules,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            circles: IndexMap::new(),
            spatial_index: None,
            rules: CollisionRules::default(),
        }
    }

    pub fn has_circles(&self) -> bool {
        !self.circles.is_empty()
    }

    /// Add or replace circles and rebuild the spatial index
    pub fn load_circles(&mut self, circles: impl IntoIterator<Item = (u64, Circle)>) {
        for (id, circle) in circles {
            self.circles.insert(id, circle);
        }
        self.rebuild_index();
    }

    pub fn clear(&mut self) {
        self.circles.clear();
        self.spatial_index = None;
    }

    fn rebuild_index(&mut self) {
        let entries: Vec<(u64, Circle)> = self.circles.iter().map(|(&id, &c)| (id, c)).collect();
        self.spatial_index = Some(build_circle_index(&entries));
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
