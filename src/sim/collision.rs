//! Shared collision registry
//!
//! Walls and collision-aware entities each register an `Aabb`; queries
//! return every other member overlapping a probe rectangle, in registration
//! order. The subject's own entry is taken out for the duration of the scan
//! so no member ever collides with itself.

use super::rect::Aabb;

/// Handle to a registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberId(u32);

/// Ordered registry of collidable rectangles
#[derive(Debug, Default)]
pub struct CollisionIndex {
    entries: Vec<(MemberId, Aabb)>,
    next_id: u32,
}

impl CollisionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered members
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a rectangle to the registry. Earlier registrants come first in
    /// query results
    pub fn register(&mut self, rect: Aabb) -> MemberId {
        let id = MemberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, rect));
        id
    }

    /// Publish a member's moved rectangle so later updates this frame see it
    pub fn set_rect(&mut self, id: MemberId, rect: Aabb) {
        if let Some(entry) = self.entries.iter_mut().find(|(m, _)| *m == id) {
            entry.1 = rect;
        }
    }

    /// Stored rectangle for a member, if registered
    pub fn rect_of(&self, id: MemberId) -> Option<Aabb> {
        self.entries
            .iter()
            .find(|(m, _)| *m == id)
            .map(|(_, r)| *r)
    }

    /// All rectangles overlapping `probe`, excluding `subject`'s own entry,
    /// in registry order.
    ///
    /// The subject's entry is removed for the scan and re-appended at the
    /// back of the registry afterwards. A subject that was never registered
    /// is tolerated: the probe is tested against the full registry.
    pub fn query(&mut self, subject: MemberId, probe: Aabb) -> Vec<Aabb> {
        let removed = self
            .entries
            .iter()
            .position(|(m, _)| *m == subject)
            .map(|i| self.entries.remove(i));

        let hits = self
            .entries
            .iter()
            .filter(|(_, r)| r.overlaps(&probe))
            .map(|(_, r)| *r)
            .collect();

        if let Some(entry) = removed {
            self.entries.push(entry);
        }
        hits
    }
}
