//! Sandbox state
//!
//! The sandbox owns the level, the shared collision index, and the entity
//! roster. Entities update in spawn order, so later entities see earlier
//! entities' already-moved rectangles within the same frame.

use glam::Vec2;

use super::collision::CollisionIndex;
use super::entity::{Ball, Boat, Car, Entity, RenderPayload, Shape, TiltBall};
use super::level::Level;

/// Loop phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stopped,
}

/// The whole simulation for one run
#[derive(Debug)]
pub struct Sandbox {
    pub phase: Phase,
    pub index: CollisionIndex,
    pub level: Level,
    pub entities: Vec<Entity>,
}

impl Sandbox {
    /// Build a sandbox around the built-in sample level
    pub fn new() -> Self {
        let mut index = CollisionIndex::new();
        let level = Level::sample(&mut index);
        Self {
            phase: Phase::Running,
            index,
            level,
            entities: Vec::new(),
        }
    }

    /// Build around an arbitrary grid
    pub fn with_level(rows: &[&str], tile_w: f32, tile_h: f32) -> Self {
        let mut index = CollisionIndex::new();
        let level = Level::load(rows, tile_w, tile_h, &mut index);
        Self {
            phase: Phase::Running,
            index,
            level,
            entities: Vec::new(),
        }
    }

    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Append an entity; update order is spawn order
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn spawn_boat(&mut self, pos: Vec2) {
        self.spawn(Entity::Boat(Boat::new(pos)));
    }

    /// Spawn the collision-aware ball, wiring it into the index
    pub fn spawn_ball(&mut self, pos: Vec2) {
        let ball = Ball::new(pos, &mut self.index);
        self.spawn(Entity::Ball(ball));
    }

    pub fn spawn_tilt_ball(&mut self, pos: Vec2) {
        let ball = TiltBall::new(pos, &mut self.index);
        self.spawn(Entity::TiltBall(ball));
    }

    pub fn spawn_car(&mut self, pos: Vec2) {
        self.spawn(Entity::Car(Car::new(pos)));
    }

    /// Frame draw list: the level's walls first, then entities in spawn
    /// order (paint order)
    pub fn render_payloads(&self) -> Vec<RenderPayload> {
        let walls = RenderPayload {
            shapes: self
                .level
                .walls
                .iter()
                .map(|w| Shape::Rect {
                    rect: w.rect,
                    color: [0, 0, 0],
                })
                .collect(),
            label: None,
        };
        std::iter::once(walls)
            .chain(self.entities.iter().map(|e| e.render_payload()))
            .collect()
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}
