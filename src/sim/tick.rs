//! Per-frame advance
//!
//! One tick: apply the quit signal, then update every entity in spawn
//! order against the shared input snapshot and collision index.

use super::input::InputState;
use super::state::{Phase, Sandbox};

/// Advance the sandbox by one frame of `dt_ms` elapsed milliseconds
pub fn tick(sandbox: &mut Sandbox, input: &InputState, dt_ms: f32) {
    if sandbox.phase == Phase::Stopped {
        return;
    }
    if input.quit {
        log::info!("Quit received, stopping");
        sandbox.phase = Phase::Stopped;
        return;
    }

    for entity in &mut sandbox.entities {
        entity.update(input, dt_ms, &mut sandbox.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Entity;
    use crate::sim::input::Action;
    use glam::Vec2;

    fn boat_pos(entity: &Entity) -> Vec2 {
        match entity {
            Entity::Boat(boat) => boat.pos,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_quit_stops_the_sandbox() {
        let mut sandbox = Sandbox::with_level(&[], 64.0, 64.0);
        sandbox.spawn_boat(Vec2::new(100.0, 100.0));

        tick(&mut sandbox, &InputState::quit_signal(), 16.0);
        assert_eq!(sandbox.phase, Phase::Stopped);

        // A stopped sandbox ignores further frames entirely
        let held = InputState::holding(&[Action::Right]);
        tick(&mut sandbox, &held, 1000.0);
        assert_eq!(boat_pos(&sandbox.entities[0]), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_entities_advance_in_spawn_order() {
        let mut sandbox = Sandbox::with_level(&[], 64.0, 64.0);
        sandbox.spawn_boat(Vec2::new(0.0, 0.0));
        sandbox.spawn_boat(Vec2::new(500.0, 0.0));

        let held = InputState::holding(&[Action::Right]);
        tick(&mut sandbox, &held, 100.0);

        // Both moved, and the roster kept its order
        assert!(boat_pos(&sandbox.entities[0]).x > 0.0);
        assert!(boat_pos(&sandbox.entities[1]).x > 500.0);
    }

    #[test]
    fn test_zero_dt_frame_changes_nothing() {
        let mut sandbox = Sandbox::with_level(&[], 64.0, 64.0);
        sandbox.spawn_boat(Vec2::new(100.0, 100.0));

        let held = InputState::holding(&Action::ALL);
        tick(&mut sandbox, &held, 0.0);
        assert_eq!(boat_pos(&sandbox.entities[0]), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_ball_sees_walls_through_the_sandbox_index() {
        // One wall two tiles down the column; the ball starts above it and
        // is pushed straight down until it rests on the wall's top edge
        let mut sandbox = Sandbox::with_level(&["  W"], 64.0, 64.0);
        sandbox.spawn_ball(Vec2::new(32.0, 60.0));

        let held = InputState::holding(&[Action::Down]);
        for _ in 0..20 {
            tick(&mut sandbox, &held, 100.0);
        }
        let rect = sandbox.entities[0].bounds();
        assert_eq!(rect.bottom(), 128.0);
    }
}
