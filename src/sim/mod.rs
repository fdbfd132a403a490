//! Deterministic simulation module
//!
//! All sandbox logic lives here. This module must stay pure:
//! - Fixed per-frame stepping only
//! - Stable entity update order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod input;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{CollisionIndex, MemberId};
pub use entity::{Ball, Boat, Car, Entity, RenderPayload, Rgb, Shape, TiltBall};
pub use input::{Action, InputState};
pub use level::{Level, SAMPLE_LEVEL, Wall};
pub use rect::Aabb;
pub use state::{Phase, Sandbox};
pub use tick::tick;
