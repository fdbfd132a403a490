//! Driftpad - a top-down 2D movement and collision sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collision index, level grid)
//! - `platform`: Input and clock collaborator seams
//! - `settings`: Runtime configuration

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{RiderKind, Settings};

use glam::Vec2;

/// Sandbox configuration constants
pub mod consts {
    /// Target tick rate (frames per second)
    pub const TARGET_FPS: u32 = 60;

    /// Level tile size in world units
    pub const TILE_W: f32 = 64.0;
    pub const TILE_H: f32 = 64.0;

    /// Boat accumulator ramp rates (units per second) and saturation cap
    pub const BOAT_ACCEL_RATE: f32 = 100.0;
    pub const BOAT_DECEL_RATE: f32 = 250.0;
    pub const BOAT_ACCEL_MAX: f32 = 250.0;
    /// Boat speed is the accumulator scaled by this factor
    pub const BOAT_SPEED_FACTOR: f32 = 2.0;
    pub const BOAT_RADIUS: f32 = 20.0;

    /// Ball per-axis speed gain (units per millisecond of held input)
    pub const BALL_ACCEL: f32 = 0.001;
    pub const BALL_RADIUS: f32 = 20.0;

    /// Tilt board angle ramp (degrees per millisecond) and clamp
    pub const TILT_RATE: f32 = 0.1;
    pub const TILT_MAX_ANGLE: f32 = 45.0;
    /// Acceleration constant in the tilt projection formula
    pub const TILT_ACCEL: f32 = 2.0;
    /// Length of the reported aim vector
    pub const TILT_AIM_LENGTH: f32 = 40.0;

    /// Car wheelbase, side length, and input ramp rates
    pub const CAR_LENGTH: f32 = 4.0;
    pub const CAR_SIZE: f32 = 10.0;
    pub const CAR_ACCEL_RATE: f32 = 1.0;
    pub const CAR_MAX_ACCEL: f32 = 5.0;
    pub const CAR_STEER_RATE: f32 = 30.0;
    pub const CAR_MAX_STEER: f32 = 30.0;
}

/// Rotate a vector by an angle given in degrees
#[inline]
pub fn rotate_deg(v: Vec2, deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
