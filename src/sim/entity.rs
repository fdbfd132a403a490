//! Kinematic entity variants
//!
//! Four movement models share one surface: advance against the frame's
//! input snapshot and elapsed milliseconds, report bounds, and emit a draw
//! payload. Only the ball resolves against the collision index; the tilt
//! board holds a membership but never queries.

use glam::Vec2;

use super::collision::{CollisionIndex, MemberId};
use super::input::{Action, InputState};
use super::rect::Aabb;
use crate::consts::*;
use crate::rotate_deg;

/// RGB color carried in draw payloads
pub type Rgb = [u8; 3];

/// Draw primitives a render collaborator can consume
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle { center: Vec2, radius: f32, color: Rgb },
    Rect { rect: Aabb, color: Rgb },
    Line { from: Vec2, to: Vec2, color: Rgb },
}

/// Per-entity draw list plus an optional debug overlay string
#[derive(Debug, Clone, Default)]
pub struct RenderPayload {
    pub shapes: Vec<Shape>,
    pub label: Option<String>,
}

/// Omnidirectional mover with a single accel/decel accumulator.
///
/// Speed ramps while any action is held and bleeds off faster once all are
/// released. Direction is the raw signed key sum, so diagonal travel is
/// faster than cardinal travel.
#[derive(Debug, Clone)]
pub struct Boat {
    pub pos: Vec2,
    /// Acceleration accumulator, saturating in [0, BOAT_ACCEL_MAX]
    pub accel_t: f32,
}

impl Boat {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, accel_t: 0.0 }
    }

    pub fn update(&mut self, input: &InputState, dt_ms: f32) {
        let dt = dt_ms / 1000.0;
        let dir = input.axis();

        if input.any_pressed() {
            self.accel_t += BOAT_ACCEL_RATE * dt;
        } else {
            self.accel_t -= BOAT_DECEL_RATE * dt;
        }
        self.accel_t = self.accel_t.clamp(0.0, BOAT_ACCEL_MAX);

        let speed = BOAT_SPEED_FACTOR * self.accel_t;
        self.pos += speed * dir * dt;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, BOAT_RADIUS, BOAT_RADIUS)
    }
}

/// Collision-aware ball driven by per-axis speed accumulators.
///
/// Accumulators change only while a key is held; releasing keys freezes
/// them where they are. The travel vector accumulates the speeds every tick
/// and is never reset, and the whole of it is applied as the displacement
/// each tick.
#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Aabb,
    /// Per-axis speed accumulators (units per tick)
    pub speed: Vec2,
    /// Cumulative displacement re-applied every tick
    pub travel: Vec2,
    member: MemberId,
}

impl Ball {
    pub fn new(pos: Vec2, index: &mut CollisionIndex) -> Self {
        let rect = Aabb::from_center(pos, BALL_RADIUS, BALL_RADIUS);
        let member = index.register(rect);
        Self {
            rect,
            speed: Vec2::ZERO,
            travel: Vec2::ZERO,
            member,
        }
    }

    pub fn update(&mut self, input: &InputState, dt_ms: f32, index: &mut CollisionIndex) {
        if input.pressed(Action::Up) {
            self.speed.y -= BALL_ACCEL * dt_ms;
        }
        if input.pressed(Action::Down) {
            self.speed.y += BALL_ACCEL * dt_ms;
        }
        if input.pressed(Action::Left) {
            self.speed.x -= BALL_ACCEL * dt_ms;
        }
        if input.pressed(Action::Right) {
            self.speed.x += BALL_ACCEL * dt_ms;
        }

        self.travel += self.speed;
        self.slide(self.travel, index);
    }

    /// Move by `delta`, resolving X strictly before Y.
    ///
    /// Each axis: displace, query the index, and clamp the leading edge to
    /// the first reported rectangle's facing edge. The X-before-Y order is
    /// a fixed tie-break for diagonal contacts.
    pub fn slide(&mut self, delta: Vec2, index: &mut CollisionIndex) {
        self.rect.x += delta.x;
        let hits = index.query(self.member, self.rect);
        if let Some(wall) = hits.first() {
            if delta.x > 0.0 {
                self.rect.set_right(wall.left());
            } else if delta.x < 0.0 {
                self.rect.set_left(wall.right());
            }
        }
        index.set_rect(self.member, self.rect);

        self.rect.y += delta.y;
        let hits = index.query(self.member, self.rect);
        if let Some(wall) = hits.first() {
            if delta.y > 0.0 {
                self.rect.set_bottom(wall.top());
            } else if delta.y < 0.0 {
                self.rect.set_top(wall.bottom());
            }
        }
        index.set_rect(self.member, self.rect);
    }

    pub fn pos(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn bounds(&self) -> Aabb {
        self.rect
    }
}

/// Tilt-board ball: input tilts a virtual board and the ball reports where
/// it would head, without its position ever changing.
#[derive(Debug, Clone)]
pub struct TiltBall {
    pub pos: Vec2,
    /// Board tilt in degrees per axis, clamped to +-TILT_MAX_ANGLE
    pub angles: Vec2,
    /// Aim point TILT_AIM_LENGTH along the tilt vector; the world origin
    /// while the board is flat
    pub aim: Vec2,
    /// Closed-form projected position for the current tilt
    pub preview: Vec2,
    /// Registry membership; the tilt ball never queries it
    pub member: MemberId,
}

impl TiltBall {
    pub fn new(pos: Vec2, index: &mut CollisionIndex) -> Self {
        let member = index.register(Aabb::from_center(pos, BALL_RADIUS, BALL_RADIUS));
        Self {
            pos,
            angles: Vec2::ZERO,
            aim: Vec2::ZERO,
            preview: pos,
            member,
        }
    }

    pub fn update(&mut self, input: &InputState, dt_ms: f32) {
        if input.pressed(Action::Up) {
            self.angles.y -= TILT_RATE * dt_ms;
        }
        if input.pressed(Action::Down) {
            self.angles.y += TILT_RATE * dt_ms;
        }
        if input.pressed(Action::Left) {
            self.angles.x -= TILT_RATE * dt_ms;
        }
        if input.pressed(Action::Right) {
            self.angles.x += TILT_RATE * dt_ms;
        }
        self.angles = self.angles.clamp(
            Vec2::splat(-TILT_MAX_ANGLE),
            Vec2::splat(TILT_MAX_ANGLE),
        );

        self.aim = if self.angles == Vec2::ZERO {
            Vec2::ZERO
        } else {
            self.pos + self.angles.normalize() * TILT_AIM_LENGTH
        };

        self.preview = self.pos
            + Vec2::new(
                Self::translation(self.angles.x, self.pos.x, dt_ms),
                Self::translation(self.angles.y, self.pos.y, dt_ms),
            );
    }

    /// Closed-form per-axis displacement for the current tilt.
    ///
    /// The radicand goes negative for downhill tilts; the resulting NaN is
    /// reported as-is rather than clamped.
    fn translation(angle_deg: f32, pos: f32, dt: f32) -> f32 {
        let a = TILT_ACCEL;
        0.5 * a * dt * dt + (2.0 * a * angle_deg.to_radians().sin() * pos * dt).sqrt() + pos
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, BALL_RADIUS, BALL_RADIUS)
    }
}

/// Bicycle-model car: scalar forward velocity plus a steering angle that
/// sweeps the heading through the turning radius.
#[derive(Debug, Clone)]
pub struct Car {
    pub pos: Vec2,
    /// Only the forward component is modeled; `vel.y` stays zero
    pub vel: Vec2,
    /// Heading in degrees
    pub heading: f32,
    pub accel: f32,
    pub steering: f32,
}

impl Car {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            heading: 0.0,
            accel: 0.0,
            steering: 0.0,
        }
    }

    pub fn update(&mut self, input: &InputState, dt_ms: f32) {
        if input.pressed(Action::Up) {
            self.accel += CAR_ACCEL_RATE * dt_ms;
        } else if input.pressed(Action::Down) {
            self.accel -= CAR_ACCEL_RATE * dt_ms;
        } else {
            self.accel = 0.0;
        }
        self.accel = self.accel.clamp(-CAR_MAX_ACCEL, CAR_MAX_ACCEL);

        if input.pressed(Action::Left) {
            self.steering += CAR_STEER_RATE * dt_ms;
        } else if input.pressed(Action::Right) {
            self.steering -= CAR_STEER_RATE * dt_ms;
        } else {
            self.steering = 0.0;
        }
        self.steering = self.steering.clamp(-CAR_MAX_STEER, CAR_MAX_STEER);

        self.vel.x += self.accel * dt_ms;

        // Zero steering means straight ahead; guards the division
        let angular_velocity = if self.steering != 0.0 {
            let turning_radius = CAR_LENGTH / self.steering.to_radians().tan();
            self.vel.x / turning_radius
        } else {
            0.0
        };

        self.pos += rotate_deg(self.vel, -self.heading) * dt_ms;
        self.heading += angular_velocity.to_degrees() * dt_ms;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, CAR_SIZE, CAR_SIZE)
    }
}

/// Tagged union over the four movement models
#[derive(Debug, Clone)]
pub enum Entity {
    Boat(Boat),
    Ball(Ball),
    TiltBall(TiltBall),
    Car(Car),
}

impl Entity {
    /// Advance by one frame of elapsed time
    pub fn update(&mut self, input: &InputState, dt_ms: f32, index: &mut CollisionIndex) {
        match self {
            Entity::Boat(boat) => boat.update(input, dt_ms),
            Entity::Ball(ball) => ball.update(input, dt_ms, index),
            Entity::TiltBall(ball) => ball.update(input, dt_ms),
            Entity::Car(car) => car.update(input, dt_ms),
        }
    }

    /// Current bounding rectangle
    pub fn bounds(&self) -> Aabb {
        match self {
            Entity::Boat(boat) => boat.bounds(),
            Entity::Ball(ball) => ball.bounds(),
            Entity::TiltBall(ball) => ball.bounds(),
            Entity::Car(car) => car.bounds(),
        }
    }

    /// Draw list for the render collaborator
    pub fn render_payload(&self) -> RenderPayload {
        match self {
            Entity::Boat(boat) => RenderPayload {
                shapes: vec![Shape::Circle {
                    center: boat.pos,
                    radius: BOAT_RADIUS,
                    color: [255, 0, 0],
                }],
                label: None,
            },
            Entity::Ball(ball) => RenderPayload {
                shapes: vec![Shape::Circle {
                    center: ball.pos(),
                    radius: BALL_RADIUS,
                    color: [255, 0, 0],
                }],
                label: None,
            },
            Entity::TiltBall(ball) => RenderPayload {
                shapes: vec![
                    Shape::Circle {
                        center: ball.pos,
                        radius: BALL_RADIUS,
                        color: [0, 0, 200],
                    },
                    Shape::Line {
                        from: ball.pos,
                        to: ball.aim,
                        color: [255, 0, 0],
                    },
                    Shape::Line {
                        from: ball.pos,
                        to: ball.preview,
                        color: [255, 255, 0],
                    },
                ],
                label: Some(format!(
                    "tilt ({:.1}, {:.1})",
                    ball.angles.x, ball.angles.y
                )),
            },
            Entity::Car(car) => RenderPayload {
                shapes: vec![Shape::Rect {
                    rect: car.bounds(),
                    color: [200, 0, 0],
                }],
                label: None,
            },
        }
    }
}
