//! Driftpad entry point
//!
//! Builds the sample sandbox, spawns the configured entity variant, and
//! runs the fixed-rate loop against a scripted input source. A windowing
//! frontend would swap in its own `InputSource` and consume the frame's
//! render payloads instead of the log lines.

use glam::Vec2;

use driftpad::platform::{FrameClock, InputSource, ScriptedInput};
use driftpad::settings::{RiderKind, Settings};
use driftpad::sim::{Action, InputState, Sandbox, tick};

fn main() {
    env_logger::init();

    let settings = Settings::load(Settings::FILE);
    log::info!(
        "Driftpad starting: {} at {} Hz",
        settings.rider.as_str(),
        settings.target_fps
    );

    let mut sandbox = Sandbox::new();
    match settings.rider {
        RiderKind::Boat => sandbox.spawn_boat(Vec2::new(100.0, 100.0)),
        RiderKind::Ball => sandbox.spawn_ball(Vec2::new(100.0, 200.0)),
        RiderKind::TiltBall => sandbox.spawn_tilt_ball(Vec2::new(100.0, 200.0)),
        RiderKind::Car => sandbox.spawn_car(Vec2::new(800.0, 800.0)),
    }
    log::info!("Level ready: {} walls", sandbox.level.walls.len());

    let mut input = demo_script();
    let mut clock = FrameClock::new(settings.target_fps);

    // First frame advances with zero elapsed time, like the clock's first
    // measurement
    let mut dt_ms = 0.0;
    let mut frame: u32 = 0;
    while sandbox.running() {
        let snapshot = input.poll();
        tick(&mut sandbox, &snapshot, dt_ms);

        if settings.log_interval > 0 && frame % settings.log_interval == 0 {
            let payloads = sandbox.render_payloads();
            if let Some(entity) = sandbox.entities.first() {
                let bounds = entity.bounds();
                log::debug!(
                    "Frame {}: {} payloads, rider at ({:.1}, {:.1})",
                    frame,
                    payloads.len(),
                    bounds.x,
                    bounds.y
                );
            }
        }

        dt_ms = clock.tick();
        frame += 1;
    }

    log::info!("Stopped after {} frames", frame);
}

/// A short drive: ramp up diagonally, coast to a stop, then quit
fn demo_script() -> ScriptedInput {
    ScriptedInput::default()
        .hold(InputState::holding(&[Action::Down, Action::Right]), 240)
        .hold(InputState::default(), 120)
}
