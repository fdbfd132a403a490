//! Platform collaborator seams
//!
//! The sandbox consumes three collaborators: an input source (per-frame
//! pressed-state snapshot plus quit), a frame clock (elapsed milliseconds,
//! capped to the target rate), and a renderer. The renderer stays fully out
//! of crate; it consumes the sim's `RenderPayload`s.

use std::thread;
use std::time::{Duration, Instant};

use crate::sim::InputState;

/// Per-frame input snapshot provider
pub trait InputSource {
    /// Snapshot the pressed state for the coming frame
    fn poll(&mut self) -> InputState;
}

/// Replays a fixed sequence of snapshots, then holds quit.
///
/// Drives the demo binary and loop tests; a windowing frontend implements
/// [`InputSource`] over real keyboard state instead.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: Vec<InputState>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputState>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Append `count` frames holding the given snapshot
    pub fn hold(mut self, snapshot: InputState, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(snapshot, count));
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputState {
        match self.frames.get(self.cursor) {
            Some(snapshot) => {
                self.cursor += 1;
                *snapshot
            }
            None => InputState::quit_signal(),
        }
    }
}

/// Frame-rate limiting clock.
///
/// `tick` blocks out the remainder of the target interval, then reports the
/// elapsed milliseconds since the previous call.
#[derive(Debug)]
pub struct FrameClock {
    target: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            target: Duration::from_secs(1) / target_fps.max(1),
            last: Instant::now(),
        }
    }

    /// Sleep until the target interval has elapsed, then return the frame
    /// time in milliseconds
    pub fn tick(&mut self) -> f32 {
        let busy = self.last.elapsed();
        if busy < self.target {
            thread::sleep(self.target - busy);
        }
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        dt.as_secs_f32() * 1000.0
    }
}
