//! Logical input actions and the per-frame snapshot
//!
//! The keyboard is sampled once per frame into a read-only `InputState`;
//! every entity reads the same snapshot instead of polling keys itself.

use glam::Vec2;

/// A logical movement action, bound to the w/s/a/d keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// The key this action is bound to
    pub fn key(&self) -> char {
        match self {
            Action::Up => 'w',
            Action::Down => 's',
            Action::Left => 'a',
            Action::Right => 'd',
        }
    }
}

/// Pressed-state snapshot for one frame, plus the quit signal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: [bool; 4],
    pub quit: bool,
}

impl InputState {
    /// Snapshot carrying only the quit signal
    pub fn quit_signal() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    /// Snapshot with the given actions held
    pub fn holding(actions: &[Action]) -> Self {
        let mut state = Self::default();
        for action in actions {
            state.set(*action, true);
        }
        state
    }

    pub fn set(&mut self, action: Action, down: bool) {
        self.pressed[action as usize] = down;
    }

    pub fn pressed(&self, action: Action) -> bool {
        self.pressed[action as usize]
    }

    /// True while any movement action is held
    pub fn any_pressed(&self) -> bool {
        self.pressed.iter().any(|p| *p)
    }

    /// Raw signed key sum: (Right - Left, Down - Up). Not normalized, so a
    /// diagonal reads as length sqrt(2)
    pub fn axis(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.pressed(Action::Up) {
            dir.y -= 1.0;
        }
        if self.pressed(Action::Down) {
            dir.y += 1.0;
        }
        if self.pressed(Action::Left) {
            dir.x -= 1.0;
        }
        if self.pressed(Action::Right) {
            dir.x += 1.0;
        }
        dir
    }
}
