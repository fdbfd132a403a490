//! Runtime configuration
//!
//! A small JSON settings file selects which entity variant the demo spawns
//! and the target tick rate. A missing or corrupt file degrades to
//! defaults with a log line, never an error.

use serde::{Deserialize, Serialize};

/// Which entity variant the demo spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RiderKind {
    #[default]
    Boat,
    Ball,
    TiltBall,
    Car,
}

impl RiderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiderKind::Boat => "Boat",
            RiderKind::Ball => "Ball",
            RiderKind::TiltBall => "TiltBall",
            RiderKind::Car => "Car",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "boat" => Some(RiderKind::Boat),
            "ball" => Some(RiderKind::Ball),
            "tiltball" | "tilt" => Some(RiderKind::TiltBall),
            "car" => Some(RiderKind::Car),
            _ => None,
        }
    }
}

/// Sandbox settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Entity variant to spawn
    pub rider: RiderKind,
    /// Target tick rate in Hz
    pub target_fps: u32,
    /// Frames between demo state log lines (0 disables them)
    pub log_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rider: RiderKind::default(),
            target_fps: crate::consts::TARGET_FPS,
            log_interval: 30,
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE: &'static str = "driftpad.json";

    /// Load from `path`, falling back to defaults on any failure
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(err) => {
                    log::warn!("Settings file {} is invalid ({}), using defaults", path, err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings file at {}, using defaults", path);
                Self::default()
            }
        }
    }

    /// Write to `path` as pretty JSON
    pub fn save(&self, path: &str) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path),
                Err(err) => log::warn!("Failed to save settings to {}: {}", path, err),
            }
        }
    }
}
