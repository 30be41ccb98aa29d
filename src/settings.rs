//! Game settings and preferences
//!
//! Persisted as JSON next to the score file. Preferences only; game state
//! is never saved here.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Show the FPS counter in the debug overlay
    pub show_fps: bool,
    /// Run the built-in autopilot demo in the headless binary
    pub demo: bool,
    /// Demo length in simulated seconds
    pub demo_seconds: f32,
    /// Fixed RNG seed; `None` seeds from the wall clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: true,
            demo: true,
            demo_seconds: 60.0,
            seed: None,
        }
    }
}

impl Settings {
    /// Load from `path`, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {path:?}");
                    settings
                }
                Err(err) => {
                    log::warn!("settings file {path:?} is corrupt ({err}), using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("settings saved to {path:?}");
        Ok(())
    }
}
