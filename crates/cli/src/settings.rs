use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use emojify_core::shared::constants::{EYE_OPEN_THRESHOLD, SMILE_THRESHOLD};

/// Persistent defaults, overridden per run by command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub smile_threshold: f32,
    pub eye_open_threshold: f32,
    pub assets_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            smile_threshold: SMILE_THRESHOLD,
            eye_open_threshold: EYE_OPEN_THRESHOLD,
            assets_dir: None,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Emojify").join("settings.json"))
    }

    /// Loads from `path`, or the platform config file when `None`.
    /// Missing or malformed files yield the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::config_path(),
        };
        path.and_then(|path| fs::read_to_string(path).ok())
            .and_then(|json| match serde_json::from_str(&json) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    log::warn!("Ignoring malformed settings: {e}");
                    None
                }
            })
            .unwrap_or_default()
    }
}
