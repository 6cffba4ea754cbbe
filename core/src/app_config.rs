//! Persisted user defaults
//!
//! Stored through confy in the platform config directory
//! (`~/.config/reptimer/` on Linux). Command-line flags override
//! individual fields for a single run; the file supplies everything the
//! user leaves out.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seconds to wait before the first repetition
    #[serde(default = "default_prelude_secs")]
    pub prelude_secs: f32,

    /// Active seconds per repetition
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f32,

    /// Seconds to rest between repetitions
    #[serde(default = "default_rest_secs")]
    pub rest_secs: f32,

    /// Number of repetitions per session
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,

    /// Directory holding the numbered count sounds
    #[serde(default = "default_sound_dir")]
    pub sound_dir: String,

    /// Forced count-sound extension; None means probe the directory
    #[serde(default)]
    pub sound_postfix: Option<String>,

    /// Sound played at the end of each repetition
    #[serde(default = "default_end_sound")]
    pub end_sound: String,
}

fn default_prelude_secs() -> f32 {
    3.0
}

fn default_duration_secs() -> f32 {
    5.0
}

fn default_rest_secs() -> f32 {
    3.0
}

fn default_repetitions() -> u32 {
    10
}

fn default_sound_dir() -> String {
    "~/Music/".to_string()
}

fn default_end_sound() -> String {
    "end.wav".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prelude_secs: default_prelude_secs(),
            duration_secs: default_duration_secs(),
            rest_secs: default_rest_secs(),
            repetitions: default_repetitions(),
            sound_dir: default_sound_dir(),
            sound_postfix: None,
            end_sound: default_end_sound(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        confy::load("reptimer", None).unwrap_or_default()
    }
}
