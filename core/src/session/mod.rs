//! Session configuration
//!
//! Raw options (command line merged over persisted defaults) are resolved
//! once at startup into an immutable [`SessionConfig`]: the home directory
//! reference in the sound directory is expanded, the end sound is anchored
//! to the sound directory unless given as an absolute path, and the
//! count-sound extension is probed against the file named `1` in the
//! sound directory.

mod error;

pub use error::ConfigError;

use std::path::{Path, PathBuf};

/// Candidate count-sound extensions, probed in this order
const POSTFIX_CANDIDATES: [&str; 4] = ["wav", "ogg", "oga", "mp3"];

/// Raw session options before resolution.
///
/// Assembling this is the caller's job; the command-line layer merges
/// flags over [`crate::AppConfig`] and never leaks into the resolver.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub prelude_secs: f32,
    pub duration_secs: f32,
    pub rest_secs: f32,
    pub repetitions: u32,
    pub sound_dir: String,
    /// Forced count-sound extension; skips probing when set
    pub sound_postfix: Option<String>,
    pub end_sound: String,
}

/// Fully resolved session configuration, immutable for the rest of the run
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub prelude_secs: f32,
    pub duration_secs: f32,
    pub rest_secs: f32,
    pub repetitions: u32,
    pub sound_dir: PathBuf,
    /// Count-sound extension without the leading dot
    pub sound_postfix: String,
    pub end_sound: PathBuf,
}

impl SessionConfig {
    /// Resolve raw options into a session configuration.
    ///
    /// The only side effects are filesystem existence checks while
    /// probing for the count-sound extension.
    pub fn resolve(opts: SessionOptions) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("prelude-time", opts.prelude_secs),
            ("duration", opts.duration_secs),
            ("sleep", opts.rest_secs),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSeconds { field, value });
            }
        }
        if opts.repetitions == 0 {
            return Err(ConfigError::ZeroRepetitions);
        }

        let sound_dir = expand_home(&opts.sound_dir);

        let end_sound = if Path::new(&opts.end_sound).is_absolute() {
            PathBuf::from(&opts.end_sound)
        } else {
            sound_dir.join(&opts.end_sound)
        };

        let sound_postfix = match opts.sound_postfix {
            Some(postfix) => {
                let postfix = postfix.strip_prefix('.').unwrap_or(&postfix);
                postfix.to_string()
            }
            None => detect_postfix(&sound_dir).ok_or_else(|| ConfigError::NoCountSounds {
                dir: sound_dir.clone(),
            })?,
        };
        tracing::debug!(
            dir = %sound_dir.display(),
            postfix = %sound_postfix,
            "resolved count sound format"
        );

        Ok(Self {
            prelude_secs: opts.prelude_secs,
            duration_secs: opts.duration_secs,
            rest_secs: opts.rest_secs,
            repetitions: opts.repetitions,
            sound_dir,
            sound_postfix,
            end_sound,
        })
    }

    /// Path of the count sound announcing the given repetition number
    pub fn count_sound_path(&self, repetition: u32) -> PathBuf {
        self.sound_dir
            .join(format!("{}.{}", repetition, self.sound_postfix))
    }
}

/// Expand a leading `~` or `~/` to the user home directory.
///
/// Left untouched when the home directory cannot be determined.
fn expand_home(raw: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if raw == "~" {
            return home;
        }
        if let Some(rest) = raw.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// First candidate extension for which `1.<ext>` exists in the directory
fn detect_postfix(dir: &Path) -> Option<String> {
    POSTFIX_CANDIDATES
        .iter()
        .find(|ext| dir.join(format!("1.{ext}")).exists())
        .map(|ext| ext.to_string())
}
