//! Error types for session configuration resolution

use std::path::PathBuf;
use thiserror::Error;

/// Errors while resolving raw options into a session configuration.
///
/// All of these are fatal before the timing loop starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no count sound files found in {dir}")]
    NoCountSounds { dir: PathBuf },

    #[error("{field} must be a non-negative number of seconds (got {value})")]
    InvalidSeconds { field: &'static str, value: f32 },

    #[error("repetitions must be at least 1")]
    ZeroRepetitions,
}
