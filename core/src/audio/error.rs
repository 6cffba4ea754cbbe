//! Error types for audio playback

use std::path::PathBuf;
use thiserror::Error;

/// Errors while starting playback of a sound file
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to open sound file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode sound file {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("failed to open audio output device")]
    Device(#[source] rodio::StreamError),

    #[error("failed to create audio sink")]
    Sink(#[source] rodio::PlayError),

    #[error("audio output is not initialized")]
    NotInitialized,
}
