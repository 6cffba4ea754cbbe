//! Error types for the repetition loop

use thiserror::Error;

use crate::audio::PlaybackError;

/// Fatal playback failures during a run.
///
/// Any failure ends the whole run immediately: a silent count
/// announcement would desynchronize the exerciser from the timer.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("can't play the count sound for repetition {repetition}")]
    CountSound {
        repetition: u32,
        #[source]
        source: PlaybackError,
    },

    #[error("can't play the end sound for repetition {repetition}")]
    EndSound {
        repetition: u32,
        #[source]
        source: PlaybackError,
    },
}
