//! Audio playback for count announcements and end-of-repetition cues
//!
//! This module provides:
//! - **[`AudioOutput`]**: the owned output resource (initialize, load,
//!   play, stop), mockable for tests
//! - **[`play_file`]**: the single-shot playback trigger
//! - **[`RodioOutput`]**: the production backend on the default device

mod error;
mod output;
mod rodio;

#[cfg(test)]
pub(crate) mod wav_fixture;

pub use error::PlaybackError;
pub use output::{AudioOutput, play_file};
pub use self::rodio::RodioOutput;
