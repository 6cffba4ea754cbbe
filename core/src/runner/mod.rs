//! The timed repetition loop
//!
//! Waits the prelude, then for each repetition announces the count,
//! waits the active duration, plays the end sound and waits the rest
//! interval. All timing flows through the [`Clock`]; playback is
//! fire-and-forget through the [`crate::AudioOutput`].

mod clock;
mod error;


pub use clock::{Clock, WallClock};
pub use error::RunError;

use crate::audio::{AudioOutput, play_file};
use crate::session::SessionConfig;

/// Run one full exercise session.
///
/// Repetitions are announced in ascending order starting at 1. The rest
/// interval is waited after every repetition, including the last one.
pub fn run(
    config: &SessionConfig,
    output: &mut dyn AudioOutput,
    clock: &mut dyn Clock,
) -> Result<(), RunError> {
    tracing::info!(
        repetitions = config.repetitions,
        duration_secs = config.duration_secs,
        rest_secs = config.rest_secs,
        "starting session"
    );
    clock.wait(config.prelude_secs);

    for repetition in 1..=config.repetitions {
        let count_sound = config.count_sound_path(repetition);
        tracing::debug!(repetition, path = %count_sound.display(), "announcing repetition");
        play_file(output, &count_sound)
            .map_err(|source| RunError::CountSound { repetition, source })?;
        clock.wait(config.duration_secs);

        play_file(output, &config.end_sound)
            .map_err(|source| RunError::EndSound { repetition, source })?;
        clock.wait(config.rest_secs);
    }

    tracing::info!("session complete");
    Ok(())
}
