//! Audio output abstraction and the single-shot playback trigger

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, Source};

use super::PlaybackError;

/// A single owned audio output resource.
///
/// Playback goes through four steps: `stop` whatever is currently
/// playing, `initialize` the device (optionally at a specific sample
/// rate), `load` a file, `play` it. `play` returns once playback has
/// started; it never blocks until the sound finishes.
pub trait AudioOutput {
    fn initialize(&mut self, sample_rate: Option<u32>) -> Result<(), PlaybackError>;
    fn load(&mut self, path: &Path) -> Result<(), PlaybackError>;
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn stop(&mut self);
}

/// Play a sound file once, replacing any sound currently playing.
///
/// Wav files carry uncompressed frames at a fixed rate, so the device
/// is brought up at the file's native rate; other formats use the
/// default device configuration.
pub fn play_file(output: &mut dyn AudioOutput, path: &Path) -> Result<(), PlaybackError> {
    output.stop();
    let rate = if is_wav(path) {
        Some(wav_sample_rate(path)?)
    } else {
        None
    };
    output.initialize(rate)?;
    output.load(path)?;
    output.play()
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
}

/// Native frame rate of a wav file, read from its header
fn wav_sample_rate(path: &Path) -> Result<u32, PlaybackError> {
    let file = File::open(path).map_err(|source| PlaybackError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoder.sample_rate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::wav_fixture;
    use std::path::PathBuf;

    /// Records the order of trait calls made by the trigger
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl AudioOutput for Recorder {
        fn initialize(&mut self, sample_rate: Option<u32>) -> Result<(), PlaybackError> {
            self.calls.push(format!("initialize({sample_rate:?})"));
            Ok(())
        }

        fn load(&mut self, path: &Path) -> Result<(), PlaybackError> {
            self.calls.push(format!("load({})", path.display()));
            Ok(())
        }

        fn play(&mut self) -> Result<(), PlaybackError> {
            self.calls.push("play".to_string());
            Ok(())
        }

        fn stop(&mut self) {
            self.calls.push("stop".to_string());
        }
    }

    #[test]
    fn test_trigger_sequence_for_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.wav");
        wav_fixture::write_wav(&path, 22050);

        let mut output = Recorder::default();
        play_file(&mut output, &path).unwrap();

        assert_eq!(
            output.calls,
            vec![
                "stop".to_string(),
                "initialize(Some(22050))".to_string(),
                format!("load({})", path.display()),
                "play".to_string(),
            ]
        );
    }

    #[test]
    fn test_trigger_uses_default_device_config_for_compressed_formats() {
        let mut output = Recorder::default();
        play_file(&mut output, &PathBuf::from("/sounds/1.ogg")).unwrap();

        assert_eq!(output.calls[1], "initialize(None)");
    }

    #[test]
    fn test_missing_wav_fails_before_touching_the_device() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("4.wav");

        let mut output = Recorder::default();
        let err = play_file(&mut output, &path).unwrap_err();

        assert!(matches!(err, PlaybackError::Open { .. }));
        assert_eq!(output.calls, vec!["stop".to_string()]);
    }

    #[test]
    fn test_corrupt_wav_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.wav");
        std::fs::write(&path, b"not a wav file").unwrap();

        let mut output = Recorder::default();
        let err = play_file(&mut output, &path).unwrap_err();
        assert!(matches!(err, PlaybackError::Decode { .. }));
    }

    #[test]
    fn test_wav_sample_rate_reads_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        wav_fixture::write_wav(&path, 44100);

        assert_eq!(wav_sample_rate(&path).unwrap(), 44100);
    }
}
