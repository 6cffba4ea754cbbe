//! Audio output backed by the default system device through rodio
//!
//! The stream is torn down and reopened on every `initialize` so a new
//! sound always replaces the previous one instead of mixing with it.
//! The sink is created paused; `play` flips it to audible.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::cpal::traits::{DeviceTrait, HostTrait};
use rodio::cpal::{self, SampleRate};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use super::{AudioOutput, PlaybackError};

#[derive(Default)]
pub struct RodioOutput {
    stream: Option<(OutputStream, OutputStreamHandle)>,
    sink: Option<Sink>,
}

impl RodioOutput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioOutput for RodioOutput {
    fn initialize(&mut self, sample_rate: Option<u32>) -> Result<(), PlaybackError> {
        self.stop();

        let (stream, handle) = open_stream(sample_rate)?;
        let sink = Sink::try_new(&handle).map_err(PlaybackError::Sink)?;
        sink.pause();

        self.stream = Some((stream, handle));
        self.sink = Some(sink);
        Ok(())
    }

    fn load(&mut self, path: &Path) -> Result<(), PlaybackError> {
        let sink = self.sink.as_ref().ok_or(PlaybackError::NotInitialized)?;

        let file = File::open(path).map_err(|source| PlaybackError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        sink.append(source);
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        let sink = self.sink.as_ref().ok_or(PlaybackError::NotInitialized)?;
        sink.play();
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.stream = None;
    }
}

/// Open an output stream, honoring a sample-rate hint when the default
/// device supports it
fn open_stream(
    sample_rate: Option<u32>,
) -> Result<(OutputStream, OutputStreamHandle), PlaybackError> {
    if let Some(rate) = sample_rate {
        if let Some(out) = try_stream_at_rate(rate) {
            return Ok(out);
        }
        tracing::debug!(rate, "device does not support requested sample rate");
    }
    OutputStream::try_default().map_err(PlaybackError::Device)
}

fn try_stream_at_rate(rate: u32) -> Option<(OutputStream, OutputStreamHandle)> {
    let device = cpal::default_host().default_output_device()?;
    let configs = device.supported_output_configs().ok()?;

    for range in configs {
        if range.min_sample_rate() <= SampleRate(rate) && SampleRate(rate) <= range.max_sample_rate()
        {
            let config = range.with_sample_rate(SampleRate(rate));
            if let Ok(out) = OutputStream::try_from_device_config(&device, config) {
                return Some(out);
            }
        }
    }
    None
}
