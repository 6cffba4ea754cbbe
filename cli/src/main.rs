use std::process::ExitCode;

use clap::Parser;

use reptimer_core::{
    AppConfig, ConfigError, RodioOutput, RunError, SessionConfig, SessionOptions, WallClock, run,
};

mod logging;

/// Time exercise repetitions with audio cues
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Seconds to wait before starting the exercise set
    #[arg(short = 'p', long)]
    prelude_time: Option<f32>,

    /// Duration of one repetition in seconds
    #[arg(short, long)]
    duration: Option<f32>,

    /// Seconds to rest between repetitions
    #[arg(short, long)]
    sleep: Option<f32>,

    /// Number of repetitions
    #[arg(short, long)]
    repetitions: Option<u32>,

    /// Directory containing the numbered count sounds
    #[arg(long)]
    sound_dir: Option<String>,

    /// Force the count-sound file extension instead of probing for one
    #[arg(long)]
    sound_postfix: Option<String>,

    /// Sound played at the end of each repetition; absolute path, or a
    /// file name inside the sound directory
    #[arg(long)]
    end_sound: Option<String>,
}

impl Cli {
    /// Merge flags over the persisted defaults
    fn into_options(self, defaults: AppConfig) -> SessionOptions {
        SessionOptions {
            prelude_secs: self.prelude_time.unwrap_or(defaults.prelude_secs),
            duration_secs: self.duration.unwrap_or(defaults.duration_secs),
            rest_secs: self.sleep.unwrap_or(defaults.rest_secs),
            repetitions: self.repetitions.unwrap_or(defaults.repetitions),
            sound_dir: self.sound_dir.unwrap_or(defaults.sound_dir),
            sound_postfix: self.sound_postfix.or(defaults.sound_postfix),
            end_sound: self.end_sound.unwrap_or(defaults.end_sound),
        }
    }
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    let options = cli.into_options(AppConfig::load());
    let config = match SessionConfig::resolve(options) {
        Ok(config) => config,
        Err(err) => {
            report(&err);
            if matches!(err, ConfigError::NoCountSounds { .. }) {
                eprintln!(
                    "Check that the directory given by --sound-dir contains properly named \
                     sound files for all numbers up to the repetition count, \
                     e.g. 1.wav, 2.wav, ..., 12.wav."
                );
            }
            return ExitCode::from(1);
        }
    };

    let mut output = RodioOutput::new();
    let mut clock = WallClock;
    match run(&config, &mut output, &mut clock) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            match err {
                RunError::CountSound { .. } => eprintln!(
                    "Check that the directory given by --sound-dir contains properly named \
                     sound files for all numbers up to the repetition count, \
                     e.g. 1.wav, 2.wav, ..., 12.wav."
                ),
                RunError::EndSound { .. } => {
                    eprintln!("Check that --end-sound names an existing sound file.");
                }
            }
            ExitCode::from(2)
        }
    }
}

/// Print an error and its chain of causes to stderr
fn report(err: &dyn std::error::Error) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
