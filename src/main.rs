mod config;
mod dsp;
mod error;
mod ui;
mod wav;

use anyhow::Result;
use clap::Parser;
use log::{debug, error};
use std::io;
use std::path::PathBuf;

use config::ToneConfig;
use ui::prompt::read_number;
use wav::writer::WavWriter;

/// Render a mono sine tone to a PCM WAV file
#[derive(Parser, Debug)]
#[command(name = "sine-wav")]
#[command(about = "Sine tone WAV generator", long_about = None)]
struct Args {
    /// Configuration file (YAML)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Output file, overrides the config
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ToneConfig::load(path)?,
        None => ToneConfig::default(),
    };
    if let Some(output) = args.output {
        config.output = output;
    }
    debug!("config {:?}", config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let frequency = match config.tone.frequency {
        Some(frequency) => frequency,
        None => read_number(&mut input, &mut output, "Enter frequency in Hz:")?,
    };
    let duration = match config.tone.duration {
        Some(duration) => duration,
        None => read_number(&mut input, &mut output, "Enter length in seconds:")?,
    };

    let writer = WavWriter::new(&config.output, config.wav_format()?)?
        .with_amplitude(config.tone.amplitude);

    println!("Generating audio file {}...", writer.path().display());
    match writer.write(frequency, duration) {
        Ok(summary) => {
            println!(
                "Audio file generated: {} ({} samples)",
                summary.path.display(),
                summary.sample_count
            );
            Ok(())
        }
        Err(err) => {
            error!("generation failed with code {}", err.code());
            Err(err.into())
        }
    }
}
