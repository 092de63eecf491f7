//! Single-pass tone rendering into a WAV stream.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::format::WavFormat;
use super::header::WavHeader;
use crate::dsp::oscillator::{check_frequency, Oscillator};
use crate::error::{Fault, ToneError, ToneResult};

/// Nominal output level, kept low to protect ears and speakers
pub const DEFAULT_AMPLITUDE: f64 = 0.2;

/// What a successful write produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavSummary {
    pub path: PathBuf,
    pub sample_count: u32,
    pub bytes_written: u64,
}

/// Renders a sine tone to a WAV file
pub struct WavWriter {
    path: PathBuf,
    format: WavFormat,
    amplitude: f64,
}

impl WavWriter {
    pub fn new(path: impl Into<PathBuf>, format: WavFormat) -> ToneResult<Self> {
        // Re-check in case the format was built by hand
        let format = WavFormat::mono(format.sample_rate, format.bits_per_sample)?;
        Ok(Self {
            path: path.into(),
            format,
            amplitude: DEFAULT_AMPLITUDE,
        })
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check a request against the format, returning the number of samples to emit
    pub fn validate(&self, frequency: f64, duration: f64) -> ToneResult<u32> {
        self.header_for(frequency, duration).map(|header| header.sample_count)
    }

    /// Build the header for a request; every size is checked before any output exists
    fn header_for(&self, frequency: f64, duration: f64) -> ToneResult<WavHeader> {
        if !duration.is_finite() {
            return Err(ToneError::invalid("duration", duration, Fault::NotFinite));
        }
        if duration < 0.0 {
            return Err(ToneError::invalid("duration", duration, Fault::Negative));
        }
        let max_seconds = self.format.max_duration_seconds();
        if duration > max_seconds as f64 {
            return Err(ToneError::OutOfRange {
                duration,
                max_seconds,
            });
        }
        check_frequency(frequency, self.format.sample_rate)?;

        WavHeader::new(self.format, self.format.sample_count(duration)).ok_or(
            ToneError::OutOfRange {
                duration,
                max_seconds,
            },
        )
    }

    /// Validate, then create or truncate the destination and render into it
    /// A failure mid-stream leaves the partial file on disk
    pub fn write(&self, frequency: f64, duration: f64) -> ToneResult<WavSummary> {
        self.validate(frequency, duration)?;

        let file = File::create(&self.path).map_err(|e| ToneError::io(&self.path, e))?;
        let mut out = BufWriter::new(file);
        let bytes_written = self.write_to(&mut out, frequency, duration)?;
        out.flush().map_err(|e| ToneError::io(&self.path, e))?;

        let summary = WavSummary {
            path: self.path.clone(),
            sample_count: self.format.sample_count(duration),
            bytes_written,
        };
        info!(
            "wrote {} samples ({} bytes) to {}",
            summary.sample_count,
            summary.bytes_written,
            summary.path.display()
        );
        Ok(summary)
    }

    /// Render header and samples into any byte sink, returning the byte count
    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
        frequency: f64,
        duration: f64,
    ) -> ToneResult<u64> {
        let header = self.header_for(frequency, duration)?;
        let sample_count = header.sample_count;
        let mut oscillator = Oscillator::new(frequency, self.amplitude, self.format.sample_rate)?;

        debug!(
            "format {:?}, {} samples, chunk size {}, data size {}",
            self.format,
            sample_count,
            header.chunk_size(),
            header.data_size()
        );
        debug!(
            "oscillator {} Hz, amplitude {}",
            oscillator.frequency(),
            oscillator.amplitude()
        );

        let io_err = |e| ToneError::io(&self.path, e);
        header.write_to(writer).map_err(io_err)?;
        for _ in 0..sample_count {
            let value = self.format.quantize(oscillator.next_sample());
            self.format.write_sample(writer, value).map_err(io_err)?;
        }

        Ok(header.file_len())
    }
}
