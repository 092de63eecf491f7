//! WAV container parameters and sample quantization.

use std::io::{self, Write};

use crate::error::{Fault, ToneError, ToneResult};

pub const DEFAULT_SAMPLE_RATE: u32 = 48000;
pub const DEFAULT_BIT_DEPTH: u16 = 24;

/// Mono PCM format parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample (16, 24 or 32)
    pub bits_per_sample: u16,
    /// Always 1
    pub channels: u16,
}

impl Default for WavFormat {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            bits_per_sample: DEFAULT_BIT_DEPTH,
            channels: 1,
        }
    }
}

impl WavFormat {
    /// Creates a mono format, rejecting layouts the writer cannot encode
    pub fn mono(sample_rate: u32, bits_per_sample: u16) -> ToneResult<Self> {
        if sample_rate == 0 {
            return Err(ToneError::invalid("sample rate", 0.0, Fault::ZeroSampleRate));
        }
        if !matches!(bits_per_sample, 16 | 24 | 32) {
            return Err(ToneError::invalid(
                "bit depth",
                bits_per_sample as f64,
                Fault::UnsupportedBitDepth,
            ));
        }
        Ok(Self {
            sample_rate,
            bits_per_sample,
            channels: 1,
        })
    }

    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(self.block_align() as u32)
    }

    /// Largest positive sample value at this bit depth
    pub fn max_amplitude(&self) -> i32 {
        ((1i64 << (self.bits_per_sample - 1)) - 1) as i32
    }

    /// Longest whole duration whose ChunkSize (data plus 36 header bytes)
    /// fits a 32-bit size field
    pub fn max_duration_seconds(&self) -> u32 {
        (u32::MAX - 36) / self.byte_rate()
    }

    /// Number of samples emitted for a duration
    pub fn sample_count(&self, duration: f64) -> u32 {
        (self.sample_rate as f64 * duration).floor() as u32
    }

    /// Scale a normalized sample to the integer range, truncating toward zero
    /// The same scale applies to both signs
    pub fn quantize(&self, sample: f64) -> i32 {
        let max = self.max_amplitude() as f64;
        (sample * max).trunc().clamp(-max - 1.0, max) as i32
    }

    /// Two's-complement little-endian encoding, `bytes_per_sample` wide
    pub fn write_sample<W: Write>(&self, writer: &mut W, value: i32) -> io::Result<()> {
        let bytes = value.to_le_bytes();
        writer.write_all(&bytes[..self.bytes_per_sample() as usize])
    }
}
