use std::f64::consts::TAU;

use crate::error::{Fault, ToneError, ToneResult};

/// Sine oscillator with phase accumulation
/// The phase increment is fixed at construction; only the phase moves
pub struct Oscillator {
    /// Current phase position in radians (0.0 to 2π)
    phase: f64,
    /// Phase increment per sample (2π * frequency / sample_rate)
    phase_delta: f64,
    /// Frequency in Hz
    frequency: f64,
    /// Peak output level
    amplitude: f64,
}

/// Reject frequencies the output format cannot represent
/// Anything above Nyquist (half the sample rate) aliases
pub fn check_frequency(frequency: f64, sample_rate: u32) -> ToneResult<()> {
    if !frequency.is_finite() {
        return Err(ToneError::invalid("frequency", frequency, Fault::NotFinite));
    }
    if frequency < 0.0 {
        return Err(ToneError::invalid("frequency", frequency, Fault::Negative));
    }
    let ceiling = sample_rate as f64 / 2.0;
    if frequency > ceiling {
        return Err(ToneError::invalid(
            "frequency",
            frequency,
            Fault::AboveNyquist { ceiling },
        ));
    }
    Ok(())
}

impl Oscillator {
    /// Create a new oscillator for the given sample rate
    pub fn new(frequency: f64, amplitude: f64, sample_rate: u32) -> ToneResult<Self> {
        if sample_rate == 0 {
            return Err(ToneError::invalid("sample rate", 0.0, Fault::ZeroSampleRate));
        }
        check_frequency(frequency, sample_rate)?;
        if !amplitude.is_finite() {
            return Err(ToneError::invalid("amplitude", amplitude, Fault::NotFinite));
        }
        if amplitude.abs() > 1.0 {
            return Err(ToneError::invalid(
                "amplitude",
                amplitude,
                Fault::AmplitudeOutOfBounds,
            ));
        }

        Ok(Self {
            phase: 0.0,
            phase_delta: TAU * frequency / sample_rate as f64,
            frequency,
            amplitude,
        })
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Generate next sample and advance phase
    pub fn next_sample(&mut self) -> f64 {
        let output = self.amplitude * self.phase.sin();

        // Advance phase and wrap around
        self.phase += self.phase_delta;
        if self.phase >= TAU {
            self.phase -= TAU;
        }

        output
    }
}

impl Iterator for Oscillator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillator_creates() {
        let osc = Oscillator::new(440.0, 0.2, 48000).unwrap();
        assert_eq!(osc.frequency(), 440.0);
        assert_eq!(osc.amplitude(), 0.2);
    }

    #[test]
    fn test_first_sample_is_zero() {
        let mut osc = Oscillator::new(440.0, 0.2, 48000).unwrap();
        assert_eq!(osc.next_sample(), 0.0);
    }

    #[test]
    fn test_quarter_period_peak() {
        // 12000 Hz at 48 kHz: four samples per cycle
        let mut osc = Oscillator::new(12000.0, 0.5, 48000).unwrap();
        let samples: Vec<f64> = osc.by_ref().take(4).collect();
        assert!(samples[0].abs() < 1e-12);
        assert!((samples[1] - 0.5).abs() < 1e-12);
        assert!(samples[2].abs() < 1e-12);
        assert!((samples[3] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_matches_closed_form() {
        let mut osc = Oscillator::new(440.0, 0.2, 48000).unwrap();
        for n in 0..48000u32 {
            let expected = 0.2 * (TAU * 440.0 * n as f64 / 48000.0).sin();
            let sample = osc.next_sample();
            assert!(
                (sample - expected).abs() < 1e-9,
                "sample {} drifted: {} vs {}",
                n,
                sample,
                expected
            );
        }
    }

    #[test]
    fn test_stays_within_amplitude() {
        let osc = Oscillator::new(1234.5, 0.2, 48000).unwrap();
        assert!(osc.take(10000).all(|s| s.abs() <= 0.2));
    }

    #[test]
    fn test_zero_frequency_is_silent() {
        let osc = Oscillator::new(0.0, 0.2, 48000).unwrap();
        assert!(osc.take(1000).all(|s| s == 0.0));
    }

    #[test]
    fn test_rejects_negative_frequency() {
        let err = Oscillator::new(-1.0, 0.2, 48000).err().unwrap();
        assert!(matches!(
            err,
            ToneError::InvalidParameter {
                fault: Fault::Negative,
                ..
            }
        ));
    }

    #[test]
    fn test_nyquist_ceiling() {
        assert!(Oscillator::new(24000.0, 0.2, 48000).is_ok());
        let err = Oscillator::new(24000.5, 0.2, 48000).err().unwrap();
        assert_eq!(err.code(), 103);
        // Ceiling follows the sample rate
        assert!(check_frequency(22050.0, 44100).is_ok());
        assert!(check_frequency(22051.0, 44100).is_err());
    }

    #[test]
    fn test_rejects_bad_amplitude() {
        assert!(Oscillator::new(440.0, 1.5, 48000).is_err());
        assert!(Oscillator::new(440.0, f64::NAN, 48000).is_err());
        assert!(Oscillator::new(440.0, -1.0, 48000).is_ok());
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        assert!(Oscillator::new(440.0, 0.2, 0).is_err());
    }
}
