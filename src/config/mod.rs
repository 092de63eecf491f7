use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::wav::format::{WavFormat, DEFAULT_BIT_DEPTH, DEFAULT_SAMPLE_RATE};
use crate::wav::writer::DEFAULT_AMPLITUDE;

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToneConfig {
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub tone: ToneSettings,

    #[serde(default)]
    pub format: FormatSettings,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            tone: ToneSettings::default(),
            format: FormatSettings::default(),
        }
    }
}

impl ToneConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ToneConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(anyhow!("Output path must not be empty"));
        }

        self.tone.validate().context("Invalid tone settings")?;
        self.wav_format().context("Invalid format settings")?;

        Ok(())
    }

    /// Build the container format described by the config
    pub fn wav_format(&self) -> Result<WavFormat> {
        Ok(WavFormat::mono(
            self.format.samplerate,
            self.format.bitdepth,
        )?)
    }
}

/// Tone parameters; missing frequency or duration are asked for interactively
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToneSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
}

impl Default for ToneSettings {
    fn default() -> Self {
        Self {
            frequency: None,
            duration: None,
            amplitude: default_amplitude(),
        }
    }
}

impl ToneSettings {
    pub fn validate(&self) -> Result<()> {
        if !self.amplitude.is_finite() || self.amplitude.abs() > 1.0 {
            return Err(anyhow!("Amplitude must be between -1.0 and 1.0"));
        }
        // Frequency and duration are range-checked by the writer
        Ok(())
    }
}

/// WAV container settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormatSettings {
    #[serde(default = "default_sample_rate")]
    pub samplerate: u32,

    #[serde(default = "default_bit_depth")]
    pub bitdepth: u16,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            samplerate: default_sample_rate(),
            bitdepth: default_bit_depth(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("outputAudio.wav")
}

fn default_amplitude() -> f64 {
    DEFAULT_AMPLITUDE
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_bit_depth() -> u16 {
    DEFAULT_BIT_DEPTH
}
