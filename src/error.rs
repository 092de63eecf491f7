use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for tone generation
pub type ToneResult<T> = Result<T, ToneError>;

/// Why a parameter was rejected
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Fault {
    #[error("cannot use negative numbers")]
    Negative,
    #[error("not a finite number")]
    NotFinite,
    #[error("maximum frequency of {ceiling} Hz exceeded")]
    AboveNyquist { ceiling: f64 },
    #[error("amplitude must be within -1.0..=1.0")]
    AmplitudeOutOfBounds,
    #[error("supported bit depths are 16, 24 and 32")]
    UnsupportedBitDepth,
    #[error("sample rate must be positive")]
    ZeroSampleRate,
}

/// Errors raised while validating parameters or writing a tone
#[derive(Debug, Error)]
pub enum ToneError {
    #[error("invalid {name} {value}: {fault}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        fault: Fault,
    },

    #[error("maximum number of seconds exceeded: {duration} > {max_seconds}")]
    OutOfRange { duration: f64, max_seconds: u32 },

    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ToneError {
    pub fn invalid(name: &'static str, value: f64, fault: Fault) -> Self {
        ToneError::InvalidParameter { name, value, fault }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ToneError::Io {
            path: path.into(),
            source,
        }
    }

    /// Numeric code reported alongside the message
    /// 101 negative input, 102 too long, 103 frequency out of band
    pub fn code(&self) -> u16 {
        match self {
            ToneError::InvalidParameter { fault, .. } => match fault {
                Fault::Negative => 101,
                Fault::AboveNyquist { .. } => 103,
                _ => 100,
            },
            ToneError::OutOfRange { .. } => 102,
            ToneError::Io { .. } => 104,
        }
    }
}
