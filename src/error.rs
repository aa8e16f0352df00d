//! Error types
//!
//! The kernel itself never fails mid-tick; errors only come out of body
//! construction and configuration loading.

use std::fmt;

/// Unified error type for setup-time failures
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A radius, width or height was not a positive finite number
    InvalidDimension {
        /// Which dimension was rejected
        what: &'static str,
        value: f32,
    },
    /// Mass must be positive and finite (it is divided by)
    InvalidMass(f32),
    /// A configuration value is out of range
    InvalidConfig { reason: String },
    /// Reading a config file failed
    Io(String),
    /// A config file was not valid JSON for `SimConfig`
    Parse(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { what, value } => {
                write!(f, "invalid {what}: {value} (must be positive and finite)")
            }
            Self::InvalidMass(m) => write!(f, "invalid mass: {m} (must be positive and finite)"),
            Self::InvalidConfig { reason } => write!(f, "invalid configuration: {reason}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Reject anything that is not a positive finite number
pub(crate) fn positive(what: &'static str, value: f32) -> Result<f32, SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidDimension { what, value })
    }
}
