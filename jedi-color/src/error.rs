//! # Color Error Types
//!
//! Errors raised by color parsing and scale generation.

use thiserror::Error;

/// Errors that can occur while parsing or generating colors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The input was not a 6-digit hex color.
    #[error("Malformed hex color '{input}': expected 6 hex digits with an optional leading '#'")]
    MalformedHex {
        /// The offending input.
        input: String,
    },

    /// A numeric scale option was NaN or infinite.
    #[error("Scale option '{option}' must be a finite number, got {value}")]
    NonFiniteOption {
        /// The option name, e.g. `contrast`.
        option: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type alias for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

impl ColorError {
    /// Create a malformed hex error.
    pub fn malformed_hex(input: impl Into<String>) -> Self {
        Self::MalformedHex {
            input: input.into(),
        }
    }

    /// Create a non-finite option error.
    pub fn non_finite(option: &'static str, value: f64) -> Self {
        Self::NonFiniteOption { option, value }
    }
}
