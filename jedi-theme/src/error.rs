//! # Theme Error Types
//!
//! Error types for loading, validating and composing themes.
//!
//! Validation problems are not raised one at a time: they are collected into
//! a list of [ValidationError] values so a theme author sees every problem
//! in one pass. Style resolution never fails; its problems are reported as
//! [StyleWarning](crate::cascade::StyleWarning) values instead.

use std::fmt;
use std::path::PathBuf;

use jedi_color::ColorError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// Theme file was not found.
    #[error("Theme file not found: {path:?}")]
    ThemeFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a theme or configuration file.
    #[error("Failed to parse theme file {path:?}: {details}")]
    ThemeParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// The file extension is not one the loader understands.
    #[error("Unsupported theme file format: {path:?}")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// The theme failed structural validation.
    #[error("Theme failed validation with {} error(s){}", .0.len(), first_error(.0))]
    Validation(Vec<ValidationError>),

    /// A theme's `base` chain refers back to itself.
    #[error("Theme '{name}' extends itself through its base chain")]
    BaseCycle {
        /// The theme where the cycle was detected.
        name: String,
    },

    /// A color seed could not be turned into a scale.
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing or deserializing theme data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

fn first_error(errors: &[ValidationError]) -> String {
    errors
        .first()
        .map(|e| format!(": {}", e))
        .unwrap_or_default()
}

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create a theme file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ThemeFileNotFound { path: path.into() }
    }

    /// Create a theme parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ThemeParseError {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create a serialization error from any displayable error.
    pub fn serialization(error: impl fmt::Display) -> Self {
        Self::Serialization(error.to_string())
    }

    /// The validation errors, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error)
    }
}

/// Machine-readable category of a [ValidationError].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    /// The base theme has the wrong shape.
    InvalidTheme,
    /// The `colorMode` section has the wrong shape.
    InvalidColorMode,
    /// A named theme variant has the wrong shape.
    InvalidThemeVariant,
}

impl ValidationCode {
    /// The wire form of the code, e.g. `INVALID_THEME`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidTheme => "INVALID_THEME",
            Self::InvalidColorMode => "INVALID_COLOR_MODE",
            Self::InvalidThemeVariant => "INVALID_THEME_VARIANT",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structural problem found while validating a theme.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("[{code}] {path}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub code: ValidationCode,
    /// Human-readable description.
    pub message: String,
    /// Dot path of the offending value, empty for the root.
    pub path: String,
}

impl ValidationError {
    /// Create a validation error.
    pub fn new(code: ValidationCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_code_wire_form() {
        let json = serde_json::to_string(&ValidationCode::InvalidTheme).unwrap();
        assert_eq!(json, "\"INVALID_THEME\"");
        assert_eq!(ValidationCode::InvalidColorMode.to_string(), "INVALID_COLOR_MODE");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ThemeError::Validation(vec![ValidationError::new(
            ValidationCode::InvalidTheme,
            "colors.primary",
            "expected an object",
        )]);
        assert_eq!(
            err.to_string(),
            "Theme failed validation with 1 error(s): [INVALID_THEME] colors.primary: expected an object"
        );
        assert_eq!(err.validation_errors().map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(ThemeError::not_found("x"), ThemeError::ThemeNotFound { .. }));
        let err = ThemeError::from(ColorError::malformed_hex("#zz"));
        assert!(err.to_string().contains("#zz"));
    }
}
