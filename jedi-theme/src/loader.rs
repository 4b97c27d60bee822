//! Theme loader for JSON and TOML theme files.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::EnhancedThemeSpecification;
use crate::validate::validate_enhanced_theme;

const INLINE_ORIGIN: &str = "<inline>";

/// Loads and validates themes.
pub struct ThemeLoader;

impl ThemeLoader {
    /// Load a theme from a `.json` or `.toml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<EnhancedThemeSpecification> {
        let path = path.as_ref();
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => return Err(ThemeError::unsupported_format(path)),
        };

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ThemeError::file_not_found(path),
            _ => ThemeError::Io(e),
        })?;

        log::debug!("Loading theme from {:?}", path);
        let candidate = match format {
            Format::Json => parse_json(&content, path)?,
            Format::Toml => parse_toml(&content, path)?,
        };
        validate(&candidate)
    }

    /// Load a theme from JSON text.
    pub fn from_json_str(content: &str) -> ThemeResult<EnhancedThemeSpecification> {
        validate(&parse_json(content, Path::new(INLINE_ORIGIN))?)
    }

    /// Load a theme from TOML text.
    ///
    /// TOML has no null, so optional sections are simply left out.
    pub fn from_toml_str(content: &str) -> ThemeResult<EnhancedThemeSpecification> {
        validate(&parse_toml(content, Path::new(INLINE_ORIGIN))?)
    }
}

enum Format {
    Json,
    Toml,
}

fn parse_json(content: &str, origin: &Path) -> ThemeResult<Value> {
    serde_json::from_str(content).map_err(|e| ThemeError::parse_error(origin, e.to_string()))
}

fn parse_toml(content: &str, origin: &Path) -> ThemeResult<Value> {
    let table: toml::Value = toml::from_str(content).map_err(|e| ThemeError::parse_error(origin, e.to_string()))?;
    serde_json::to_value(table).map_err(|e| ThemeError::parse_error(origin, e.to_string()))
}

fn validate(candidate: &Value) -> ThemeResult<EnhancedThemeSpecification> {
    validate_enhanced_theme(candidate).map_err(ThemeError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationCode;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("jedi-loader-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_json_string() {
        let theme = ThemeLoader::from_json_str(r#"{"spacing": {"1": "0.25rem"}}"#).unwrap();
        assert_eq!(theme.theme.spacing.unwrap()["1"], "0.25rem");
    }

    #[test]
    fn test_toml_string() {
        let theme = ThemeLoader::from_toml_str(
            r#"
            [spacing]
            "1" = "0.25rem"

            [colorMode]
            defaultMode = "dark"

            [variants.compact.theme.spacing]
            "1" = "0.125rem"
            "#,
        )
        .unwrap();
        assert_eq!(theme.default_mode(), crate::theme::ThemeMode::Dark);
        assert!(theme.variants.contains_key("compact"));
    }

    #[test]
    fn test_parse_error() {
        let err = ThemeLoader::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ThemeError::ThemeParseError { .. }));
    }

    #[test]
    fn test_validation_errors_surface() {
        let err = ThemeLoader::from_json_str(r#"{"colorMode": {"defaultMode": "sepia"}}"#).unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors[0].code, ValidationCode::InvalidColorMode);
    }

    #[test]
    fn test_file_dispatch() {
        let json = temp_file("theme.json", r#"{"shadows": {"sm": "none"}}"#);
        assert!(ThemeLoader::from_file(&json).unwrap().theme.shadows.is_some());

        let toml = temp_file("theme.toml", "[shadows]\nsm = \"none\"\n");
        assert!(ThemeLoader::from_file(&toml).unwrap().theme.shadows.is_some());

        let yaml = temp_file("theme.yaml", "shadows: {}");
        assert!(matches!(
            ThemeLoader::from_file(&yaml),
            Err(ThemeError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("jedi-loader-missing").join("absent.json");
        assert!(matches!(
            ThemeLoader::from_file(path),
            Err(ThemeError::ThemeFileNotFound { .. })
        ));
    }
}
