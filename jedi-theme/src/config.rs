//! # Engine Configuration
//!
//! Chooses the default theme, color mode and CSS variable options, and
//! lists extra theme files to load, from a TOML file, environment
//! variables or code.
//!
//! ## Overview
//!
//! - **[EngineConfig]**: the settings, plus [EngineConfig::build_registry]
//!   to turn them into a ready [ThemeRegistry]
//!
//! ## Environment Variables
//!
//! - `JEDI_THEME_CONFIG`: path to a TOML configuration file, read first
//! - `JEDI_THEME`: id of the theme to activate
//! - `JEDI_COLOR_MODE`: `light`, `dark` or `system`
//! - `JEDI_CSS_PREFIX`: prefix for CSS variable names
//!
//! ## Configuration File Format
//!
//! ```toml
//! default_theme = "brand"
//! fallback_theme = "default"
//! color_mode = "dark"
//!
//! [css]
//! prefix = "--brand"
//! flatten = true
//!
//! [theme_files]
//! brand = "themes/brand.json"
//! ```
//!
//! Relative theme file paths are resolved against the directory of the
//! configuration file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::css::CssVariableOptions;
use crate::error::{ThemeError, ThemeResult};
use crate::loader::ThemeLoader;
use crate::presets::DEFAULT_PRESET_ID;
use crate::registry::ThemeRegistry;
use crate::theme::ThemeMode;

/// Path of a TOML configuration file.
pub const ENV_CONFIG: &str = "JEDI_THEME_CONFIG";
/// Theme to activate.
pub const ENV_THEME: &str = "JEDI_THEME";
/// Color mode.
pub const ENV_COLOR_MODE: &str = "JEDI_COLOR_MODE";
/// CSS variable prefix.
pub const ENV_CSS_PREFIX: &str = "JEDI_CSS_PREFIX";

/// Engine settings.
///
/// # Examples
///
/// ```rust
/// use jedi_theme::config::EngineConfig;
/// use jedi_theme::theme::ThemeMode;
///
/// let config = EngineConfig::new()
///     .with_default_theme("purple")
///     .with_color_mode(ThemeMode::Dark);
///
/// let registry = config.build_registry().unwrap();
/// assert_eq!(registry.active_id(), Some("purple"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Id of the theme to activate.
    pub default_theme: String,
    /// Theme to activate when the default cannot be.
    pub fallback_theme: Option<String>,
    /// Initial color mode.
    pub color_mode: ThemeMode,
    /// Initial host dark preference for `system` mode.
    pub system_prefers_dark: bool,
    /// CSS variable options.
    pub css: CssVariableOptions,
    /// Extra themes to register, by id.
    pub theme_files: IndexMap<String, PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_theme: DEFAULT_PRESET_ID.to_string(),
            fallback_theme: Some(DEFAULT_PRESET_ID.to_string()),
            color_mode: ThemeMode::System,
            system_prefers_dark: false,
            css: CssVariableOptions::default(),
            theme_files: IndexMap::new(),
        }
    }
}

impl EngineConfig {
    /// The default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the process environment, falling back to defaults.
    pub fn from_env_or_default() -> Self {
        Self::from_env_vars(|key| env::var(key).ok())
    }

    /// Like [from_env_or_default](Self::from_env_or_default) with a custom
    /// variable lookup.
    ///
    /// A configuration file named by `JEDI_THEME_CONFIG` replaces the
    /// defaults; the other variables then override single settings.
    /// Unusable values are logged and skipped.
    pub fn from_env_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match lookup(ENV_CONFIG) {
            Some(path) => Self::from_file(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring theme configuration {}: {}", path, e);
                Self::default()
            }),
            None => Self::default(),
        };

        if let Some(theme) = lookup(ENV_THEME).filter(|t| !t.trim().is_empty()) {
            config.default_theme = theme.trim().to_string();
        }
        if let Some(mode) = lookup(ENV_COLOR_MODE) {
            match mode.parse() {
                Ok(mode) => config.color_mode = mode,
                Err(e) => log::warn!("Ignoring {}: {}", ENV_COLOR_MODE, e),
            }
        }
        if let Some(prefix) = lookup(ENV_CSS_PREFIX).filter(|p| !p.trim().is_empty()) {
            config.css.prefix = prefix.trim().to_string();
        }
        config
    }

    /// Load a `.toml` configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeError::unsupported_format(path));
        }
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        let mut config = Self::parse(&content, path)?;
        if let Some(dir) = path.parent() {
            for file in config.theme_files.values_mut() {
                if file.is_relative() {
                    *file = dir.join(&*file);
                }
            }
        }
        Ok(config)
    }

    /// Parse TOML configuration text.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, origin: &Path) -> ThemeResult<Self> {
        toml::from_str(content).map_err(|e| ThemeError::parse_error(origin, e.to_string()))
    }

    /// Set the default theme.
    pub fn with_default_theme(mut self, id: impl Into<String>) -> Self {
        self.default_theme = id.into();
        self
    }

    /// Set the fallback theme.
    pub fn with_fallback_theme(mut self, id: impl Into<String>) -> Self {
        self.fallback_theme = Some(id.into());
        self
    }

    /// Set the color mode.
    pub fn with_color_mode(mut self, mode: ThemeMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Set the CSS variable options.
    pub fn with_css(mut self, css: CssVariableOptions) -> Self {
        self.css = css;
        self
    }

    /// Add a theme file to register under `id`.
    pub fn with_theme_file(mut self, id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.theme_files.insert(id.into(), path.into());
        self
    }

    /// A registry with the built-in presets and every configured theme
    /// file, with the configured theme and color mode active.
    ///
    /// Theme files that fail to load are errors. A default theme that
    /// cannot be activated falls back to the fallback theme, if any.
    pub fn build_registry(&self) -> ThemeResult<ThemeRegistry> {
        let mut registry = ThemeRegistry::with_builtin_presets()?;
        for (id, path) in &self.theme_files {
            registry.register(id.clone(), ThemeLoader::from_file(path)?)?;
        }
        registry.set_system_prefers_dark(self.system_prefers_dark)?;
        registry.set_color_mode(self.color_mode)?;

        match registry.activate(&self.default_theme) {
            Ok(()) => {}
            Err(err) => match self.fallback_theme.as_deref() {
                Some(fallback) if fallback != self.default_theme => {
                    log::warn!(
                        "Cannot activate theme '{}' ({}), falling back to '{}'",
                        self.default_theme,
                        err,
                        fallback
                    );
                    registry.activate(fallback)?;
                }
                _ => return Err(err),
            },
        }
        Ok(registry)
    }
}
