//! Color modes, named variants and theme-to-theme inheritance.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ThemeSpecification;
use crate::compose::merge_themes;
use crate::error::{ThemeError, ThemeResult};

/// A color mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the host's preference.
    #[default]
    System,
}

impl ThemeMode {
    /// The lowercase name of the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ThemeError::Serialization(format!("Unknown color mode '{}'", other))),
        }
    }
}

/// The `colorMode` section of a theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorModeSettings {
    /// Mode used when the host has not chosen one.
    pub default_mode: ThemeMode,
    /// Whether `system` follows the host's dark preference.
    #[serde(default = "default_true")]
    pub respect_system_preference: bool,
    /// Fragment merged over the base theme in light mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<ThemeSpecification>,
    /// Fragment merged over the base theme in dark mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<ThemeSpecification>,
}

fn default_true() -> bool {
    true
}

impl ColorModeSettings {
    /// Collapse `mode` to light or dark.
    pub fn effective_mode(&self, mode: ThemeMode, system_prefers_dark: bool) -> ThemeMode {
        match mode {
            ThemeMode::System if self.respect_system_preference && system_prefers_dark => ThemeMode::Dark,
            ThemeMode::System => ThemeMode::Light,
            explicit => explicit,
        }
    }

    /// The fragment for an effective mode.
    pub fn fragment(&self, mode: ThemeMode) -> Option<&ThemeSpecification> {
        match mode {
            ThemeMode::Dark => self.dark.as_ref(),
            _ => self.light.as_ref(),
        }
    }
}

/// A named alternative of a theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeVariant {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fragment merged over the base theme.
    pub theme: ThemeSpecification,
}

/// A theme with color-mode settings and named variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedThemeSpecification {
    /// The base theme.
    #[serde(flatten)]
    pub theme: ThemeSpecification,
    /// Color mode settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorModeSettings>,
    /// Named variants.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variants: IndexMap<String, ThemeVariant>,
}

impl From<ThemeSpecification> for EnhancedThemeSpecification {
    fn from(theme: ThemeSpecification) -> Self {
        Self {
            theme,
            color_mode: None,
            variants: IndexMap::new(),
        }
    }
}

impl EnhancedThemeSpecification {
    /// The mode used when the host has not chosen one.
    pub fn default_mode(&self) -> ThemeMode {
        self.color_mode
            .as_ref()
            .map(|settings| settings.default_mode)
            .unwrap_or_default()
    }

    /// The theme as it should render in `mode`.
    ///
    /// The mode fragment is deep-merged over the base. When the fragment
    /// brings its own color scales the derived background, text and border
    /// roles are recomputed from the merged scales, with any roles the
    /// fragment sets explicitly taking priority.
    pub fn theme_for_mode(&self, mode: ThemeMode, system_prefers_dark: bool) -> ThemeResult<ThemeSpecification> {
        let Some(settings) = &self.color_mode else {
            return Ok(self.theme.clone());
        };
        let effective = settings.effective_mode(mode, system_prefers_dark);
        match settings.fragment(effective) {
            Some(fragment) => apply_fragment(&self.theme, fragment),
            None => Ok(self.theme.clone()),
        }
    }

    /// The base theme with variant `name` merged over it.
    pub fn theme_for_variant(&self, name: &str) -> ThemeResult<ThemeSpecification> {
        let variant = self
            .variants
            .get(name)
            .ok_or_else(|| ThemeError::not_found(format!("variant {}", name)))?;
        apply_fragment(&self.theme, &variant.theme)
    }

    /// Apply an optional variant and then a color mode.
    pub fn resolve(
        &self,
        variant: Option<&str>,
        mode: ThemeMode,
        system_prefers_dark: bool,
    ) -> ThemeResult<ThemeSpecification> {
        let base = match variant {
            Some(name) => self.theme_for_variant(name)?,
            None => self.theme.clone(),
        };
        let staged = Self {
            theme: base,
            color_mode: self.color_mode.clone(),
            variants: IndexMap::new(),
        };
        staged.theme_for_mode(mode, system_prefers_dark)
    }
}

pub(crate) fn apply_fragment(
    base: &ThemeSpecification,
    fragment: &ThemeSpecification,
) -> ThemeResult<ThemeSpecification> {
    let mut merged = ThemeSpecification::from_value(&merge_themes(&base.to_value()?, &fragment.to_value()?))?;

    let Some(fragment_colors) = fragment.colors.as_ref().filter(|c| !c.scales.is_empty()) else {
        return Ok(merged);
    };
    if let Some(colors) = merged.colors.as_mut() {
        colors.refresh_derived();
        colors.background.extend(fragment_colors.background.clone());
        colors.text.extend(fragment_colors.text.clone());
        colors.border.extend(fragment_colors.border.clone());
    }
    Ok(merged)
}

/// How a child theme combines with its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InheritanceStrategy {
    /// Deep-merge the child over the parent.
    #[default]
    Merge,
    /// Child top-level sections replace the parent's wholesale.
    Replace,
}

/// The `inheritance` section of a child theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeInheritance {
    /// Merge strategy.
    #[serde(default)]
    pub strategy: InheritanceStrategy,
    /// Dot paths removed from the parent before combining.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

/// A theme that declares how it inherits from a parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InheritingTheme {
    /// The child's own sections.
    #[serde(flatten)]
    pub theme: ThemeSpecification,
    /// Inheritance rules.
    #[serde(default)]
    pub inheritance: ThemeInheritance,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn enhanced(value: serde_json::Value) -> EnhancedThemeSpecification {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("dim".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn test_system_mode_follows_preference() {
        let settings = ColorModeSettings {
            default_mode: ThemeMode::System,
            respect_system_preference: true,
            light: None,
            dark: None,
        };
        assert_eq!(settings.effective_mode(ThemeMode::System, true), ThemeMode::Dark);
        assert_eq!(settings.effective_mode(ThemeMode::System, false), ThemeMode::Light);

        let ignoring = ColorModeSettings {
            respect_system_preference: false,
            ..settings
        };
        assert_eq!(ignoring.effective_mode(ThemeMode::System, true), ThemeMode::Light);
        assert_eq!(ignoring.effective_mode(ThemeMode::Dark, false), ThemeMode::Dark);
    }

    #[test]
    fn test_theme_for_mode_merges_fragment() {
        let theme = enhanced(json!({
            "colors": {"background": {"default": "#ffffff", "paper": "#f9fafb"}},
            "spacing": {"1": "0.25rem"},
            "colorMode": {
                "defaultMode": "light",
                "dark": {"colors": {"background": {"default": "#111827"}}}
            }
        }));

        let dark = theme.theme_for_mode(ThemeMode::Dark, false).unwrap();
        let background = &dark.colors.as_ref().unwrap().background;
        assert_eq!(background["default"], "#111827");
        assert_eq!(background["paper"], "#f9fafb");
        assert!(dark.spacing.is_some());

        let light = theme.theme_for_mode(ThemeMode::Light, false).unwrap();
        assert_eq!(light, theme.theme);
    }

    #[test]
    fn test_fragment_scales_recompute_derived_roles() {
        let theme = enhanced(json!({
            "colors": {"neutral": {"900": "#111111"}, "text": {"primary": "#111111"}},
            "colorMode": {
                "defaultMode": "dark",
                "dark": {"colors": {"neutral": {"900": "#fafafa"}, "border": {"focus": "#ff00ff"}}}
            }
        }));
        let dark = theme.theme_for_mode(theme.default_mode(), false).unwrap();
        let colors = dark.colors.unwrap();
        assert_eq!(colors.text["primary"], "#fafafa");
        assert_eq!(colors.border["focus"], "#ff00ff");
    }

    #[test]
    fn test_theme_for_variant() {
        let theme = enhanced(json!({
            "spacing": {"1": "0.25rem"},
            "variants": {"compact": {"theme": {"spacing": {"1": "0.125rem"}}}}
        }));
        let compact = theme.theme_for_variant("compact").unwrap();
        assert_eq!(compact.spacing.unwrap()["1"], "0.125rem");
        assert!(matches!(
            theme.theme_for_variant("roomy"),
            Err(ThemeError::ThemeNotFound { .. })
        ));
    }

    #[test]
    fn test_inheriting_theme_defaults_to_merge() {
        let child: InheritingTheme = serde_json::from_value(json!({"spacing": {"1": "1px"}})).unwrap();
        assert_eq!(child.inheritance.strategy, InheritanceStrategy::Merge);
        assert!(child.inheritance.exclude.is_empty());
    }
}
