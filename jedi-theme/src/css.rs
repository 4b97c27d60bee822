//! # CSS Variables
//!
//! Turns a theme's tokens into a flat map of CSS custom properties for a
//! styling backend to apply at its root scope.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tokens::for_each_leaf;
use crate::value::{ThemeValue, ThemeValueExt};

/// Default variable name prefix.
pub const DEFAULT_CSS_PREFIX: &str = "--theme";

/// Options for [extract_css_variables].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssVariableOptions {
    /// Prefix for every variable name.
    pub prefix: String,
    /// Also emit short color names such as `--theme-primary-500`.
    pub flatten: bool,
}

impl Default for CssVariableOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_CSS_PREFIX.to_string(),
            flatten: false,
        }
    }
}

impl CssVariableOptions {
    /// Options with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Enable or disable short color names.
    pub fn flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    fn name(&self, segments: &[&str]) -> String {
        let mut name = self.prefix.clone();
        for segment in segments {
            name.push('-');
            name.push_str(&segment.replace('.', "_"));
        }
        name
    }
}

/// Extract `{prefix}-{path-with-dashes}` variables for every token leaf.
///
/// Dots inside a single key become underscores, so spacing step `0.5`
/// yields `--theme-spacing-0_5`. Arrays are joined with `", "`.
///
/// ```rust
/// use jedi_theme::css::{extract_css_variables, CssVariableOptions};
/// use jedi_theme::value::ThemeValue;
///
/// let theme = ThemeValue::from(serde_json::json!({"spacing": {"1": "0.25rem"}}));
/// let vars = extract_css_variables(&theme, &CssVariableOptions::default());
/// assert_eq!(vars["--theme-spacing-1"], "0.25rem");
/// ```
pub fn extract_css_variables(theme: &ThemeValue, options: &CssVariableOptions) -> IndexMap<String, String> {
    let mut variables = IndexMap::new();
    let mut short_names = Vec::new();

    for_each_leaf(theme, &mut |segments, value| {
        let Some(css) = value.to_css_string() else {
            log::debug!("Skipping non-scalar token '{}'", segments.join("."));
            return;
        };
        if options.flatten && segments[0] == "colors" && segments.len() > 1 {
            short_names.push((options.name(&segments[1..]), css.clone()));
        }
        variables.insert(options.name(segments), css);
    });

    for (name, css) in short_names {
        variables.entry(name).or_insert(css);
    }
    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn theme() -> ThemeValue {
        ThemeValue::from(json!({
            "colors": {
                "primary": {"500": "#3b82f6", "600": "#2563eb"},
                "text": {"primary": "#111827"}
            },
            "spacing": {"1": "0.25rem", "0.5": "0.125rem"},
            "typography": {"fontFamilies": {"sans": ["Inter", "sans-serif"]}, "fontWeights": {"bold": 700}},
            "defaults": {"className": "root"}
        }))
    }

    #[test]
    fn test_default_prefix() {
        let vars = extract_css_variables(&theme(), &CssVariableOptions::default());
        assert_eq!(vars["--theme-colors-primary-500"], "#3b82f6");
        assert_eq!(vars["--theme-colors-primary-600"], "#2563eb");
        assert_eq!(vars["--theme-colors-text-primary"], "#111827");
        assert_eq!(vars["--theme-spacing-1"], "0.25rem");
        assert_eq!(vars["--theme-spacing-0_5"], "0.125rem");
        assert_eq!(vars["--theme-typography-fontFamilies-sans"], "Inter, sans-serif");
        assert_eq!(vars["--theme-typography-fontWeights-bold"], "700");
        assert!(!vars.keys().any(|k| k.contains("defaults")));
    }

    #[test]
    fn test_custom_prefix() {
        let vars = extract_css_variables(&theme(), &CssVariableOptions::with_prefix("--custom"));
        assert_eq!(vars["--custom-colors-primary-500"], "#3b82f6");
    }

    #[test]
    fn test_flatten_adds_short_color_names() {
        let vars = extract_css_variables(&theme(), &CssVariableOptions::default().flatten(true));
        assert_eq!(vars["--theme-primary-500"], "#3b82f6");
        assert_eq!(vars["--theme-text-primary"], "#111827");
        assert_eq!(vars["--theme-colors-primary-500"], "#3b82f6");
        assert!(!vars.contains_key("--theme-1"));
    }

    #[test]
    fn test_output_is_ordered() {
        let vars = extract_css_variables(&theme(), &CssVariableOptions::default());
        let first: Vec<&str> = vars.keys().take(2).map(String::as_str).collect();
        assert_eq!(first, ["--theme-colors-primary-500", "--theme-colors-primary-600"]);
    }
}
