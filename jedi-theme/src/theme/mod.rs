//! # Theme Model
//!
//! The typed form of a theme. A [ThemeSpecification] is a value: it is
//! created by a generator or loaded from JSON/TOML, and every update
//! produces a new specification rather than mutating one in place.
//!
//! ## Overview
//!
//! - **[ThemeSpecification]**: colors, typography, scales, animations and component overrides
//! - **[overrides]**: per-component [StyleOverride] sets and tagged content overrides
//! - **[extension]**: inheritance, precedence and cascade policy
//! - **[mode]**: color modes, named variants and theme inheritance
//!
//! All fields are optional, so the same type doubles as a partial theme
//! fragment for merging.

use indexmap::IndexMap;
use jedi_color::ThemeColors;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::ThemeResult;
use crate::value::{Literal, ThemeValue, ThemeValueExt};

/// Style extension policy types.
pub mod extension;
/// Color modes, variants and inheritance.
pub mod mode;
/// Component override types.
pub mod overrides;

pub use extension::StyleExtensionConfig;
pub use mode::{
    ColorModeSettings, EnhancedThemeSpecification, InheritanceStrategy, InheritingTheme,
    ThemeInheritance, ThemeMode, ThemeVariant,
};
pub use overrides::{
    CombinationOverride, ComponentStyleOverride, ContentOverride, StyleOverride, StyleValue,
    TokenPath,
};

/// A complete or partial theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSpecification {
    /// Name of a registered theme this one extends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Color scales and derived color roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ThemeColors>,
    /// Typography scales.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    /// Named font stacks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<IndexMap<String, Vec<String>>>,
    /// Spacing scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<IndexMap<String, String>>,
    /// Border radius scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<IndexMap<String, String>>,
    /// Box shadows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<IndexMap<String, String>>,
    /// Responsive breakpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<IndexMap<String, String>>,
    /// Z-index scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_indices: Option<IndexMap<String, i64>>,
    /// Animation presets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations: Option<IndexMap<String, AnimationPreset>>,
    /// Styling applied to every component before its own overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<StyleOverride>,
    /// Overrides keyed by component type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<IndexMap<String, ComponentStyleOverride>>,
    /// Inheritance and cascade policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_extension: Option<StyleExtensionConfig>,
}

impl ThemeSpecification {
    /// The untyped form of this theme.
    pub fn to_value(&self) -> ThemeResult<ThemeValue> {
        ThemeValue::from_serialize(self)
    }

    /// Build a theme from its untyped form.
    pub fn from_value(value: &ThemeValue) -> ThemeResult<Self> {
        value.deserialize_into()
    }

    /// The overrides for `component_type`, if any.
    pub fn component(&self, component_type: &str) -> Option<&ComponentStyleOverride> {
        self.components.as_ref()?.get(component_type)
    }

    /// Deep-merge `other` over this theme. See [merge_themes](crate::compose::merge_themes).
    pub fn merged_with(&self, other: &ThemeSpecification) -> ThemeResult<ThemeSpecification> {
        let merged = crate::compose::merge_themes(&self.to_value()?, &other.to_value()?);
        Self::from_value(&merged)
    }
}

/// Typography scales.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Font stacks, e.g. `sans`, `serif`, `mono`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_families: Option<IndexMap<String, Vec<String>>>,
    /// Font sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_sizes: Option<IndexMap<String, String>>,
    /// Numeric font weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weights: Option<IndexMap<String, Number>>,
    /// Line heights, unitless numbers or CSS lengths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_heights: Option<IndexMap<String, Literal>>,
    /// Letter spacings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacings: Option<IndexMap<String, String>>,
}

/// A reusable animation definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationPreset {
    /// CSS duration, e.g. `1s`.
    pub duration: String,
    /// CSS timing function.
    pub easing: String,
    /// CSS delay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    /// Iteration count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<AnimationIterations>,
    /// Playback direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<AnimationDirection>,
    /// Fill mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_mode: Option<AnimationFillMode>,
}

impl AnimationPreset {
    /// An animation with a duration and easing.
    pub fn new(duration: impl Into<String>, easing: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            easing: easing.into(),
            delay: None,
            iterations: None,
            direction: None,
            fill_mode: None,
        }
    }

    /// Loop forever.
    pub fn infinite(mut self) -> Self {
        self.iterations = Some(AnimationIterations::Infinite(Infinite::Infinite));
        self
    }

    /// Set the direction.
    pub fn with_direction(mut self, direction: AnimationDirection) -> Self {
        self.direction = Some(direction);
        self
    }
}

/// How many times an animation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnimationIterations {
    /// A fixed count.
    Count(u32),
    /// The `infinite` keyword.
    Infinite(Infinite),
}

/// The CSS `infinite` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Infinite {
    /// `infinite`.
    Infinite,
}

/// CSS `animation-direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum AnimationDirection {
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

/// CSS `animation-fill-mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum AnimationFillMode {
    None,
    Forwards,
    Backwards,
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_theme_round_trips() {
        let input = json!({
            "colors": {
                "primary": {"500": "#3b82f6", "600": "#2563eb"},
                "background": {"default": "#ffffff"}
            },
            "spacing": {"0": "0", "1": "0.25rem"},
            "zIndices": {"auto": 0, "10": 10}
        });
        let theme: ThemeSpecification = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(theme.spacing.as_ref().unwrap()["1"], "0.25rem");
        assert_eq!(serde_json::to_value(&theme).unwrap(), input);
    }

    #[test]
    fn test_animation_iterations() {
        let spin: AnimationPreset =
            serde_json::from_value(json!({"duration": "1s", "easing": "linear", "iterations": "infinite"}))
                .unwrap();
        assert_eq!(spin, AnimationPreset::new("1s", "linear").infinite());

        let twice: AnimationPreset = serde_json::from_value(
            json!({"duration": "1s", "easing": "linear", "iterations": 2, "direction": "alternate-reverse"}),
        )
        .unwrap();
        assert_eq!(twice.iterations, Some(AnimationIterations::Count(2)));
        assert_eq!(twice.direction, Some(AnimationDirection::AlternateReverse));
    }

    #[test]
    fn test_merged_with_keeps_both_sides() {
        let base: ThemeSpecification =
            serde_json::from_value(json!({"spacing": {"1": "0.25rem"}, "shadows": {"sm": "a"}})).unwrap();
        let over: ThemeSpecification =
            serde_json::from_value(json!({"spacing": {"2": "0.5rem"}})).unwrap();
        let merged = base.merged_with(&over).unwrap();
        let spacing = merged.spacing.unwrap();
        assert_eq!(spacing.len(), 2);
        assert!(merged.shadows.is_some());
    }
}
