//! # Brand Themes
//!
//! Builds a complete theme from a handful of brand colors, brand
//! typography and a personality profile.
//!
//! ## Overview
//!
//! - **Colors**: every brand color seeds a scale through the palette
//!   generator; `background` and `foreground` become the default surface
//!   and text colors
//! - **Typography**: brand fonts and weights slotted into the standard
//!   type scale
//! - **Personality**: six traits scored `0..=100` that pick the spacing
//!   unit, animation timing, corner radii and shadow depth
//!
//! A trait counts as pronounced above [TRAIT_THRESHOLD]. When several
//! pronounced traits compete for the same scale, `minimal` wins over
//! `playful` and `bold`, which win over `elegant`.

use indexmap::IndexMap;
use jedi_color::{generate_color_palette, ColorPaletteConfig, SemanticColors, ThemeColors};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::compose::compose_theme;
use crate::error::ThemeResult;
use crate::presets::{border_radius_scale, string_map};
use crate::theme::{
    AnimationPreset, InheritanceStrategy, InheritingTheme, ThemeInheritance, ThemeSpecification, Typography,
};
use crate::value::Literal;

/// Score above which a personality trait shapes the theme.
pub const TRAIT_THRESHOLD: u8 = 70;

const SPRING_EASING: &str = "cubic-bezier(0.68, -0.55, 0.265, 1.55)";

/// Brand colors. Every field has a default, so partial input is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandColors {
    /// Primary brand color.
    pub primary: String,
    /// Secondary brand color.
    pub secondary: String,
    /// Accent color.
    pub accent: String,
    /// Seed of the gray scale.
    pub neutral: String,
    /// Default surface color.
    pub background: String,
    /// Default text color.
    pub foreground: String,
    /// Success seed.
    pub success: String,
    /// Error seed.
    pub error: String,
    /// Warning seed.
    pub warning: String,
    /// Info seed.
    pub info: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: "#3B82F6".into(),
            secondary: "#8B5CF6".into(),
            accent: "#10B981".into(),
            neutral: "#6B7280".into(),
            background: "#FFFFFF".into(),
            foreground: "#000000".into(),
            success: "#10B981".into(),
            error: "#EF4444".into(),
            warning: "#F59E0B".into(),
            info: "#3B82F6".into(),
        }
    }
}

/// Brand font stacks, each a CSS `font-family` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandFontFamily {
    /// Headings and display text.
    pub heading: String,
    /// Body text.
    pub body: String,
    /// Code.
    pub mono: String,
}

impl Default for BrandFontFamily {
    fn default() -> Self {
        Self {
            heading: "Inter, sans-serif".into(),
            body: "Inter, sans-serif".into(),
            mono: "Fira Code, monospace".into(),
        }
    }
}

/// The brand's named font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandFontWeight {
    /// Light weight.
    pub light: u16,
    /// Regular weight, used as `normal`.
    pub regular: u16,
    /// Medium weight.
    pub medium: u16,
    /// Semibold weight.
    pub semibold: u16,
    /// Bold weight.
    pub bold: u16,
}

impl Default for BrandFontWeight {
    fn default() -> Self {
        Self {
            light: 300,
            regular: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        }
    }
}

/// Brand typography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandTypography {
    /// Font stacks.
    pub font_family: BrandFontFamily,
    /// Font weights.
    pub font_weight: BrandFontWeight,
    /// Letter spacing used as `tight`.
    pub letter_spacing: String,
    /// Line height used as `normal`.
    pub line_height: String,
}

impl Default for BrandTypography {
    fn default() -> Self {
        Self {
            font_family: BrandFontFamily::default(),
            font_weight: BrandFontWeight::default(),
            letter_spacing: "-0.01em".into(),
            line_height: "1.5".into(),
        }
    }
}

/// How the brand should feel, each trait scored `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandPersonality {
    /// Contemporary look.
    pub modern: u8,
    /// Corporate restraint.
    pub professional: u8,
    /// Lively motion and rounded corners.
    pub playful: u8,
    /// Tight spacing, flat surfaces, little motion.
    pub minimal: u8,
    /// Generous spacing and strong shadows.
    pub bold: u8,
    /// Slow, soft motion and diffuse shadows.
    pub elegant: u8,
}

impl Default for BrandPersonality {
    fn default() -> Self {
        Self {
            modern: 70,
            professional: 80,
            playful: 30,
            minimal: 60,
            bold: 50,
            elegant: 50,
        }
    }
}

impl BrandPersonality {
    /// Whether `playful` is pronounced.
    pub fn is_playful(&self) -> bool {
        self.playful > TRAIT_THRESHOLD
    }

    /// Whether `minimal` is pronounced.
    pub fn is_minimal(&self) -> bool {
        self.minimal > TRAIT_THRESHOLD
    }

    /// Whether `bold` is pronounced.
    pub fn is_bold(&self) -> bool {
        self.bold > TRAIT_THRESHOLD
    }

    /// Whether `elegant` is pronounced.
    pub fn is_elegant(&self) -> bool {
        self.elegant > TRAIT_THRESHOLD
    }
}

/// Input of [generate_brand_theme].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandThemeOptions {
    /// Brand colors.
    pub colors: BrandColors,
    /// Brand typography.
    pub typography: BrandTypography,
    /// Personality profile.
    pub personality: BrandPersonality,
    /// Sections that replace the generated ones wholesale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ThemeSpecification>,
}

impl BrandThemeOptions {
    /// Options with default colors, typography and personality.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the brand colors.
    pub fn with_colors(mut self, colors: BrandColors) -> Self {
        self.colors = colors;
        self
    }

    /// Set the typography.
    pub fn with_typography(mut self, typography: BrandTypography) -> Self {
        self.typography = typography;
        self
    }

    /// Set the personality.
    pub fn with_personality(mut self, personality: BrandPersonality) -> Self {
        self.personality = personality;
        self
    }

    /// Set sections that replace the generated ones.
    pub fn with_overrides(mut self, overrides: ThemeSpecification) -> Self {
        self.overrides = Some(overrides);
        self
    }
}

/// Generate a theme from brand options.
///
/// Fails when a brand color is not a hex color.
///
/// ```rust
/// use jedi_theme::brand::{generate_brand_theme, BrandPersonality, BrandThemeOptions};
///
/// let options = BrandThemeOptions::new().with_personality(BrandPersonality {
///     minimal: 90,
///     ..BrandPersonality::default()
/// });
/// let theme = generate_brand_theme(&options).unwrap();
/// assert_eq!(theme.spacing.unwrap()["1"], "0.25rem");
/// ```
pub fn generate_brand_theme(options: &BrandThemeOptions) -> ThemeResult<ThemeSpecification> {
    let personality = &options.personality;
    let theme = ThemeSpecification {
        colors: Some(brand_colors(&options.colors)?),
        typography: Some(brand_typography(&options.typography)),
        spacing: Some(spacing_scale(personality)),
        animations: Some(animation_presets(personality)),
        border_radius: Some(radius_scale(personality)),
        shadows: Some(shadow_scale(personality)),
        ..ThemeSpecification::default()
    };

    log::debug!(
        "Generated brand theme from {} (minimal {}, playful {}, bold {}, elegant {})",
        options.colors.primary,
        personality.minimal,
        personality.playful,
        personality.bold,
        personality.elegant
    );

    match &options.overrides {
        Some(overrides) => {
            let child = InheritingTheme {
                theme: overrides.clone(),
                inheritance: ThemeInheritance {
                    strategy: InheritanceStrategy::Replace,
                    exclude: Vec::new(),
                },
            };
            compose_theme(&child, &theme)
        }
        None => Ok(theme),
    }
}

fn brand_colors(brand: &BrandColors) -> ThemeResult<ThemeColors> {
    let mut colors = generate_color_palette(
        &ColorPaletteConfig::new(brand.primary.as_str())
            .with_secondary(brand.secondary.as_str())
            .with_accent(brand.accent.as_str())
            .with_neutral(brand.neutral.as_str())
            .with_semantic(SemanticColors {
                success: Some(brand.success.as_str().into()),
                warning: Some(brand.warning.as_str().into()),
                error: Some(brand.error.as_str().into()),
                info: Some(brand.info.as_str().into()),
            }),
    )?;
    colors.background.insert("default".into(), brand.background.clone());
    colors.text.insert("default".into(), brand.foreground.clone());
    Ok(colors)
}

/// Split a CSS `font-family` list into a stack.
fn font_stack(families: &str) -> Vec<String> {
    families
        .split(',')
        .map(str::trim)
        .filter(|family| !family.is_empty())
        .map(str::to_string)
        .collect()
}

fn brand_typography(brand: &BrandTypography) -> Typography {
    let fonts = &brand.font_family;
    let font_families = [
        ("sans", font_stack(&fonts.body)),
        ("serif", font_stack("Georgia, serif")),
        ("mono", font_stack(&fonts.mono)),
        ("display", font_stack(&fonts.heading)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let weights = brand.font_weight;
    let font_weights = [
        ("thin", 100),
        ("extralight", 200),
        ("light", weights.light),
        ("normal", weights.regular),
        ("medium", weights.medium),
        ("semibold", weights.semibold),
        ("bold", weights.bold),
        ("extrabold", 800),
        ("black", 900),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), Number::from(v)))
    .collect();

    let line_heights = [
        ("none", "1"),
        ("tight", "1.25"),
        ("snug", "1.375"),
        ("normal", brand.line_height.as_str()),
        ("relaxed", "1.625"),
        ("loose", "2"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), Literal::from(v)))
    .collect();

    Typography {
        font_families: Some(font_families),
        font_sizes: Some(string_map(&[
            ("xs", "0.75rem"),
            ("sm", "0.875rem"),
            ("base", "1rem"),
            ("lg", "1.125rem"),
            ("xl", "1.25rem"),
            ("2xl", "1.5rem"),
            ("3xl", "1.875rem"),
            ("4xl", "2.25rem"),
            ("5xl", "3rem"),
            ("6xl", "3.75rem"),
            ("7xl", "4.5rem"),
            ("8xl", "6rem"),
            ("9xl", "8rem"),
        ])),
        font_weights: Some(font_weights),
        line_heights: Some(line_heights),
        letter_spacings: Some(string_map(&[
            ("tighter", "-0.05em"),
            ("tight", brand.letter_spacing.as_str()),
            ("normal", "0"),
            ("wide", "0.025em"),
            ("wider", "0.05em"),
            ("widest", "0.1em"),
        ])),
    }
}

/// Spacing steps as multiples of the base unit.
const SPACING_STEPS: [(&str, f64); 21] = [
    ("0.5", 0.5),
    ("1", 1.0),
    ("1.5", 1.5),
    ("2", 2.0),
    ("2.5", 2.5),
    ("3", 3.0),
    ("3.5", 3.5),
    ("4", 4.0),
    ("5", 5.0),
    ("6", 6.0),
    ("7", 7.0),
    ("8", 8.0),
    ("9", 9.0),
    ("10", 10.0),
    ("12", 12.0),
    ("14", 14.0),
    ("16", 16.0),
    ("20", 20.0),
    ("24", 24.0),
    ("28", 28.0),
    ("32", 32.0),
];

/// Base spacing unit in rem.
fn spacing_unit(personality: &BrandPersonality) -> f64 {
    if personality.minimal >= 100 {
        0.125
    } else if personality.is_minimal() {
        0.25
    } else if personality.is_bold() {
        0.375
    } else {
        0.3125
    }
}

fn spacing_scale(personality: &BrandPersonality) -> IndexMap<String, String> {
    let unit = spacing_unit(personality);
    let mut spacing = string_map(&[("0", "0"), ("px", "1px")]);
    for (key, factor) in SPACING_STEPS {
        spacing.insert(key.to_string(), format!("{}rem", unit * factor));
    }
    spacing
}

fn animation_presets(personality: &BrandPersonality) -> IndexMap<String, AnimationPreset> {
    let (playful, elegant) = (personality.is_playful(), personality.is_elegant());
    let base = match (elegant, playful) {
        (true, _) => "400ms",
        (false, true) => "200ms",
        (false, false) => "300ms",
    };
    let fast = if playful { "150ms" } else { "200ms" };
    let slow = if elegant { "700ms" } else { "500ms" };
    let easing = if elegant {
        "cubic-bezier(0.4, 0, 0.2, 1)"
    } else {
        "cubic-bezier(0.4, 0, 0.6, 1)"
    };

    let mut animations = IndexMap::new();
    animations.insert("fadeIn".to_string(), AnimationPreset::new(base, easing));
    animations.insert("fadeOut".to_string(), AnimationPreset::new(base, easing));
    animations.insert("slideIn".to_string(), AnimationPreset::new(fast, "cubic-bezier(0, 0, 0.2, 1)"));
    animations.insert("slideOut".to_string(), AnimationPreset::new(fast, "cubic-bezier(0.4, 0, 1, 1)"));
    animations.insert(
        "scaleIn".to_string(),
        AnimationPreset::new(base, if playful { SPRING_EASING } else { easing }),
    );
    animations.insert("scaleOut".to_string(), AnimationPreset::new(base, easing));
    animations.insert("rotate".to_string(), AnimationPreset::new(slow, "linear"));
    if !personality.is_minimal() {
        animations.insert("bounce".to_string(), AnimationPreset::new("500ms", SPRING_EASING));
    }
    animations
}

fn radius_scale(personality: &BrandPersonality) -> IndexMap<String, String> {
    let steps: [(&str, &str); 7] = if personality.is_minimal() {
        [
            ("sm", "0.125rem"),
            ("base", "0.25rem"),
            ("md", "0.375rem"),
            ("lg", "0.5rem"),
            ("xl", "0.75rem"),
            ("2xl", "1rem"),
            ("3xl", "1.5rem"),
        ]
    } else if personality.is_playful() || personality.is_bold() {
        [
            ("sm", "0.25rem"),
            ("base", "0.5rem"),
            ("md", "0.75rem"),
            ("lg", "1rem"),
            ("xl", "1.5rem"),
            ("2xl", "2rem"),
            ("3xl", "3rem"),
        ]
    } else {
        [
            ("sm", "0.125rem"),
            ("base", "0.375rem"),
            ("md", "0.5rem"),
            ("lg", "0.75rem"),
            ("xl", "1rem"),
            ("2xl", "1.5rem"),
            ("3xl", "2rem"),
        ]
    };
    border_radius_scale(&steps)
}

/// A shadow scale where every step shares one alpha.
fn soft_shadows(offsets: [&str; 7], alpha: &str) -> IndexMap<String, String> {
    let mut shadows = string_map(&[("none", "none")]);
    for (key, offset) in ["sm", "base", "md", "lg", "xl", "2xl", "3xl"].into_iter().zip(offsets) {
        shadows.insert(key.to_string(), format!("{} rgb(0 0 0 / {})", offset, alpha));
    }
    shadows
}

fn shadow_scale(personality: &BrandPersonality) -> IndexMap<String, String> {
    if personality.is_minimal() {
        soft_shadows(
            ["0 1px 2px", "0 2px 4px", "0 4px 6px", "0 8px 16px", "0 16px 24px", "0 24px 48px", "0 32px 64px"],
            "0.05",
        )
    } else if personality.is_bold() {
        string_map(&[
            ("none", "none"),
            ("sm", "0 1px 3px rgb(0 0 0 / 0.1), 0 1px 2px rgb(0 0 0 / 0.06)"),
            ("base", "0 4px 6px rgb(0 0 0 / 0.1), 0 2px 4px rgb(0 0 0 / 0.06)"),
            ("md", "0 8px 12px rgb(0 0 0 / 0.1), 0 4px 6px rgb(0 0 0 / 0.06)"),
            ("lg", "0 16px 24px rgb(0 0 0 / 0.1), 0 8px 12px rgb(0 0 0 / 0.06)"),
            ("xl", "0 24px 36px rgb(0 0 0 / 0.1), 0 12px 16px rgb(0 0 0 / 0.06)"),
            ("2xl", "0 32px 48px rgb(0 0 0 / 0.1), 0 16px 24px rgb(0 0 0 / 0.06)"),
            ("3xl", "0 48px 64px rgb(0 0 0 / 0.1), 0 24px 32px rgb(0 0 0 / 0.06)"),
        ])
    } else if personality.is_elegant() {
        soft_shadows(
            ["0 1px 2px", "0 2px 8px", "0 4px 16px", "0 8px 24px", "0 12px 32px", "0 16px 48px", "0 24px 64px"],
            "0.04",
        )
    } else {
        soft_shadows(
            ["0 1px 2px", "0 2px 6px", "0 4px 12px", "0 8px 20px", "0 16px 32px", "0 24px 48px", "0 32px 64px"],
            "0.05",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use crate::validate::validate_theme;
    use jedi_color::Shade;

    fn personality(minimal: u8, playful: u8, bold: u8, elegant: u8) -> BrandPersonality {
        BrandPersonality {
            minimal,
            playful,
            bold,
            elegant,
            ..BrandPersonality::default()
        }
    }

    fn theme_for(personality: BrandPersonality) -> ThemeSpecification {
        generate_brand_theme(&BrandThemeOptions::new().with_personality(personality)).unwrap()
    }

    #[test]
    fn test_default_brand_theme() {
        let theme = generate_brand_theme(&BrandThemeOptions::new()).unwrap();
        let colors = theme.colors.as_ref().unwrap();
        for role in ["primary", "secondary", "accent", "neutral", "success", "warning", "error", "info"] {
            assert!(colors.scale(role).unwrap().is_complete(), "{role} scale incomplete");
        }
        assert_eq!(colors.background["default"], "#FFFFFF");
        assert_eq!(colors.text["default"], "#000000");

        let spacing = theme.spacing.as_ref().unwrap();
        assert_eq!(spacing["1"], "0.3125rem");
        assert_eq!(spacing["0.5"], "0.15625rem");
        assert_eq!(spacing["4"], "1.25rem");
        assert_eq!(spacing["px"], "1px");

        let animations = theme.animations.as_ref().unwrap();
        assert_eq!(animations["fadeIn"].duration, "300ms");
        assert!(animations.contains_key("bounce"));
        assert_eq!(theme.border_radius.as_ref().unwrap()["base"], "0.375rem");
        assert_eq!(theme.shadows.as_ref().unwrap()["base"], "0 2px 6px rgb(0 0 0 / 0.05)");
        assert!(theme.breakpoints.is_none());
    }

    #[test]
    fn test_brand_theme_validates() {
        let theme = generate_brand_theme(&BrandThemeOptions::new()).unwrap();
        let json = serde_json::to_value(&theme).unwrap();
        assert!(validate_theme(&json).is_ok());
    }

    #[test]
    fn test_minimal_personality() {
        let theme = theme_for(personality(90, 30, 50, 50));
        assert_eq!(theme.spacing.as_ref().unwrap()["1"], "0.25rem");
        assert!(!theme.animations.as_ref().unwrap().contains_key("bounce"));
        assert_eq!(theme.border_radius.as_ref().unwrap()["base"], "0.25rem");
        assert_eq!(theme.shadows.as_ref().unwrap()["lg"], "0 8px 16px rgb(0 0 0 / 0.05)");

        let very_minimal = theme_for(personality(100, 30, 50, 50));
        assert_eq!(very_minimal.spacing.as_ref().unwrap()["2"], "0.25rem");
    }

    #[test]
    fn test_playful_personality() {
        let theme = theme_for(personality(60, 90, 50, 50));
        let animations = theme.animations.as_ref().unwrap();
        assert_eq!(animations["fadeIn"].duration, "200ms");
        assert_eq!(animations["slideIn"].duration, "150ms");
        assert_eq!(animations["scaleIn"].easing, SPRING_EASING);
        assert_eq!(theme.border_radius.as_ref().unwrap()["lg"], "1rem");
        assert_eq!(theme.spacing.as_ref().unwrap()["1"], "0.3125rem");
    }

    #[test]
    fn test_bold_personality() {
        let theme = theme_for(personality(60, 30, 90, 50));
        assert_eq!(theme.spacing.as_ref().unwrap()["1"], "0.375rem");
        assert_eq!(theme.spacing.as_ref().unwrap()["3"], "1.125rem");
        assert_eq!(theme.border_radius.as_ref().unwrap()["3xl"], "3rem");
        assert!(theme.shadows.as_ref().unwrap()["sm"].contains("0 1px 2px rgb(0 0 0 / 0.06)"));
    }

    #[test]
    fn test_elegant_personality() {
        let theme = theme_for(personality(60, 30, 50, 90));
        let animations = theme.animations.as_ref().unwrap();
        assert_eq!(animations["fadeIn"].duration, "400ms");
        assert_eq!(animations["fadeIn"].easing, "cubic-bezier(0.4, 0, 0.2, 1)");
        assert_eq!(animations["rotate"].duration, "700ms");
        assert_eq!(theme.shadows.as_ref().unwrap()["md"], "0 4px 16px rgb(0 0 0 / 0.04)");
        assert_eq!(theme.border_radius.as_ref().unwrap()["base"], "0.375rem");
    }

    #[test]
    fn test_minimal_outranks_other_traits() {
        let theme = theme_for(personality(90, 90, 90, 90));
        assert_eq!(theme.spacing.as_ref().unwrap()["1"], "0.25rem");
        assert_eq!(theme.border_radius.as_ref().unwrap()["sm"], "0.125rem");
        assert_eq!(theme.shadows.as_ref().unwrap()["sm"], "0 1px 2px rgb(0 0 0 / 0.05)");
        assert_eq!(theme.animations.as_ref().unwrap()["fadeIn"].duration, "400ms");
    }

    #[test]
    fn test_brand_typography() {
        let typography = BrandTypography {
            font_family: BrandFontFamily {
                heading: "Playfair Display, serif".into(),
                ..BrandFontFamily::default()
            },
            letter_spacing: "-0.02em".into(),
            ..BrandTypography::default()
        };
        let theme = generate_brand_theme(&BrandThemeOptions::new().with_typography(typography)).unwrap();
        let typography = theme.typography.unwrap();
        let families = typography.font_families.unwrap();
        assert_eq!(families["display"], ["Playfair Display", "serif"]);
        assert_eq!(families["sans"], ["Inter", "sans-serif"]);
        assert_eq!(typography.letter_spacings.unwrap()["tight"], "-0.02em");
        assert_eq!(typography.font_weights.unwrap()["normal"], Number::from(400));
    }

    #[test]
    fn test_brand_colors_seed_scales() {
        let colors = BrandColors {
            primary: "#E11D48".into(),
            ..BrandColors::default()
        };
        let theme = generate_brand_theme(&BrandThemeOptions::new().with_colors(colors)).unwrap();
        let primary = theme.colors.unwrap().scales["primary"].clone();
        let mid = jedi_color::hex_to_hsl(primary.get(Shade::S500).unwrap()).unwrap();
        let seed = jedi_color::hex_to_hsl("#E11D48").unwrap();
        let d = (mid.h - seed.h).rem_euclid(360.0);
        assert!(d.min(360.0 - d) <= 5.0);
    }

    #[test]
    fn test_overrides_replace_sections() {
        let overrides: ThemeSpecification =
            serde_json::from_value(serde_json::json!({"spacing": {"1": "4px"}})).unwrap();
        let theme = generate_brand_theme(&BrandThemeOptions::new().with_overrides(overrides)).unwrap();
        let spacing = theme.spacing.unwrap();
        assert_eq!(spacing.len(), 1);
        assert_eq!(spacing["1"], "4px");
        assert!(theme.shadows.is_some());
    }

    #[test]
    fn test_partial_options_deserialize() {
        let options: BrandThemeOptions = serde_json::from_value(serde_json::json!({
            "colors": {"primary": "#E11D48"},
            "personality": {"bold": 85}
        }))
        .unwrap();
        assert_eq!(options.colors.secondary, "#8B5CF6");
        assert_eq!(options.personality.professional, 80);
        assert!(options.personality.is_bold());
    }

    #[test]
    fn test_bad_brand_color() {
        let colors = BrandColors {
            accent: "teal".into(),
            ..BrandColors::default()
        };
        let err = generate_brand_theme(&BrandThemeOptions::new().with_colors(colors)).unwrap_err();
        assert!(matches!(err, ThemeError::Color(_)));
    }
}
