//! # Theme Presets
//!
//! Ready-made themes built from the palette generator, a dark variant
//! derived from any theme, and a one-color custom theme generator.
//!
//! Every preset shares the default typography, spacing, radius, shadow,
//! breakpoint, z-index and animation scales and differs only in color.

use indexmap::IndexMap;
use jedi_color::{
    generate_color_palette, hex_to_hsl, hex_to_rgb, ColorPaletteConfig, ColorScaleOptions, Hsl, SemanticColors,
    Shade, ThemeColors,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::ThemeResult;
use crate::theme::{AnimationDirection, AnimationPreset, ThemeSpecification, Typography};
use crate::value::Literal;

/// Id of the preset that is active when nothing else is chosen.
pub const DEFAULT_PRESET_ID: &str = "default";

const NEUTRAL_SEED: &str = "#6B7280";
const NEUTRAL_SATURATION: f64 = -70.0;

/// A named, ready-made theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreset {
    /// Registry key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether this preset is the default.
    #[serde(default)]
    pub is_default: bool,
    /// The theme.
    pub theme: ThemeSpecification,
}

impl ThemePreset {
    fn new(id: &str, name: &str, description: &str, theme: ThemeSpecification) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            is_default: false,
            theme,
        }
    }
}

/// The default preset: sky blue, indigo and pink over a cool gray.
pub fn default_theme() -> ThemeResult<ThemePreset> {
    let colors = generate_color_palette(
        &ColorPaletteConfig::new("#0EA5E9")
            .with_secondary("#6366F1")
            .with_accent("#EC4899")
            .with_neutral(ColorScaleOptions::new(NEUTRAL_SEED).with_saturation(NEUTRAL_SATURATION))
            .with_semantic(SemanticColors {
                success: Some("#10B981".into()),
                warning: Some("#F59E0B".into()),
                error: Some("#EF4444".into()),
                info: Some("#3B82F6".into()),
            }),
    )?;

    let mut preset = ThemePreset::new(
        DEFAULT_PRESET_ID,
        "Default",
        "Sky blue primary with indigo and pink accents",
        with_colors(colors),
    );
    preset.is_default = true;
    Ok(preset)
}

/// Every built-in preset, the default first.
pub fn builtin_presets() -> ThemeResult<Vec<ThemePreset>> {
    let seeded = |id: &str, name: &str, description: &str, seeds: [(&str, f64); 4]| -> ThemeResult<ThemePreset> {
        let option = |(seed, saturation): (&str, f64)| {
            let options = ColorScaleOptions::new(seed);
            if saturation == 0.0 {
                options
            } else {
                options.with_saturation(saturation)
            }
        };
        let colors = generate_color_palette(
            &ColorPaletteConfig::new(option(seeds[0]))
                .with_secondary(option(seeds[1]))
                .with_accent(option(seeds[2]))
                .with_neutral(option(seeds[3])),
        )?;
        Ok(ThemePreset::new(id, name, description, with_colors(colors)))
    };

    let neutral = (NEUTRAL_SEED, NEUTRAL_SATURATION);
    Ok(vec![
        default_theme()?,
        seeded(
            "purple",
            "Purple",
            "Violet primary with pink and emerald accents",
            [("#8B5CF6", 0.0), ("#EC4899", 0.0), ("#10B981", 0.0), neutral],
        )?,
        seeded(
            "green",
            "Green",
            "Emerald primary with blue and amber accents",
            [("#10B981", 0.0), ("#3B82F6", 0.0), ("#F59E0B", 0.0), neutral],
        )?,
        seeded(
            "red",
            "Red",
            "Red primary with violet and emerald accents",
            [("#EF4444", 0.0), ("#8B5CF6", 0.0), ("#10B981", 0.0), neutral],
        )?,
        seeded(
            "monochrome",
            "Monochrome",
            "Grays only",
            [
                ("#333333", -100.0),
                ("#666666", -100.0),
                ("#000000", -100.0),
                (NEUTRAL_SEED, -100.0),
            ],
        )?,
    ])
}

/// A theme whose primary is `primary_hex`, with a complementary secondary
/// and an analogous accent.
pub fn generate_custom_theme(primary_hex: &str) -> ThemeResult<ThemeSpecification> {
    let hue = hex_to_hsl(primary_hex)?.h;
    let companion = |degrees: f64| Hsl::new(hue, 75.0, 60.0).rotate_hue(degrees).to_hex();

    let colors = generate_color_palette(
        &ColorPaletteConfig::new(primary_hex)
            .with_secondary(companion(180.0))
            .with_accent(companion(90.0))
            .with_neutral(ColorScaleOptions::new(NEUTRAL_SEED).with_saturation(NEUTRAL_SATURATION)),
    )?;
    Ok(with_colors(colors))
}

/// The dark counterpart of `theme`.
///
/// The palette is regenerated from the theme's `500` shades on a near-black
/// neutral, the derived roles are remapped for dark surfaces and shadows
/// get heavier. Everything else is kept.
pub fn create_dark_theme(theme: &ThemeSpecification) -> ThemeResult<ThemeSpecification> {
    let current = theme.colors.as_ref();
    let seed = |role: &str, fallback: &str| seed_color(current, role, fallback);

    let mut colors = generate_color_palette(
        &ColorPaletteConfig::new(
            ColorScaleOptions::new(seed("primary", "#0EA5E9"))
                .with_temperature(10.0)
                .with_saturation(5.0),
        )
        .with_secondary(
            ColorScaleOptions::new(seed("secondary", "#6366F1"))
                .with_temperature(-10.0)
                .with_saturation(5.0),
        )
        .with_accent(ColorScaleOptions::new(seed("accent", "#EC4899")).with_saturation(10.0))
        .with_neutral(
            ColorScaleOptions::new("#121212")
                .with_saturation(-90.0)
                .with_contrast(0.8),
        )
        .with_semantic(SemanticColors {
            success: Some(ColorScaleOptions::new(seed("success", "#10B981")).with_saturation(10.0).into()),
            warning: Some(ColorScaleOptions::new(seed("warning", "#F59E0B")).with_saturation(10.0).into()),
            error: Some(ColorScaleOptions::new(seed("error", "#EF4444")).with_saturation(10.0).into()),
            info: Some(ColorScaleOptions::new(seed("info", "#3B82F6")).with_saturation(10.0).into()),
        }),
    )?;
    remap_for_dark(&mut colors);

    let mut shadows = theme.shadows.clone().unwrap_or_default();
    shadows.extend(string_map(&[
        ("default", "0 1px 3px 0 rgba(0, 0, 0, 0.3), 0 1px 2px 0 rgba(0, 0, 0, 0.2)"),
        ("md", "0 4px 6px -1px rgba(0, 0, 0, 0.3), 0 2px 4px -1px rgba(0, 0, 0, 0.2)"),
        ("lg", "0 10px 15px -3px rgba(0, 0, 0, 0.3), 0 4px 6px -2px rgba(0, 0, 0, 0.15)"),
        ("xl", "0 20px 25px -5px rgba(0, 0, 0, 0.3), 0 10px 10px -5px rgba(0, 0, 0, 0.14)"),
        ("2xl", "0 25px 50px -12px rgba(0, 0, 0, 0.35)"),
    ]));

    Ok(ThemeSpecification {
        colors: Some(colors),
        shadows: Some(shadows),
        ..theme.clone()
    })
}

/// Only the colors and shadows of [create_dark_theme], for use as a
/// dark color-mode fragment.
pub fn dark_fragment(theme: &ThemeSpecification) -> ThemeResult<ThemeSpecification> {
    let dark = create_dark_theme(theme)?;
    Ok(ThemeSpecification {
        colors: dark.colors,
        shadows: dark.shadows,
        ..ThemeSpecification::default()
    })
}

fn seed_color(colors: Option<&ThemeColors>, role: &str, fallback: &str) -> String {
    match colors.and_then(|c| c.scale(role)).and_then(|s| s.get(Shade::S500)) {
        Some(hex) if hex_to_rgb(hex).is_ok() => hex.to_string(),
        Some(hex) => {
            log::warn!("Ignoring unusable {} seed '{}', using {}", role, hex, fallback);
            fallback.to_string()
        }
        None => fallback.to_string(),
    }
}

fn shade(colors: &ThemeColors, role: &str, shade: Shade, fallback: &str) -> String {
    colors
        .scale(role)
        .and_then(|scale| scale.get(shade))
        .unwrap_or(fallback)
        .to_string()
}

fn remap_for_dark(colors: &mut ThemeColors) {
    use Shade::*;

    let c = &*colors;
    let background = [
        ("default", shade(c, "neutral", S900, "#121212")),
        ("paper", shade(c, "neutral", S800, "#1E1E1E")),
        ("subtle", shade(c, "neutral", S700, "#2D2D2D")),
        ("primaryLight", shade(c, "primary", S900, "#0C4A6E")),
        ("primary", shade(c, "primary", S800, "#075985")),
        ("primaryBold", shade(c, "primary", S700, "#0369A1")),
        ("success", shade(c, "success", S900, "#064E3B")),
        ("warning", shade(c, "warning", S900, "#78350F")),
        ("error", shade(c, "error", S900, "#7F1D1D")),
        ("info", shade(c, "info", S900, "#1E3A8A")),
        ("inverse", shade(c, "neutral", S50, "#F9FAFB")),
    ];
    let text = [
        ("primary", shade(c, "neutral", S50, "#F9FAFB")),
        ("secondary", shade(c, "neutral", S200, "#E5E7EB")),
        ("tertiary", shade(c, "neutral", S400, "#9CA3AF")),
        ("disabled", shade(c, "neutral", S600, "#4B5563")),
        ("brand", shade(c, "primary", S300, "#7DD3FC")),
        ("success", shade(c, "success", S300, "#6EE7B7")),
        ("warning", shade(c, "warning", S300, "#FCD34D")),
        ("error", shade(c, "error", S300, "#FCA5A5")),
        ("info", shade(c, "info", S300, "#93C5FD")),
        ("inverse", shade(c, "neutral", S900, "#111827")),
    ];
    let border = [
        ("default", shade(c, "neutral", S700, "#2D2D2D")),
        ("strong", shade(c, "neutral", S600, "#4B5563")),
        ("subtle", shade(c, "neutral", S800, "#1E1E1E")),
        ("primary", shade(c, "primary", S700, "#0369A1")),
        ("success", shade(c, "success", S700, "#047857")),
        ("warning", shade(c, "warning", S700, "#B45309")),
        ("error", shade(c, "error", S700, "#B91C1C")),
        ("info", shade(c, "info", S700, "#1D4ED8")),
        ("focus", shade(c, "primary", S400, "#38BDF8")),
    ];

    let owned = |pairs: &[(&str, String)]| -> IndexMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    };
    colors.background = owned(&background);
    colors.text = owned(&text);
    colors.border = owned(&border);
}

fn with_colors(colors: ThemeColors) -> ThemeSpecification {
    ThemeSpecification {
        colors: Some(colors),
        typography: Some(default_typography()),
        spacing: Some(default_spacing()),
        border_radius: Some(border_radius_scale(&[
            ("xs", "0.125rem"),
            ("sm", "0.25rem"),
            ("md", "0.375rem"),
            ("lg", "0.5rem"),
            ("xl", "0.75rem"),
            ("2xl", "1rem"),
        ])),
        shadows: Some(string_map(&[
            ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
            ("default", "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)"),
            ("md", "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)"),
            ("lg", "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)"),
            ("xl", "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)"),
            ("2xl", "0 25px 50px -12px rgba(0, 0, 0, 0.25)"),
            ("inner", "inset 0 2px 4px 0 rgba(0, 0, 0, 0.06)"),
            ("none", "none"),
        ])),
        breakpoints: Some(string_map(&[
            ("xs", "480px"),
            ("sm", "640px"),
            ("md", "768px"),
            ("lg", "1024px"),
            ("xl", "1280px"),
            ("2xl", "1536px"),
        ])),
        z_indices: Some(
            [
                ("auto", 0_i64),
                ("0", 0),
                ("10", 10),
                ("20", 20),
                ("30", 30),
                ("40", 40),
                ("50", 50),
                ("100", 100),
                ("1000", 1000),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        ),
        animations: Some(default_animations()),
        ..ThemeSpecification::default()
    }
}

pub(crate) fn string_map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

pub(crate) fn stack(fonts: &[&str]) -> Vec<String> {
    fonts.iter().map(|f| f.to_string()).collect()
}

pub(crate) fn decimal(value: f64) -> Literal {
    Number::from_f64(value)
        .map(Literal::Number)
        .unwrap_or_else(|| Literal::Text(value.to_string()))
}

/// A radius scale from named steps, bracketed by `none` and `full`.
pub fn border_radius_scale(steps: &[(&str, &str)]) -> IndexMap<String, String> {
    let mut scale = IndexMap::new();
    scale.insert("none".to_string(), "0".to_string());
    scale.extend(string_map(steps));
    scale.insert("full".to_string(), "9999px".to_string());
    scale
}

fn default_typography() -> Typography {
    let font_families = [
        ("sans", stack(&["Inter", "system-ui", "sans-serif"])),
        ("serif", stack(&["Georgia", "Times New Roman", "serif"])),
        ("mono", stack(&["Fira Code", "Courier New", "monospace"])),
        ("display", stack(&["Montserrat", "system-ui", "sans-serif"])),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let font_weights = [
        ("thin", 100),
        ("extralight", 200),
        ("light", 300),
        ("normal", 400),
        ("medium", 500),
        ("semibold", 600),
        ("bold", 700),
        ("extrabold", 800),
        ("black", 900),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), Number::from(v)))
    .collect();

    let line_heights = [
        ("none", Literal::from(1_i64)),
        ("tight", decimal(1.25)),
        ("snug", decimal(1.375)),
        ("normal", decimal(1.5)),
        ("relaxed", decimal(1.625)),
        ("loose", Literal::from(2_i64)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
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
            ("tight", "-0.025em"),
            ("normal", "0"),
            ("wide", "0.025em"),
            ("wider", "0.05em"),
            ("widest", "0.1em"),
        ])),
    }
}

fn default_spacing() -> IndexMap<String, String> {
    string_map(&[
        ("px", "1px"),
        ("0", "0"),
        ("0.5", "0.125rem"),
        ("1", "0.25rem"),
        ("1.5", "0.375rem"),
        ("2", "0.5rem"),
        ("2.5", "0.625rem"),
        ("3", "0.75rem"),
        ("3.5", "0.875rem"),
        ("4", "1rem"),
        ("5", "1.25rem"),
        ("6", "1.5rem"),
        ("7", "1.75rem"),
        ("8", "2rem"),
        ("9", "2.25rem"),
        ("10", "2.5rem"),
        ("11", "2.75rem"),
        ("12", "3rem"),
        ("14", "3.5rem"),
        ("16", "4rem"),
        ("20", "5rem"),
        ("24", "6rem"),
        ("28", "7rem"),
        ("32", "8rem"),
        ("36", "9rem"),
        ("40", "10rem"),
        ("44", "11rem"),
        ("48", "12rem"),
        ("52", "13rem"),
        ("56", "14rem"),
        ("60", "15rem"),
        ("64", "16rem"),
        ("72", "18rem"),
        ("80", "20rem"),
        ("96", "24rem"),
    ])
}

fn default_animations() -> IndexMap<String, AnimationPreset> {
    let mut animations = IndexMap::new();
    animations.insert("spin".to_string(), AnimationPreset::new("1s", "linear").infinite());
    animations.insert(
        "ping".to_string(),
        AnimationPreset::new("1s", "cubic-bezier(0, 0, 0.2, 1)").infinite(),
    );
    animations.insert("pulse".to_string(), AnimationPreset::new("2s", "ease-in-out").infinite());
    animations.insert(
        "bounce".to_string(),
        AnimationPreset::new("1s", "cubic-bezier(0.8, 0, 1, 1)")
            .infinite()
            .with_direction(AnimationDirection::Alternate),
    );
    animations
}
