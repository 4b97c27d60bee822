//! # Palette Generation
//!
//! Builds a full [ThemeColors] set from a handful of seeds: one scale per
//! role, plus the derived `background`, `text` and `border` mappings that
//! UIs read directly.
//!
//! Derived mappings point at fixed shades of fixed roles. When a role or
//! shade is missing the mapping falls back to a literal Tailwind-style
//! default, so the mappings are always fully populated.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ColorResult;
use crate::scale::{generate_color_scale, generate_neutral_scale, ColorScale, ColorScaleOptions, Shade};

/// Semantic role names, in palette order.
pub const SEMANTIC_ROLES: [&str; 4] = ["success", "warning", "error", "info"];

/// Seed used for the neutral scale when none is configured.
pub const DEFAULT_NEUTRAL_SEED: &str = "#6B7280";

/// Saturation adjustment applied to [DEFAULT_NEUTRAL_SEED].
pub const DEFAULT_NEUTRAL_SATURATION: f64 = -50.0;

/// A palette seed: a bare hex color or full scale options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// A seed color with default options.
    Hex(String),
    /// Explicit scale options.
    Options(ColorScaleOptions),
}

impl ColorInput {
    /// Expand into scale options.
    pub fn to_options(&self) -> ColorScaleOptions {
        match self {
            ColorInput::Hex(hex) => ColorScaleOptions::new(hex.clone()),
            ColorInput::Options(options) => options.clone(),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(hex: &str) -> Self {
        ColorInput::Hex(hex.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(hex: String) -> Self {
        ColorInput::Hex(hex)
    }
}

impl From<ColorScaleOptions> for ColorInput {
    fn from(options: ColorScaleOptions) -> Self {
        ColorInput::Options(options)
    }
}

/// Seeds for the semantic roles. Absent entries use built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticColors {
    /// Success seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<ColorInput>,
    /// Warning seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<ColorInput>,
    /// Error seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ColorInput>,
    /// Info seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<ColorInput>,
}

impl SemanticColors {
    fn get(&self, role: &str) -> Option<&ColorInput> {
        match role {
            "success" => self.success.as_ref(),
            "warning" => self.warning.as_ref(),
            "error" => self.error.as_ref(),
            "info" => self.info.as_ref(),
            _ => None,
        }
    }
}

/// Seed configuration for [generate_color_palette].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPaletteConfig {
    /// Primary brand seed.
    pub primary: ColorInput,
    /// Secondary seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<ColorInput>,
    /// Accent seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<ColorInput>,
    /// Neutral seed. Defaults to a desaturated gray.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutral: Option<ColorInput>,
    /// Semantic seeds.
    #[serde(default)]
    pub semantic: SemanticColors,
    /// Extra named roles.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub custom: IndexMap<String, ColorInput>,
}

impl ColorPaletteConfig {
    /// A config with only a primary seed.
    pub fn new(primary: impl Into<ColorInput>) -> Self {
        Self {
            primary: primary.into(),
            secondary: None,
            accent: None,
            neutral: None,
            semantic: SemanticColors::default(),
            custom: IndexMap::new(),
        }
    }

    /// Set the secondary seed.
    pub fn with_secondary(mut self, seed: impl Into<ColorInput>) -> Self {
        self.secondary = Some(seed.into());
        self
    }

    /// Set the accent seed.
    pub fn with_accent(mut self, seed: impl Into<ColorInput>) -> Self {
        self.accent = Some(seed.into());
        self
    }

    /// Set the neutral seed.
    pub fn with_neutral(mut self, seed: impl Into<ColorInput>) -> Self {
        self.neutral = Some(seed.into());
        self
    }

    /// Set the semantic seeds.
    pub fn with_semantic(mut self, semantic: SemanticColors) -> Self {
        self.semantic = semantic;
        self
    }

    /// Add a custom role.
    pub fn with_custom(mut self, name: impl Into<String>, seed: impl Into<ColorInput>) -> Self {
        self.custom.insert(name.into(), seed.into());
        self
    }
}

/// The color section of a theme.
///
/// Role scales are stored flat next to the derived mappings, so a theme's
/// `colors.primary.500` and `colors.text.primary` live side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Role name to scale.
    #[serde(flatten)]
    pub scales: IndexMap<String, ColorScale>,
    /// Background role to hex.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub background: IndexMap<String, String>,
    /// Text role to hex.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub text: IndexMap<String, String>,
    /// Border role to hex.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub border: IndexMap<String, String>,
}

impl ThemeColors {
    /// Get the scale for `role`.
    pub fn scale(&self, role: &str) -> Option<&ColorScale> {
        self.scales.get(role)
    }

    /// Recompute `background`, `text` and `border` from the current scales.
    pub fn refresh_derived(&mut self) {
        self.background = derive_background(&self.scales);
        self.text = derive_text(&self.scales);
        self.border = derive_border(&self.scales);
    }
}

/// Generate a complete palette from seed configuration.
pub fn generate_color_palette(config: &ColorPaletteConfig) -> ColorResult<ThemeColors> {
    let mut scales = IndexMap::new();

    scales.insert("primary".to_string(), scale_from(&config.primary)?);
    if let Some(secondary) = &config.secondary {
        scales.insert("secondary".to_string(), scale_from(secondary)?);
    }
    if let Some(accent) = &config.accent {
        scales.insert("accent".to_string(), scale_from(accent)?);
    }

    let neutral = match &config.neutral {
        Some(neutral) => scale_from(neutral)?,
        None => generate_neutral_scale(
            &ColorScaleOptions::new(DEFAULT_NEUTRAL_SEED).with_saturation(DEFAULT_NEUTRAL_SATURATION),
        )?,
    };
    scales.insert("neutral".to_string(), neutral);

    for role in SEMANTIC_ROLES {
        let scale = match config.semantic.get(role) {
            Some(seed) => scale_from(seed)?,
            None => generate_color_scale(&ColorScaleOptions::new(default_semantic_seed(role)))?,
        };
        scales.insert(role.to_string(), scale);
    }

    for (name, seed) in &config.custom {
        scales.insert(name.clone(), scale_from(seed)?);
    }

    let mut colors = ThemeColors {
        scales,
        ..ThemeColors::default()
    };
    colors.refresh_derived();

    log::debug!("Generated palette with {} scales", colors.scales.len());
    Ok(colors)
}

fn scale_from(seed: &ColorInput) -> ColorResult<ColorScale> {
    generate_color_scale(&seed.to_options())
}

fn default_semantic_seed(role: &str) -> &'static str {
    match role {
        "success" => "#10B981",
        "warning" => "#F59E0B",
        "error" => "#EF4444",
        _ => "#3B82F6",
    }
}

/// Literal fallbacks for the semantic roles at shades 50, 700 and 300.
fn semantic_fallback(role: &str, shade: Shade) -> &'static str {
    match (role, shade) {
        ("success", Shade::S50) => "#ECFDF5",
        ("warning", Shade::S50) => "#FFFBEB",
        ("error", Shade::S50) => "#FEF2F2",
        ("info", Shade::S50) => "#EFF6FF",
        ("success", Shade::S700) => "#047857",
        ("warning", Shade::S700) => "#B45309",
        ("error", Shade::S700) => "#B91C1C",
        ("info", Shade::S700) => "#1D4ED8",
        ("success", _) => "#6EE7B7",
        ("warning", _) => "#FCD34D",
        ("error", _) => "#FCA5A5",
        _ => "#93C5FD",
    }
}

fn pick(scales: &IndexMap<String, ColorScale>, role: &str, shade: Shade, fallback: &str) -> String {
    scales
        .get(role)
        .and_then(|scale| scale.get(shade))
        .unwrap_or(fallback)
        .to_string()
}

fn derive_background(scales: &IndexMap<String, ColorScale>) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    map.insert("default".into(), pick(scales, "neutral", Shade::S50, "#FFFFFF"));
    map.insert("paper".into(), pick(scales, "neutral", Shade::S100, "#F9FAFB"));
    map.insert("subtle".into(), pick(scales, "neutral", Shade::S200, "#F3F4F6"));
    map.insert("primaryLight".into(), pick(scales, "primary", Shade::S50, "#F0F9FF"));
    map.insert("primary".into(), pick(scales, "primary", Shade::S100, "#E0F2FE"));
    map.insert("primaryBold".into(), pick(scales, "primary", Shade::S200, "#BAE6FD"));
    for role in SEMANTIC_ROLES {
        map.insert(role.into(), pick(scales, role, Shade::S50, semantic_fallback(role, Shade::S50)));
    }
    map.insert("inverse".into(), pick(scales, "neutral", Shade::S900, "#111827"));
    map
}

fn derive_text(scales: &IndexMap<String, ColorScale>) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    map.insert("primary".into(), pick(scales, "neutral", Shade::S900, "#111827"));
    map.insert("secondary".into(), pick(scales, "neutral", Shade::S700, "#374151"));
    map.insert("tertiary".into(), pick(scales, "neutral", Shade::S500, "#6B7280"));
    map.insert("disabled".into(), pick(scales, "neutral", Shade::S400, "#9CA3AF"));
    map.insert("brand".into(), pick(scales, "primary", Shade::S600, "#0284C7"));
    for role in SEMANTIC_ROLES {
        map.insert(role.into(), pick(scales, role, Shade::S700, semantic_fallback(role, Shade::S700)));
    }
    map.insert("inverse".into(), pick(scales, "neutral", Shade::S50, "#F9FAFB"));
    map
}

fn derive_border(scales: &IndexMap<String, ColorScale>) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    map.insert("default".into(), pick(scales, "neutral", Shade::S200, "#E5E7EB"));
    map.insert("strong".into(), pick(scales, "neutral", Shade::S300, "#D1D5DB"));
    map.insert("subtle".into(), pick(scales, "neutral", Shade::S100, "#F3F4F6"));
    map.insert("primary".into(), pick(scales, "primary", Shade::S300, "#7DD3FC"));
    for role in SEMANTIC_ROLES {
        map.insert(role.into(), pick(scales, role, Shade::S300, semantic_fallback(role, Shade::S300)));
    }
    map.insert("focus".into(), pick(scales, "primary", Shade::S500, "#0EA5E9"));
    map
}
