//! # Color Scales
//!
//! A [ColorScale] is a ten-shade ramp keyed `"50"` through `"900"`, derived
//! from one seed color by [generate_color_scale].
//!
//! The lightness of each rung comes from a ladder. With the default base
//! shade `"500"` the ladder is a fixed canonical one stretched around 60%
//! by the contrast factor, so the seed's own lightness does not matter.
//! With any other base shade the seed's lightness anchors that rung and the
//! others step away from it by `10 * contrast` percent.
//!
//! Every rung is clamped to `2..=98`, so a high contrast or an extreme
//! anchor can pin neighbouring rungs to the same lightness.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::convert::{hex_to_hsl, hsl_to_hex, Hsl};
use crate::error::{ColorError, ColorResult};

/// Lightness of each rung when the seed sits at shade `"500"`.
const CANONICAL_LADDER: [f64; 10] = [97.0, 94.0, 88.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0];

/// Midpoint the canonical ladder is stretched around.
const LADDER_MIDPOINT: f64 = 60.0;

const MIN_LIGHTNESS: f64 = 2.0;
const MAX_LIGHTNESS: f64 = 98.0;

/// Contrast used by [generate_neutral_scale].
pub const NEUTRAL_CONTRAST: f64 = 0.8;

/// Saturation adjustment [generate_neutral_scale] falls back to.
pub const NEUTRAL_SATURATION: f64 = -70.0;

/// A shade key of a color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shade {
    /// Shade `"50"`, the lightest.
    #[serde(rename = "50")]
    S50,
    /// Shade `"100"`.
    #[serde(rename = "100")]
    S100,
    /// Shade `"200"`.
    #[serde(rename = "200")]
    S200,
    /// Shade `"300"`.
    #[serde(rename = "300")]
    S300,
    /// Shade `"400"`.
    #[serde(rename = "400")]
    S400,
    /// Shade `"500"`, the usual seed position.
    #[serde(rename = "500")]
    S500,
    /// Shade `"600"`.
    #[serde(rename = "600")]
    S600,
    /// Shade `"700"`.
    #[serde(rename = "700")]
    S700,
    /// Shade `"800"`.
    #[serde(rename = "800")]
    S800,
    /// Shade `"900"`, the darkest.
    #[serde(rename = "900")]
    S900,
}

impl Shade {
    /// Every shade, lightest first.
    pub const ALL: [Shade; 10] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    /// The string key of this shade.
    pub const fn as_str(self) -> &'static str {
        match self {
            Shade::S50 => "50",
            Shade::S100 => "100",
            Shade::S200 => "200",
            Shade::S300 => "300",
            Shade::S400 => "400",
            Shade::S500 => "500",
            Shade::S600 => "600",
            Shade::S700 => "700",
            Shade::S800 => "800",
            Shade::S900 => "900",
        }
    }

    /// Position of this shade in [Shade::ALL].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a shade by its string key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shade| shade.as_str() == key)
    }
}

impl Default for Shade {
    fn default() -> Self {
        Self::S500
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mapping from shade key to hex color.
///
/// Generated scales always hold all ten shades. Hand-authored scales may be
/// partial, so keys are kept as plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale(IndexMap<String, String>);

impl ColorScale {
    /// Create an empty scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the hex color at `shade`.
    pub fn get(&self, shade: Shade) -> Option<&str> {
        self.get_key(shade.as_str())
    }

    /// Get the hex color at a raw key.
    pub fn get_key(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Get the color at `shade`, or `fallback` when the shade is absent.
    pub fn get_or<'a>(&'a self, shade: Shade, fallback: &'a str) -> &'a str {
        self.get(shade).unwrap_or(fallback)
    }

    /// Set the hex color at `shade`.
    pub fn insert(&mut self, shade: Shade, hex: impl Into<String>) {
        self.0.insert(shade.as_str().to_string(), hex.into());
    }

    /// Whether every one of the ten shades is present.
    pub fn is_complete(&self) -> bool {
        Shade::ALL.iter().all(|shade| self.0.contains_key(shade.as_str()))
    }

    /// HSL lightness of the color at `shade`, if present and parseable.
    pub fn lightness(&self, shade: Shade) -> Option<f64> {
        self.get(shade)
            .and_then(|hex| hex_to_hsl(hex).ok())
            .map(|hsl| hsl.l)
    }

    /// Number of shades present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the scale has no shades.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(key, hex)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(Shade, String)> for ColorScale {
    fn from_iter<I: IntoIterator<Item = (Shade, String)>>(iter: I) -> Self {
        let mut scale = Self::new();
        for (shade, hex) in iter {
            scale.insert(shade, hex);
        }
        scale
    }
}

/// Options for [generate_color_scale].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScaleOptions {
    /// Seed color as hex.
    pub base_color: String,
    /// Shade the seed sits at. Defaults to `"500"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_shade: Option<Shade>,
    /// Hue drift per rung, `-100..=100`. Defaults to `0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Saturation adjustment in percent, `-100..=100`. Defaults to `0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    /// Lightness spread factor, `0.5..=2.0`. Defaults to `1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
}

impl ColorScaleOptions {
    /// Options with only a seed color.
    pub fn new(base_color: impl Into<String>) -> Self {
        Self {
            base_color: base_color.into(),
            base_shade: None,
            temperature: None,
            saturation: None,
            contrast: None,
        }
    }

    /// Set the base shade.
    pub fn with_base_shade(mut self, shade: Shade) -> Self {
        self.base_shade = Some(shade);
        self
    }

    /// Set the temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the saturation adjustment.
    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = Some(saturation);
        self
    }

    /// Set the contrast factor.
    pub fn with_contrast(mut self, contrast: f64) -> Self {
        self.contrast = Some(contrast);
        self
    }
}

/// Generate a ten-shade scale from a seed color.
///
/// Out-of-range options are clamped into their documented ranges with a
/// warning. Non-finite options and malformed hex are rejected.
pub fn generate_color_scale(options: &ColorScaleOptions) -> ColorResult<ColorScale> {
    let base = hex_to_hsl(&options.base_color)?;
    let base_shade = options.base_shade.unwrap_or_default();
    let temperature = bounded("temperature", options.temperature, 0.0, -100.0, 100.0)?;
    let saturation = bounded("saturation", options.saturation, 0.0, -100.0, 100.0)?;
    let contrast = bounded("contrast", options.contrast, 1.0, 0.5, 2.0)?;

    let base_index = base_shade.index();
    let ladder = lightness_ladder(base.l, base_shade, contrast);

    let scale = Shade::ALL
        .iter()
        .zip(ladder)
        .map(|(&shade, lightness)| {
            let offset = shade.index() as f64 - base_index as f64;
            let hue_shift = temperature / 500.0 * offset;
            let sat_factor = 1.0 + saturation / 100.0 - 0.05 * offset;
            let rung = Hsl::new(
                base.h,
                (base.s * sat_factor).clamp(0.0, 100.0),
                lightness,
            )
            .rotate_hue(hue_shift);
            (shade, hsl_to_hex(rung))
        })
        .collect::<ColorScale>();

    log::debug!(
        "Generated color scale from {} (base shade {}, contrast {})",
        options.base_color,
        base_shade,
        contrast
    );

    Ok(scale)
}

/// Generate a desaturated gray scale.
///
/// Same as [generate_color_scale] with contrast forced to
/// [NEUTRAL_CONTRAST] and saturation defaulting to [NEUTRAL_SATURATION].
pub fn generate_neutral_scale(options: &ColorScaleOptions) -> ColorResult<ColorScale> {
    let neutral = ColorScaleOptions {
        contrast: Some(NEUTRAL_CONTRAST),
        saturation: Some(options.saturation.unwrap_or(NEUTRAL_SATURATION)),
        ..options.clone()
    };
    generate_color_scale(&neutral)
}

/// Lightness of every rung, lightest first.
pub(crate) fn lightness_ladder(base_lightness: f64, base_shade: Shade, contrast: f64) -> [f64; 10] {
    if base_shade == Shade::S500 {
        return CANONICAL_LADDER.map(|l| {
            (LADDER_MIDPOINT + (l - LADDER_MIDPOINT) * contrast).clamp(MIN_LIGHTNESS, MAX_LIGHTNESS)
        });
    }

    let anchor = base_shade.index() as f64;
    let anchor_lightness = base_lightness.clamp(MIN_LIGHTNESS, MAX_LIGHTNESS);
    let mut ladder = [0.0; 10];
    for (i, rung) in ladder.iter_mut().enumerate() {
        let steps = anchor - i as f64;
        *rung = (anchor_lightness + steps * 10.0 * contrast).clamp(MIN_LIGHTNESS, MAX_LIGHTNESS);
    }
    ladder
}

fn bounded(option: &'static str, value: Option<f64>, default: f64, min: f64, max: f64) -> ColorResult<f64> {
    let value = value.unwrap_or(default);
    if !value.is_finite() {
        return Err(ColorError::non_finite(option, value));
    }
    if value < min || value > max {
        log::warn!("Scale option '{}' = {} is outside {}..={}, clamping", option, value, min, max);
    }
    Ok(value.clamp(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::hex_to_hsl;
    use proptest::prelude::*;

    #[test]
    fn test_shade_keys() {
        assert_eq!(Shade::from_key("500"), Some(Shade::S500));
        assert_eq!(Shade::from_key("550"), None);
        assert_eq!(Shade::S900.index(), 9);
        assert_eq!(serde_json::to_string(&Shade::S50).unwrap(), "\"50\"");
    }

    #[test]
    fn test_generate_scale_is_complete() {
        let scale = generate_color_scale(&ColorScaleOptions::new("#0EA5E9")).unwrap();
        assert!(scale.is_complete());
        assert_eq!(scale.len(), 10);
        let keys: Vec<&str> = scale.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"]);
    }

    #[test]
    fn test_generate_scale_keeps_seed_hue() {
        let seed = hex_to_hsl("#0EA5E9").unwrap();
        let scale = generate_color_scale(&ColorScaleOptions::new("#0EA5E9")).unwrap();
        let mid = hex_to_hsl(scale.get(Shade::S500).unwrap()).unwrap();
        assert!((mid.h - seed.h).abs() <= 5.0);
        assert!(scale.lightness(Shade::S50).unwrap() > scale.lightness(Shade::S900).unwrap());
    }

    #[test]
    fn test_canonical_ladder_at_unit_contrast() {
        let ladder = lightness_ladder(12.0, Shade::S500, 1.0);
        assert_eq!(ladder, CANONICAL_LADDER);
    }

    #[test]
    fn test_anchored_ladder() {
        let ladder = lightness_ladder(40.0, Shade::S300, 1.0);
        assert_eq!(ladder[3], 40.0);
        assert_eq!(ladder[0], 70.0);
        assert_eq!(ladder[4], 30.0);
        assert_eq!(ladder[9], MIN_LIGHTNESS);
    }

    #[test]
    fn test_anchored_ladder_clamps_anchor() {
        let ladder = lightness_ladder(100.0, Shade::S100, 1.0);
        assert_eq!(ladder[0], MAX_LIGHTNESS);
        assert_eq!(ladder[1], MAX_LIGHTNESS);
        assert_eq!(ladder[2], 88.0);
    }

    #[test]
    fn test_neutral_scale_is_desaturated() {
        let options = ColorScaleOptions::new("#0EA5E9");
        let chromatic = generate_color_scale(&options).unwrap();
        let neutral = generate_neutral_scale(&options).unwrap();
        let s_chromatic = hex_to_hsl(chromatic.get(Shade::S500).unwrap()).unwrap().s;
        let s_neutral = hex_to_hsl(neutral.get(Shade::S500).unwrap()).unwrap().s;
        assert!(s_neutral < s_chromatic);
    }

    #[test]
    fn test_high_contrast_ties_at_the_bounds() {
        let scale = generate_color_scale(&ColorScaleOptions::new("#3B82F6").with_contrast(2.0)).unwrap();
        for shade in [Shade::S50, Shade::S100, Shade::S200, Shade::S300] {
            assert_eq!(scale.lightness(shade), Some(MAX_LIGHTNESS));
        }
        assert_eq!(scale.lightness(Shade::S400), Some(80.0));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(generate_color_scale(&ColorScaleOptions::new("blue")).is_err());
        let err = generate_color_scale(&ColorScaleOptions::new("#000000").with_contrast(f64::NAN))
            .unwrap_err();
        assert!(matches!(err, ColorError::NonFiniteOption { option: "contrast", .. }));
    }

    #[test]
    fn test_out_of_range_options_are_clamped() {
        let wild = ColorScaleOptions::new("#3B82F6").with_contrast(9.0).with_saturation(400.0);
        let tame = ColorScaleOptions::new("#3B82F6").with_contrast(2.0).with_saturation(100.0);
        assert_eq!(generate_color_scale(&wild).unwrap(), generate_color_scale(&tame).unwrap());
    }

    #[test]
    fn test_options_deserialize_camel_case() {
        let options: ColorScaleOptions =
            serde_json::from_str(r##"{"baseColor":"#6B7280","baseShade":"600","saturation":-50}"##)
                .unwrap();
        assert_eq!(options.base_shade, Some(Shade::S600));
        assert_eq!(options.saturation, Some(-50.0));
        assert_eq!(options.contrast, None);
    }

    proptest! {
        #[test]
        fn prop_scale_lightness_decreases_for_every_base_shade(
            r in any::<u8>(), g in any::<u8>(), b in any::<u8>(),
            shade_index in 0usize..10,
            temperature in -100.0f64..=100.0,
            saturation in -100.0f64..=100.0,
            contrast in 0.5f64..=2.0,
        ) {
            let seed = crate::convert::Rgb::new(r, g, b).to_hex();
            let base_shade = Shade::ALL[shade_index];
            let options = ColorScaleOptions::new(seed.clone())
                .with_base_shade(base_shade)
                .with_temperature(temperature)
                .with_saturation(saturation)
                .with_contrast(contrast);
            let scale = generate_color_scale(&options).unwrap();
            let lightness: Vec<f64> = Shade::ALL.iter().map(|s| scale.lightness(*s).unwrap()).collect();

            // Rungs pinned at the lightness bounds may tie.
            let base_l = hex_to_hsl(&seed).unwrap().l;
            let clamped = lightness_ladder(base_l, base_shade, contrast)
                .iter()
                .any(|l| *l <= MIN_LIGHTNESS || *l >= MAX_LIGHTNESS);
            for pair in lightness.windows(2) {
                if clamped {
                    prop_assert!(pair[0] >= pair[1], "{:?}", lightness);
                } else {
                    prop_assert!(pair[0] > pair[1], "{:?}", lightness);
                }
            }
        }

        #[test]
        fn prop_ladder_never_increases(
            base_l in 0.0f64..=100.0,
            shade_index in 0usize..10,
            contrast in 0.5f64..=2.0,
        ) {
            let ladder = lightness_ladder(base_l, Shade::ALL[shade_index], contrast);
            for pair in ladder.windows(2) {
                prop_assert!(pair[0] >= pair[1]);
            }
        }
    }
}
