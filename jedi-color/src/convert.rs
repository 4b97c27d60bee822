//! # Color Conversions
//!
//! Conversions between the three color forms used across the engine:
//!
//! - **Hex**: `#rrggbb` strings, the form stored in scales and themes
//! - **[Rgb]**: 8-bit channels
//! - **[Hsl]**: hue in degrees, saturation and lightness in percent
//!
//! Hex and RGB convert losslessly. RGB to [Hsl] rounds saturation and
//! lightness to whole percents, so a hex color converted to HSL and back
//! can land up to 3 away on a channel.
//!
//! Luminance helpers follow WCAG 2.x for contrast and the W3C AERT
//! perceived-brightness weights for the light/dark split.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};

/// Perceived brightness above which a color counts as light.
pub const LIGHT_THRESHOLD: f64 = 0.5;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a new color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) string, case-insensitively.
    pub fn from_hex(hex: &str) -> ColorResult<Self> {
        hex_to_rgb(hex)
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Convert to HSL.
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn relative_luminance(self) -> f64 {
        relative_luminance(self)
    }

    /// Perceived brightness in `[0, 1]` using the 0.299/0.587/0.114 weights.
    pub fn perceived_brightness(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color in HSL space.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to RGB.
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        hsl_to_hex(self)
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self {
            h: wrap_hue(self.h + degrees),
            ..self
        }
    }
}

/// Parse a 6-digit hex color with an optional leading `#`.
pub fn hex_to_rgb(hex: &str) -> ColorResult<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::malformed_hex(hex));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::malformed_hex(hex))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format a color as lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Convert RGB to HSL.
///
/// Saturation and lightness are rounded to whole percents. Hue keeps its
/// full precision.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl::new(0.0, 0.0, percent(l));
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(wrap_hue(h * 60.0), percent(s), percent(l))
}

fn percent(fraction: f64) -> f64 {
    (fraction * 100.0).round()
}

/// Convert HSL to RGB.
///
/// Hue wraps, saturation and lightness clamp to `[0, 100]`. Non-finite
/// components are read as zero so the result is always a real color.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = wrap_hue(finite_or_zero(hsl.h));
    let s = finite_or_zero(hsl.s).clamp(0.0, 100.0) / 100.0;
    let l = finite_or_zero(hsl.l).clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Parse a hex color straight into HSL.
pub fn hex_to_hsl(hex: &str) -> ColorResult<Hsl> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

/// Format an HSL color as lowercase `#rrggbb`.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// Whether a color reads as light, by perceived brightness.
pub fn is_light_color(hex: &str) -> ColorResult<bool> {
    Ok(hex_to_rgb(hex)?.perceived_brightness() > LIGHT_THRESHOLD)
}

/// WCAG relative luminance.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    fn linear(channel: u8) -> f64 {
        let v = f64::from(channel) / 255.0;
        if v <= 0.039_28 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linear(rgb.r) + 0.7152 * linear(rgb.g) + 0.0722 * linear(rgb.b)
}

/// WCAG contrast ratio between two hex colors, in `[1, 21]`.
pub fn contrast_ratio(a: &str, b: &str) -> ColorResult<f64> {
    let la = relative_luminance(hex_to_rgb(a)?);
    let lb = relative_luminance(hex_to_rgb(b)?);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Ok((lighter + 0.05) / (darker + 0.05))
}

pub(crate) fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
