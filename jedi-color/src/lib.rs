//! # Jedi Color
//!
//! Color math for the jedi theme engine.
//!
//! ## Overview
//!
//! - **[convert]**: hex, RGB and HSL conversions plus WCAG contrast
//! - **[scale]**: ten-shade color scales generated from one seed
//! - **[palette]**: full theme palettes with derived background, text and border roles
//!
//! ## Example
//!
//! ```rust
//! use jedi_color::palette::{generate_color_palette, ColorPaletteConfig};
//! use jedi_color::scale::Shade;
//!
//! let colors = generate_color_palette(&ColorPaletteConfig::new("#0EA5E9")).unwrap();
//! let primary = colors.scale("primary").unwrap();
//! assert!(primary.get(Shade::S500).is_some());
//! ```

#![warn(missing_docs)]

/// Hex, RGB and HSL conversions.
pub mod convert;

/// Error types for color operations.
pub mod error;

/// Palette generation.
pub mod palette;

/// Color scale generation.
pub mod scale;

pub use convert::{
    contrast_ratio, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, is_light_color,
    relative_luminance, rgb_to_hex, rgb_to_hsl, Hsl, Rgb,
};
pub use error::{ColorError, ColorResult};
pub use palette::{generate_color_palette, ColorInput, ColorPaletteConfig, SemanticColors, ThemeColors};
pub use scale::{generate_color_scale, generate_neutral_scale, ColorScale, ColorScaleOptions, Shade};
