#![warn(missing_docs)]

//! # Jedi Theme
//!
//! Themes, design tokens and the style cascade for server-driven UIs.
//! A theme is a JSON (or TOML) document; this crate validates it, composes
//! it with other themes, flattens it into tokens and CSS variables, and
//! resolves every component instance to a final class list and inline
//! style.
//!
//! ## Overview
//!
//! - **[ThemeSpecification](theme::ThemeSpecification)**: the typed theme model
//! - **[validate_theme](validate::validate_theme)**: structural validation with every error reported at once
//! - **[merge_themes](compose::merge_themes)** and **[compose_theme](compose::compose_theme)**: deep merge and inheritance
//! - **[resolve_theme_token](tokens::resolve_theme_token)**: dot-path token lookup
//! - **[extract_css_variables](css::extract_css_variables)**: CSS custom properties
//! - **[StyleResolver](cascade::StyleResolver)**: the style cascade
//! - **[generate_brand_theme](brand::generate_brand_theme)**: complete themes from brand colors and a personality
//! - **[ThemeRegistry](registry::ThemeRegistry)**: named themes, variants and color modes
//! - **[EngineConfig](config::EngineConfig)**: configuration from TOML files and environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use jedi_theme::cascade::{StyleContext, StyleRequest};
//! use jedi_theme::registry::ThemeRegistry;
//!
//! let registry = ThemeRegistry::with_builtin_presets().unwrap();
//! let resolver = registry.resolver().unwrap();
//!
//! let request = StyleRequest::new("Button").with_style("color", "token(colors.primary.500)");
//! let resolved = resolver.resolve(&request, &StyleContext::root());
//! assert!(resolved.value.style["color"].to_string().starts_with('#'));
//! ```
//!
//! ## Cascade Order
//!
//! By default, lowest precedence first:
//!
//! 1. `theme.defaults`
//! 2. `theme.components`: global, variant, size, state, then the first matching combination
//! 3. `parent.inherited`, for inheriting components only
//! 4. `spec.style`
//! 5. `spec.className`
//! 6. `runtime.overrides`
//!
//! A theme may reorder these through `styleExtension.composition.precedenceOrder`.

/// Contains the brand theme generator.
pub mod brand;
/// Contains the style cascade: [cascade::StyleResolver], requests and contexts.
pub mod cascade;
/// Contains deep merge and theme inheritance.
pub mod compose;
/// Contains the [config::EngineConfig] struct for engine configuration.
pub mod config;
/// Contains CSS variable extraction.
pub mod css;
/// Contains the [error::ThemeError] and validation error types.
pub mod error;
/// Contains the [loader::ThemeLoader] for theme files.
pub mod loader;
/// Contains the built-in theme presets and dark theme derivation.
pub mod presets;
/// Contains the [registry::ThemeRegistry] for runtime theme switching.
pub mod registry;
/// Contains the typed theme model.
pub mod theme;
/// Contains design token lookup and enumeration.
pub mod tokens;
/// Contains theme validation.
pub mod validate;
/// Contains the untyped [value::ThemeValue] tree and [value::ThemeValueExt].
pub mod value;

pub use brand::{generate_brand_theme, BrandColors, BrandPersonality, BrandThemeOptions, BrandTypography};
pub use cascade::{ResolvedStyle, StyleContext, StyleRequest, StyleResolver, StyleWarning};
pub use compose::{compose_theme, merge_themes};
pub use config::EngineConfig;
pub use css::{extract_css_variables, CssVariableOptions};
pub use error::{ThemeError, ThemeResult, ValidationCode, ValidationError};
pub use loader::ThemeLoader;
pub use presets::{builtin_presets, create_dark_theme, default_theme, generate_custom_theme, ThemePreset};
pub use registry::ThemeRegistry;
pub use theme::{EnhancedThemeSpecification, ThemeMode, ThemeSpecification};
pub use tokens::{generate_theme_tokens, resolve_theme_token, ThemeToken};
pub use validate::{validate_enhanced_theme, validate_theme};
pub use value::{Literal, ThemeValue, ThemeValueExt};
