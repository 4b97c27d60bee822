#![warn(missing_docs)]

//! Theme and style resolution for server-driven UIs.

pub use jedi_color as color;
pub use jedi_theme as theme;

/// A "prelude" for users of the jedi engine.
///
/// Importing this module brings into scope the most common types
/// needed to load a theme and resolve component styles.
///
/// ```rust
/// use jedi::prelude::*;
///
/// let registry = ThemeRegistry::with_builtin_presets().unwrap();
/// let resolver = registry.resolver().unwrap();
/// let request = StyleRequest::new("Text").with_style("padding", "token(spacing.4)");
/// let resolved = resolver.resolve(&request, &StyleContext::root());
/// assert_eq!(resolved.value.style["padding"].to_string(), "1rem");
/// ```
pub mod prelude {
    // Color
    pub use crate::color::{
        contrast_ratio, generate_color_palette, generate_color_scale, hex_to_hsl, hex_to_rgb, is_light_color,
        ColorPaletteConfig, ColorScale, ColorScaleOptions, Shade, ThemeColors,
    };

    // Theme model and loading
    pub use crate::theme::{
        EngineConfig, EnhancedThemeSpecification, ThemeError, ThemeLoader, ThemeMode, ThemeRegistry, ThemeResult,
        ThemeSpecification,
    };

    // Cascade
    pub use crate::theme::cascade::{ResolvedStyle, StyleContext, StylePolicy, StyleRequest, StyleResolver};

    // Theme generation
    pub use crate::theme::{create_dark_theme, generate_brand_theme, generate_custom_theme, BrandThemeOptions};

    // Tokens
    pub use crate::theme::{extract_css_variables, merge_themes, resolve_theme_token, CssVariableOptions};
}
