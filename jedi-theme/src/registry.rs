//! # Theme Registry
//!
//! An owned table of named themes plus the host's current choice of theme,
//! variant and color mode.
//!
//! ## Overview
//!
//! - **[ThemeRegistry]**: registers themes, switches between them and hands
//!   out the resolved active theme
//! - **[ThemeSummary]**: what a theme picker needs to list a theme
//!
//! The active theme is resolved eagerly whenever the selection or a
//! registered theme changes, in this order:
//!
//! 1. the `base` chain is flattened, ancestors first
//! 2. the selected variant is merged over the result
//! 3. the color-mode fragment is merged over that
//!
//! A change that would fail to resolve is rejected and leaves the registry
//! as it was. There is no global instance; hosts that share a registry
//! across threads wrap it in their own lock.
//!
//! ## Example
//!
//! ```rust
//! use jedi_theme::registry::ThemeRegistry;
//! use jedi_theme::theme::ThemeMode;
//!
//! let mut registry = ThemeRegistry::with_builtin_presets().unwrap();
//! registry.activate("purple").unwrap();
//! registry.set_color_mode(ThemeMode::Dark).unwrap();
//!
//! let vars = registry.css_variables(&Default::default()).unwrap();
//! assert!(vars.contains_key("--theme-colors-background-default"));
//! ```

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::cascade::StyleResolver;
use crate::css::{extract_css_variables, CssVariableOptions};
use crate::error::{ThemeError, ThemeResult};
use crate::presets::{builtin_presets, dark_fragment, ThemePreset, DEFAULT_PRESET_ID};
use crate::theme::{ColorModeSettings, EnhancedThemeSpecification, ThemeMode, ThemeSpecification};

/// A registered theme and its display metadata.
#[derive(Debug, Clone)]
struct ThemeEntry {
    name: String,
    description: Option<String>,
    is_default: bool,
    theme: EnhancedThemeSpecification,
}

/// A listing entry for a registered theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSummary {
    /// Registry key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether this is a default preset.
    pub is_default: bool,
    /// Base theme, if the theme extends one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Names of the theme's variants.
    pub variants: Vec<String>,
    /// Whether the theme ships a dark color-mode fragment.
    pub has_dark_mode: bool,
}

/// Named themes and the current selection.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    entries: IndexMap<String, ThemeEntry>,
    active: Option<String>,
    variant: Option<String>,
    color_mode: ThemeMode,
    system_prefers_dark: bool,
    resolved: Option<Arc<ThemeSpecification>>,
}

impl ThemeRegistry {
    /// An empty registry with nothing active.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in preset, with the default active.
    pub fn with_builtin_presets() -> ThemeResult<Self> {
        let mut registry = Self::new();
        for preset in builtin_presets()? {
            registry.register_preset(preset)?;
        }
        registry.activate(DEFAULT_PRESET_ID)?;
        Ok(registry)
    }

    /// Register or replace the theme `id`.
    ///
    /// Replacing a theme keeps its listing position. If the active theme
    /// depends on `id` and no longer resolves, the registration is undone.
    pub fn register(&mut self, id: impl Into<String>, theme: impl Into<EnhancedThemeSpecification>) -> ThemeResult<()> {
        let id = id.into();
        let entry = ThemeEntry {
            name: id.clone(),
            description: None,
            is_default: false,
            theme: theme.into(),
        };
        self.insert_entry(id, entry)
    }

    /// Register a preset with a generated dark color-mode fragment.
    pub fn register_preset(&mut self, preset: ThemePreset) -> ThemeResult<()> {
        let color_mode = ColorModeSettings {
            default_mode: ThemeMode::Light,
            respect_system_preference: true,
            light: None,
            dark: Some(dark_fragment(&preset.theme)?),
        };
        let entry = ThemeEntry {
            name: preset.name,
            description: preset.description,
            is_default: preset.is_default,
            theme: EnhancedThemeSpecification {
                theme: preset.theme,
                color_mode: Some(color_mode),
                variants: IndexMap::new(),
            },
        };
        self.insert_entry(preset.id, entry)
    }

    fn insert_entry(&mut self, id: String, entry: ThemeEntry) -> ThemeResult<()> {
        let previous = self.entries.insert(id.clone(), entry);
        match self.stage(self.active.as_deref(), self.variant.as_deref(), self.color_mode, self.system_prefers_dark) {
            Ok(resolved) => {
                self.resolved = resolved;
                Ok(())
            }
            Err(err) => {
                match previous {
                    Some(previous) => {
                        self.entries.insert(id, previous);
                    }
                    None => {
                        self.entries.shift_remove(&id);
                    }
                }
                Err(err)
            }
        }
    }

    /// The theme registered as `id`, before any resolution.
    pub fn get(&self, id: &str) -> Option<&EnhancedThemeSpecification> {
        self.entries.get(id).map(|entry| &entry.theme)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Every registered theme in registration order.
    pub fn available_themes(&self) -> Vec<ThemeSummary> {
        self.entries
            .iter()
            .map(|(id, entry)| ThemeSummary {
                id: id.clone(),
                name: entry.name.clone(),
                description: entry.description.clone(),
                is_default: entry.is_default,
                base: entry.theme.theme.base.clone(),
                variants: entry.theme.variants.keys().cloned().collect(),
                has_dark_mode: entry
                    .theme
                    .color_mode
                    .as_ref()
                    .is_some_and(|settings| settings.dark.is_some()),
            })
            .collect()
    }

    /// Make `id` the active theme with no variant selected.
    pub fn activate(&mut self, id: &str) -> ThemeResult<()> {
        let resolved = self.stage(Some(id), None, self.color_mode, self.system_prefers_dark)?;
        log::debug!("Activated theme '{}'", id);
        self.active = Some(id.to_string());
        self.variant = None;
        self.resolved = resolved;
        Ok(())
    }

    /// Select a variant of the active theme, or clear the selection.
    pub fn select_variant(&mut self, variant: Option<&str>) -> ThemeResult<()> {
        let active = self.active.clone().ok_or_else(no_active_theme)?;
        let resolved = self.stage(Some(&active), variant, self.color_mode, self.system_prefers_dark)?;
        self.variant = variant.map(str::to_string);
        self.resolved = resolved;
        Ok(())
    }

    /// Change the color mode.
    pub fn set_color_mode(&mut self, mode: ThemeMode) -> ThemeResult<()> {
        let resolved = self.stage(self.active.as_deref(), self.variant.as_deref(), mode, self.system_prefers_dark)?;
        log::debug!("Color mode set to {}", mode);
        self.color_mode = mode;
        self.resolved = resolved;
        Ok(())
    }

    /// Record the host's dark preference, used by [ThemeMode::System].
    pub fn set_system_prefers_dark(&mut self, prefers_dark: bool) -> ThemeResult<()> {
        let resolved = self.stage(self.active.as_deref(), self.variant.as_deref(), self.color_mode, prefers_dark)?;
        self.system_prefers_dark = prefers_dark;
        self.resolved = resolved;
        Ok(())
    }

    /// Id of the active theme.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The selected variant.
    pub fn active_variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// The selected color mode.
    pub fn color_mode(&self) -> ThemeMode {
        self.color_mode
    }

    /// The active theme with its base chain, variant and color mode applied.
    pub fn active_theme(&self) -> ThemeResult<Arc<ThemeSpecification>> {
        self.resolved.clone().ok_or_else(no_active_theme)
    }

    /// A resolver for the active theme.
    pub fn resolver(&self) -> ThemeResult<StyleResolver> {
        StyleResolver::new(self.active_theme()?)
    }

    /// CSS variables for the active theme.
    pub fn css_variables(&self, options: &CssVariableOptions) -> ThemeResult<IndexMap<String, String>> {
        let value = self.active_theme()?.to_value()?;
        Ok(extract_css_variables(&value, options))
    }

    /// The theme `id` with its `base` chain merged in, ancestors first.
    ///
    /// Color-mode settings come from the nearest theme in the chain that
    /// has any; variants accumulate with nearer themes winning.
    pub fn flattened(&self, id: &str) -> ThemeResult<EnhancedThemeSpecification> {
        let mut seen = IndexSet::new();
        let mut chain = Vec::new();
        let mut current = id;
        loop {
            if !seen.insert(current) {
                return Err(ThemeError::BaseCycle {
                    name: current.to_string(),
                });
            }
            let entry = self.entries.get(current).ok_or_else(|| ThemeError::not_found(current))?;
            chain.push(&entry.theme);
            match entry.theme.theme.base.as_deref() {
                Some(base) => current = base,
                None => break,
            }
        }

        let mut flattened = EnhancedThemeSpecification::default();
        for layer in chain.into_iter().rev() {
            flattened.theme = flattened.theme.merged_with(&layer.theme)?;
            if layer.color_mode.is_some() {
                flattened.color_mode = layer.color_mode.clone();
            }
            flattened
                .variants
                .extend(layer.variants.iter().map(|(name, variant)| (name.clone(), variant.clone())));
        }
        Ok(flattened)
    }

    fn stage(
        &self,
        id: Option<&str>,
        variant: Option<&str>,
        mode: ThemeMode,
        system_prefers_dark: bool,
    ) -> ThemeResult<Option<Arc<ThemeSpecification>>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let resolved = self.flattened(id)?.resolve(variant, mode, system_prefers_dark)?;
        Ok(Some(Arc::new(resolved)))
    }
}

fn no_active_theme() -> ThemeError {
    ThemeError::not_found("<active>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::{StyleContext, StyleRequest};
    use serde_json::json;

    fn theme_of(value: serde_json::Value) -> ThemeSpecification {
        serde_json::from_value(value).unwrap()
    }

    fn background(registry: &ThemeRegistry) -> String {
        registry.active_theme().unwrap().colors.as_ref().unwrap().background["default"].clone()
    }

    #[test]
    fn test_builtin_presets_registered() {
        let registry = ThemeRegistry::with_builtin_presets().unwrap();
        assert_eq!(registry.active_id(), Some("default"));
        let themes = registry.available_themes();
        assert_eq!(themes.len(), 5);
        assert!(themes[0].is_default);
        assert!(themes.iter().all(|t| t.has_dark_mode));
    }

    #[test]
    fn test_color_mode_switch() {
        let mut registry = ThemeRegistry::with_builtin_presets().unwrap();
        registry.set_color_mode(ThemeMode::Light).unwrap();
        let light = background(&registry);

        registry.set_color_mode(ThemeMode::Dark).unwrap();
        let dark = background(&registry);
        assert_ne!(light, dark);
        assert!(!jedi_color::is_light_color(&dark).unwrap());
    }

    #[test]
    fn test_system_mode_follows_host() {
        let mut registry = ThemeRegistry::with_builtin_presets().unwrap();
        registry.set_color_mode(ThemeMode::System).unwrap();
        let light = background(&registry);

        registry.set_system_prefers_dark(true).unwrap();
        assert_ne!(background(&registry), light);

        registry.set_system_prefers_dark(false).unwrap();
        assert_eq!(background(&registry), light);
    }

    #[test]
    fn test_base_chain() {
        let mut registry = ThemeRegistry::new();
        registry
            .register("root", theme_of(json!({"spacing": {"1": "4px", "2": "8px"}})))
            .unwrap();
        registry
            .register("child", theme_of(json!({"base": "root", "spacing": {"2": "10px"}})))
            .unwrap();
        registry.activate("child").unwrap();

        let spacing = registry.active_theme().unwrap().spacing.clone().unwrap();
        assert_eq!(spacing["1"], "4px");
        assert_eq!(spacing["2"], "10px");
    }

    #[test]
    fn test_base_cycle_is_rejected() {
        let mut registry = ThemeRegistry::new();
        registry.register("a", theme_of(json!({"base": "b"}))).unwrap();
        registry.register("b", theme_of(json!({"base": "a"}))).unwrap();
        assert!(matches!(registry.activate("a"), Err(ThemeError::BaseCycle { .. })));
        assert!(registry.active_theme().is_err());
    }

    #[test]
    fn test_failed_registration_is_undone() {
        let mut registry = ThemeRegistry::new();
        registry.register("a", theme_of(json!({"spacing": {"1": "4px"}}))).unwrap();
        registry.activate("a").unwrap();

        let err = registry.register("a", theme_of(json!({"base": "missing"}))).unwrap_err();
        assert!(matches!(err, ThemeError::ThemeNotFound { .. }));
        assert_eq!(registry.get("a").unwrap().theme.base, None);
        assert!(registry.active_theme().is_ok());
    }

    #[test]
    fn test_variants() {
        let mut registry = ThemeRegistry::new();
        let theme: EnhancedThemeSpecification = serde_json::from_value(json!({
            "spacing": {"1": "4px"},
            "variants": {"compact": {"theme": {"spacing": {"1": "2px"}}}}
        }))
        .unwrap();
        registry.register("app", theme).unwrap();
        registry.activate("app").unwrap();

        registry.select_variant(Some("compact")).unwrap();
        assert_eq!(registry.active_theme().unwrap().spacing.as_ref().unwrap()["1"], "2px");
        assert!(registry.select_variant(Some("roomy")).is_err());
        assert_eq!(registry.active_variant(), Some("compact"));

        registry.activate("app").unwrap();
        assert_eq!(registry.active_variant(), None);
    }

    #[test]
    fn test_unknown_theme() {
        let mut registry = ThemeRegistry::new();
        assert!(matches!(registry.activate("nope"), Err(ThemeError::ThemeNotFound { .. })));
        assert!(registry.resolver().is_err());
    }

    #[test]
    fn test_resolver_uses_active_theme() {
        let mut registry = ThemeRegistry::new();
        registry
            .register(
                "app",
                theme_of(json!({"components": {"Button": {"global": {"className": "btn"}}}})),
            )
            .unwrap();
        registry.activate("app").unwrap();

        let resolver = registry.resolver().unwrap();
        let resolved = resolver.resolve(&StyleRequest::new("Button"), &StyleContext::root());
        assert_eq!(resolved.value.class_name, "btn");
    }
}
