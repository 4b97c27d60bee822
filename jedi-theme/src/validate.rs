//! # Theme Validation
//!
//! Structural validation of authored themes. Every problem is collected
//! with its dot path and a [ValidationCode]; nothing here panics or stops
//! at the first error.
//!
//! Only shape is checked. Semantic properties such as scale monotonicity
//! or color contrast are not.

use serde_json::{Map, Value};

use crate::error::{ValidationCode, ValidationError};
use crate::theme::{EnhancedThemeSpecification, ThemeSpecification};

/// Path reported for problems with the document root.
pub const ROOT_PATH: &str = "<root>";

const DERIVED_COLOR_GROUPS: &[&str] = &["background", "text", "border"];
const STRING_MAP_SECTIONS: &[&str] = &["spacing", "borderRadius", "shadows", "breakpoints"];
const MODE_NAMES: &[&str] = &["light", "dark", "system"];

/// Validate a base theme.
pub fn validate_theme(candidate: &Value) -> Result<ThemeSpecification, Vec<ValidationError>> {
    let mut checker = Checker::new(ValidationCode::InvalidTheme);
    checker.theme(candidate, "");
    checker.finish(candidate)
}

/// Validate a theme together with its `colorMode` and `variants` sections.
pub fn validate_enhanced_theme(candidate: &Value) -> Result<EnhancedThemeSpecification, Vec<ValidationError>> {
    let mut checker = Checker::new(ValidationCode::InvalidTheme);
    checker.theme(candidate, "");

    if let Some(color_mode) = candidate.get("colorMode") {
        checker.with_code(ValidationCode::InvalidColorMode, |c| c.color_mode(color_mode));
    }
    if let Some(variants) = candidate.get("variants") {
        checker.with_code(ValidationCode::InvalidThemeVariant, |c| c.variants(variants));
    }

    checker.finish(candidate)
}

struct Checker {
    code: ValidationCode,
    errors: Vec<ValidationError>,
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        ROOT_PATH
    } else {
        path
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Checker {
    fn new(code: ValidationCode) -> Self {
        Self {
            code,
            errors: Vec::new(),
        }
    }

    fn with_code(&mut self, code: ValidationCode, check: impl FnOnce(&mut Self)) {
        let previous = std::mem::replace(&mut self.code, code);
        check(self);
        self.code = previous;
    }

    fn report(&mut self, path: &str, message: impl Into<String>) {
        self.errors
            .push(ValidationError::new(self.code, display_path(path), message));
    }

    fn finish<T: serde::de::DeserializeOwned>(mut self, candidate: &Value) -> Result<T, Vec<ValidationError>> {
        if !self.errors.is_empty() {
            log::debug!("Theme validation found {} problem(s)", self.errors.len());
            return Err(self.errors);
        }
        match serde_json::from_value(candidate.clone()) {
            Ok(theme) => Ok(theme),
            Err(e) => {
                self.report("", e.to_string());
                Err(self.errors)
            }
        }
    }

    fn object<'v>(&mut self, value: &'v Value, path: &str) -> Option<&'v Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.report(path, format!("Expected an object, found {}", kind(other)));
                None
            }
        }
    }

    fn string(&mut self, value: &Value, path: &str) {
        if !value.is_string() {
            self.report(path, format!("Expected a string, found {}", kind(value)));
        }
    }

    fn boolean(&mut self, value: &Value, path: &str) {
        if !value.is_boolean() {
            self.report(path, format!("Expected a boolean, found {}", kind(value)));
        }
    }

    fn map_of(&mut self, value: &Value, path: &str, entry: fn(&mut Self, &Value, &str)) {
        if let Some(map) = self.object(value, path) {
            for (key, item) in map {
                entry(self, item, &join(path, key));
            }
        }
    }

    fn string_list(&mut self, value: &Value, path: &str) {
        match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.string(item, &join(path, &index.to_string()));
                }
            }
            other => self.report(path, format!("Expected a list of strings, found {}", kind(other))),
        }
    }

    fn number(&mut self, value: &Value, path: &str) {
        if !value.is_number() {
            self.report(path, format!("Expected a number, found {}", kind(value)));
        }
    }

    fn integer(&mut self, value: &Value, path: &str) {
        if !value.is_i64() {
            self.report(path, format!("Expected an integer, found {}", kind(value)));
        }
    }

    fn number_or_string(&mut self, value: &Value, path: &str) {
        if !value.is_number() && !value.is_string() {
            self.report(path, format!("Expected a number or string, found {}", kind(value)));
        }
    }

    fn theme(&mut self, value: &Value, path: &str) {
        let Some(map) = self.object(value, path) else {
            return;
        };
        for (key, section) in map {
            let section_path = join(path, key);
            match key.as_str() {
                "base" => self.string(section, &section_path),
                "colors" => self.colors(section, &section_path),
                "typography" => self.typography(section, &section_path),
                "fonts" => self.map_of(section, &section_path, Self::string_list),
                "zIndices" => self.map_of(section, &section_path, Self::integer),
                "animations" => self.map_of(section, &section_path, Self::animation),
                "defaults" => self.style_override(section, &section_path),
                "components" => self.map_of(section, &section_path, Self::component),
                "styleExtension" => {
                    self.object(section, &section_path);
                }
                name if STRING_MAP_SECTIONS.contains(&name) => {
                    self.map_of(section, &section_path, Self::string)
                }
                _ => {}
            }
        }
    }

    fn colors(&mut self, value: &Value, path: &str) {
        let Some(groups) = self.object(value, path) else {
            return;
        };
        for (role, group) in groups {
            let group_path = join(path, role);
            if DERIVED_COLOR_GROUPS.contains(&role.as_str()) {
                self.map_of(group, &group_path, Self::string);
            } else {
                self.map_of(group, &group_path, Self::color);
            }
        }
    }

    fn color(&mut self, value: &Value, path: &str) {
        match value.as_str() {
            Some(hex) if jedi_color::hex_to_rgb(hex).is_ok() => {}
            Some(hex) => self.report(path, format!("'{}' is not a 6-digit hex color", hex)),
            None => self.report(path, format!("Expected a hex color, found {}", kind(value))),
        }
    }

    fn typography(&mut self, value: &Value, path: &str) {
        let Some(map) = self.object(value, path) else {
            return;
        };
        for (key, group) in map {
            let group_path = join(path, key);
            match key.as_str() {
                "fontFamilies" => self.map_of(group, &group_path, Self::string_list),
                "fontSizes" | "letterSpacings" => self.map_of(group, &group_path, Self::string),
                "fontWeights" => self.map_of(group, &group_path, Self::number),
                "lineHeights" => self.map_of(group, &group_path, Self::number_or_string),
                _ => {}
            }
        }
    }

    fn animation(&mut self, value: &Value, path: &str) {
        let Some(map) = self.object(value, path) else {
            return;
        };
        for required in ["duration", "easing"] {
            match map.get(required) {
                Some(field) => self.string(field, &join(path, required)),
                None => self.report(&join(path, required), "Required field is missing"),
            }
        }
    }

    fn style_override(&mut self, value: &Value, path: &str) {
        let Some(map) = self.object(value, path) else {
            return;
        };
        if let Some(class_name) = map.get("className") {
            self.string(class_name, &join(path, "className"));
        }
        if let Some(styles) = map.get("styles") {
            self.map_of(styles, &join(path, "styles"), Self::style_value);
        }
        if let Some(tokens) = map.get("tokens") {
            self.map_of(tokens, &join(path, "tokens"), Self::string);
        }
    }

    fn style_value(&mut self, value: &Value, path: &str) {
        match value {
            Value::String(_) | Value::Number(_) => {}
            Value::Object(map) if map.get("token").is_some_and(Value::is_string) => {}
            other => self.report(
                path,
                format!("Expected a string, number or token reference, found {}", kind(other)),
            ),
        }
    }

    fn component(&mut self, value: &Value, path: &str) {
        let Some(map) = self.object(value, path) else {
            return;
        };
        if let Some(global) = map.get("global") {
            self.style_override(global, &join(path, "global"));
        }
        for group in ["variants", "sizes", "states"] {
            if let Some(entries) = map.get(group) {
                self.map_of(entries, &join(path, group), Self::style_override);
            }
        }
        if let Some(combinations) = map.get("combinations") {
            let combinations_path = join(path, "combinations");
            match combinations {
                Value::Array(items) => {
                    for (index, item) in items.iter().enumerate() {
                        self.style_override(item, &join(&combinations_path, &index.to_string()));
                    }
                }
                other => self.report(&combinations_path, format!("Expected a list, found {}", kind(other))),
            }
        }
        if let Some(content) = map.get("content") {
            self.map_of(content, &join(path, "content"), Self::content);
        }
    }

    fn content(&mut self, value: &Value, path: &str) {
        let Some(map) = self.object(value, path) else {
            return;
        };
        match map.get("kind").and_then(Value::as_str) {
            Some("link") | Some("feature") => {}
            Some("section") => {
                if let Some(Value::Array(items)) = map.get("items") {
                    let items_path = join(path, "items");
                    for (index, item) in items.iter().enumerate() {
                        self.content(item, &join(&items_path, &index.to_string()));
                    }
                }
            }
            Some(other) => self.report(&join(path, "kind"), format!("Unknown content kind '{}'", other)),
            None => self.report(&join(path, "kind"), "Content override needs a 'kind' of link, section or feature"),
        }
        if let Some(style) = map.get("style") {
            self.style_override(style, &join(path, "style"));
        }
    }

    fn color_mode(&mut self, value: &Value) {
        let path = "colorMode";
        let Some(map) = self.object(value, path) else {
            return;
        };
        match map.get("defaultMode") {
            Some(Value::String(mode)) if MODE_NAMES.contains(&mode.as_str()) => {}
            Some(other) => self.report(
                &join(path, "defaultMode"),
                format!("Expected one of light, dark or system, found {}", other),
            ),
            None => self.report(&join(path, "defaultMode"), "Required field is missing"),
        }
        if let Some(respect) = map.get("respectSystemPreference") {
            self.boolean(respect, &join(path, "respectSystemPreference"));
        }
        for mode in ["light", "dark"] {
            if let Some(fragment) = map.get(mode) {
                self.theme(fragment, &join(path, mode));
            }
        }
    }

    fn variants(&mut self, value: &Value) {
        let path = "variants";
        let Some(map) = self.object(value, path) else {
            return;
        };
        for (name, variant) in map {
            let variant_path = join(path, name);
            let Some(fields) = self.object(variant, &variant_path) else {
                continue;
            };
            for label in ["name", "description"] {
                if let Some(field) = fields.get(label) {
                    self.string(field, &join(&variant_path, label));
                }
            }
            match fields.get("theme") {
                Some(theme) => self.theme(theme, &join(&variant_path, "theme")),
                None => self.report(&join(&variant_path, "theme"), "Required field is missing"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_base() -> Value {
        json!({
            "colors": {
                "primary": {"500": "#3b82f6", "600": "#2563eb"},
                "background": {"default": "#ffffff", "paper": "#f9fafb"},
                "text": {"primary": "#111827", "secondary": "#6b7280"}
            },
            "spacing": {"0": "0", "1": "0.25rem", "2": "0.5rem", "4": "1rem", "8": "2rem"},
            "borderRadius": {"sm": "0.125rem", "md": "0.375rem", "lg": "0.5rem", "full": "9999px"}
        })
    }

    #[test]
    fn test_valid_theme_round_trips() {
        let input = valid_base();
        let theme = validate_theme(&input).unwrap();
        assert_eq!(serde_json::to_value(&theme).unwrap(), input);
    }

    #[test]
    fn test_invalid_color_group() {
        let errors = validate_theme(&json!({"colors": {"primary": "not-an-object"}})).unwrap_err();
        assert!(!errors.is_empty());
        assert_eq!(errors[0].code, ValidationCode::InvalidTheme);
        assert_eq!(errors[0].path, "colors.primary");
    }

    #[test]
    fn test_collects_every_problem() {
        let errors = validate_theme(&json!({
            "colors": {"primary": {"500": "blue"}},
            "spacing": {"1": 4},
            "zIndices": {"modal": "high"},
            "animations": {"spin": {"duration": "1s"}}
        }))
        .unwrap_err();
        let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            ["colors.primary.500", "spacing.1", "zIndices.modal", "animations.spin.easing"]
        );
    }

    #[test]
    fn test_root_must_be_object() {
        let errors = validate_theme(&json!(["not", "a", "theme"])).unwrap_err();
        assert_eq!(errors[0].path, ROOT_PATH);
    }

    #[test]
    fn test_component_overrides_are_checked() {
        let errors = validate_theme(&json!({
            "components": {
                "Button": {
                    "global": {"className": 3},
                    "combinations": [{"variant": "primary", "styles": {"color": ["red"]}}],
                    "content": {"footer": {"label": "untagged"}}
                }
            }
        }))
        .unwrap_err();
        let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "components.Button.global.className",
                "components.Button.combinations.0.styles.color",
                "components.Button.content.footer.kind",
            ]
        );
    }

    #[test]
    fn test_token_references_are_accepted() {
        let theme = validate_theme(&json!({
            "defaults": {"styles": {"color": {"token": "colors.text.primary"}, "margin": "token(spacing.1)"}}
        }))
        .unwrap();
        assert_eq!(theme.defaults.unwrap().styles.len(), 2);
    }

    #[test]
    fn test_valid_enhanced_theme() {
        let mut input = valid_base();
        input["colorMode"] = json!({
            "defaultMode": "light",
            "respectSystemPreference": true,
            "light": {"colors": {"background": {"default": "#ffffff"}, "text": {"primary": "#111827"}}},
            "dark": {"colors": {"background": {"default": "#111827"}, "text": {"primary": "#f9fafb"}}}
        });
        input["variants"] = json!({"compact": {"name": "Compact", "theme": {"spacing": {"1": "0.125rem"}}}});

        let theme = validate_enhanced_theme(&input).unwrap();
        assert_eq!(serde_json::to_value(&theme).unwrap(), input);
    }

    #[test]
    fn test_invalid_color_mode() {
        let mut input = valid_base();
        input["colorMode"] = json!({"defaultMode": "invalid-mode", "light": {"colors": {}}, "dark": {"colors": {}}});
        let errors = validate_enhanced_theme(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ValidationCode::InvalidColorMode);
        assert_eq!(errors[0].path, "colorMode.defaultMode");
    }

    #[test]
    fn test_invalid_variant() {
        let errors = validate_enhanced_theme(&json!({
            "variants": {"compact": {"name": 1}, "wide": {"theme": {"spacing": []}}}
        }))
        .unwrap_err();
        assert!(errors.iter().all(|e| e.code == ValidationCode::InvalidThemeVariant));
        let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            ["variants.compact.name", "variants.compact.theme", "variants.wide.theme.spacing"]
        );
    }
}
