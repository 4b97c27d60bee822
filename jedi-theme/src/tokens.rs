//! # Theme Tokens
//!
//! Dot-path lookup into a theme and flattening of a theme into its leaf
//! tokens.
//!
//! Sections that describe how components are styled rather than design
//! values (`components`, `defaults`, `styleExtension`, `base`, `colorMode`
//! and `variants`) are not tokens and are skipped when flattening. They are
//! still reachable through [resolve_theme_token].

use serde::{Deserialize, Serialize};

use crate::value::ThemeValue;

/// Top-level sections that never produce tokens.
pub const NON_TOKEN_SECTIONS: &[&str] = &[
    "base",
    "components",
    "defaults",
    "styleExtension",
    "colorMode",
    "variants",
];

/// One flattened leaf of a theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeToken {
    /// Dot path from the theme root, e.g. `colors.primary.500`.
    pub path: String,
    /// The leaf value.
    pub value: ThemeValue,
    /// The top-level section the path starts under.
    pub category: String,
}

/// Look up the value at a dot path.
///
/// Returns `None` as soon as a segment is missing, or when the path
/// continues past a leaf. Keys that themselves contain dots, such as the
/// spacing step `"0.5"`, are found by trying progressively longer joined
/// segments. A numeric segment indexes into an array.
///
/// ```rust
/// use jedi_theme::tokens::resolve_theme_token;
/// use jedi_theme::value::ThemeValue;
///
/// let theme = ThemeValue::from(serde_json::json!({"spacing": {"0.5": "0.125rem"}}));
/// assert_eq!(
///     resolve_theme_token(&theme, "spacing.0.5").and_then(ThemeValue::as_str),
///     Some("0.125rem")
/// );
/// ```
pub fn resolve_theme_token<'a>(theme: &'a ThemeValue, path: &str) -> Option<&'a ThemeValue> {
    let segments: Vec<&str> = path.split('.').collect();
    walk(theme, &segments)
}

fn walk<'a>(value: &'a ThemeValue, segments: &[&str]) -> Option<&'a ThemeValue> {
    if segments.is_empty() {
        return Some(value);
    }
    match value {
        ThemeValue::Object(map) => (1..=segments.len()).find_map(|take| {
            let key = segments[..take].join(".");
            map.get(&key).and_then(|child| walk(child, &segments[take..]))
        }),
        ThemeValue::Array(items) => {
            let index = segments[0].parse::<usize>().ok()?;
            walk(items.get(index)?, &segments[1..])
        }
        _ => None,
    }
}

/// Flatten a theme into leaf tokens in document order.
pub fn generate_theme_tokens(theme: &ThemeValue) -> Vec<ThemeToken> {
    let mut tokens = Vec::new();
    for_each_leaf(theme, &mut |segments, value| {
        tokens.push(ThemeToken {
            path: segments.join("."),
            value: value.clone(),
            category: segments[0].to_string(),
        });
    });
    tokens
}

/// Visit every token leaf with its key segments.
///
/// Segments are never empty when the callback runs.
pub(crate) fn for_each_leaf<'a>(theme: &'a ThemeValue, visit: &mut dyn FnMut(&[&'a str], &'a ThemeValue)) {
    let Some(sections) = theme.as_object() else {
        return;
    };
    let mut path = Vec::new();
    for (section, value) in sections {
        if NON_TOKEN_SECTIONS.contains(&section.as_str()) {
            continue;
        }
        path.push(section.as_str());
        descend(value, &mut path, visit);
        path.pop();
    }
}

fn descend<'a>(value: &'a ThemeValue, path: &mut Vec<&'a str>, visit: &mut dyn FnMut(&[&'a str], &'a ThemeValue)) {
    match value {
        ThemeValue::Object(map) => {
            for (key, child) in map {
                path.push(key.as_str());
                descend(child, path, visit);
                path.pop();
            }
        }
        ThemeValue::Null => {}
        leaf => visit(path.as_slice(), leaf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn theme() -> ThemeValue {
        ThemeValue::from(json!({
            "colors": {
                "primary": {"500": "#3b82f6"},
                "text": {"primary": "#111827"}
            },
            "spacing": {"1": "0.25rem", "4": "1rem", "0.5": "0.125rem"},
            "fonts": {"sans": ["Inter", "sans-serif"]},
            "components": {"Button": {"global": {"className": "btn"}}}
        }))
    }

    #[test]
    fn test_resolve_existing_token() {
        let theme = theme();
        assert_eq!(
            resolve_theme_token(&theme, "colors.primary.500").and_then(ThemeValue::as_str),
            Some("#3b82f6")
        );
        assert_eq!(resolve_theme_token(&theme, "spacing.4").and_then(ThemeValue::as_str), Some("1rem"));
    }

    #[test]
    fn test_resolve_missing_token() {
        let theme = theme();
        assert!(resolve_theme_token(&theme, "colors.secondary.500").is_none());
        assert!(resolve_theme_token(&theme, "colors.primary.500.extra").is_none());
        assert!(resolve_theme_token(&theme, "").is_none());
    }

    #[test]
    fn test_resolve_intermediate_and_array() {
        let theme = theme();
        assert!(resolve_theme_token(&theme, "colors.primary").unwrap().as_object().is_some());
        assert_eq!(resolve_theme_token(&theme, "fonts.sans.0").and_then(ThemeValue::as_str), Some("Inter"));
        assert!(resolve_theme_token(&theme, "fonts.sans.9").is_none());
    }

    #[test]
    fn test_resolve_dotted_key() {
        let theme = theme();
        assert_eq!(
            resolve_theme_token(&theme, "spacing.0.5").and_then(ThemeValue::as_str),
            Some("0.125rem")
        );
    }

    #[test]
    fn test_generate_tokens() {
        let tokens = generate_theme_tokens(&theme());
        assert!(tokens.contains(&ThemeToken {
            path: "colors.primary.500".into(),
            value: ThemeValue::from("#3b82f6"),
            category: "colors".into(),
        }));
        assert!(tokens.contains(&ThemeToken {
            path: "colors.text.primary".into(),
            value: ThemeValue::from("#111827"),
            category: "colors".into(),
        }));
        assert!(tokens.iter().any(|t| t.path == "spacing.1" && t.category == "spacing"));
        assert!(tokens.iter().any(|t| t.path == "fonts.sans"));
        assert!(tokens.iter().all(|t| t.category != "components"));
    }

    #[test]
    fn test_every_token_resolves_to_itself() {
        let theme = theme();
        for token in generate_theme_tokens(&theme) {
            assert_eq!(resolve_theme_token(&theme, &token.path), Some(&token.value), "{}", token.path);
        }
    }
}
