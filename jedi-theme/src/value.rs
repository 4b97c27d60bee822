//! # Theme Values
//!
//! [ThemeValue] is the untyped, closed form of a theme: objects, arrays and
//! scalars. It is [serde_json::Value] with `preserve_order`, so objects keep
//! their document order. Merging, token lookup and CSS variable extraction
//! all operate on it, so they never need to know the shape of
//! [ThemeSpecification]. [ThemeValueExt] adds the theme-specific
//! conversions.
//!
//! [Literal] is the scalar that ends up in a resolved style.
//!
//! [ThemeSpecification]: crate::theme::ThemeSpecification

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::ThemeResult;

/// An untyped theme value.
pub type ThemeValue = serde_json::Value;

/// Theme-specific conversions on [ThemeValue].
pub trait ThemeValueExt: Sized {
    /// Convert any serializable value, typically a theme, into its untyped form.
    fn from_serialize<T: Serialize + ?Sized>(value: &T) -> ThemeResult<Self>;

    /// Convert back into a typed value.
    fn deserialize_into<T: DeserializeOwned>(&self) -> ThemeResult<T>;

    /// Render a leaf as a CSS value.
    ///
    /// Arrays are joined with `", "`. Objects and `null` have no CSS form.
    fn to_css_string(&self) -> Option<String>;

    /// Turn a leaf into a style literal.
    ///
    /// Strings and numbers map directly; booleans and arrays are
    /// stringified. Objects and `null` yield `None`.
    fn to_literal(&self) -> Option<Literal>;
}

impl ThemeValueExt for ThemeValue {
    fn from_serialize<T: Serialize + ?Sized>(value: &T) -> ThemeResult<Self> {
        Ok(serde_json::to_value(value)?)
    }

    fn deserialize_into<T: DeserializeOwned>(&self) -> ThemeResult<T> {
        Ok(T::deserialize(self)?)
    }

    fn to_css_string(&self) -> Option<String> {
        match self {
            Self::Null | Self::Object(_) => None,
            Self::Bool(value) => Some(value.to_string()),
            Self::Number(value) => Some(value.to_string()),
            Self::String(value) => Some(value.clone()),
            Self::Array(items) => {
                let parts: Option<Vec<String>> = items.iter().map(Self::to_css_string).collect();
                parts.map(|parts| parts.join(", "))
            }
        }
    }

    fn to_literal(&self) -> Option<Literal> {
        match self {
            Self::Number(value) => Some(Literal::Number(value.clone())),
            Self::String(value) => Some(Literal::Text(value.clone())),
            Self::Bool(_) | Self::Array(_) => self.to_css_string().map(Literal::Text),
            Self::Null | Self::Object(_) => None,
        }
    }
}

/// A scalar style value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// A number, e.g. a line height or z-index.
    Number(Number),
    /// Any textual CSS value.
    Text(String),
}

impl Literal {
    /// Get the text, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(t) => f.write_str(t),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::CssVariableOptions;
    use serde_json::json;

    #[test]
    fn test_objects_keep_document_order() {
        let value: ThemeValue = serde_json::from_str(r#"{"z": 1, "a": {"m": "x", "b": [true, null]}}"#).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn test_typed_round_trip() {
        let options = CssVariableOptions::with_prefix("--brand");
        let value = ThemeValue::from_serialize(&options).unwrap();
        assert_eq!(value.get("prefix").and_then(ThemeValue::as_str), Some("--brand"));
        assert_eq!(value.deserialize_into::<CssVariableOptions>().unwrap(), options);
        assert!(json!({"prefix": 3}).deserialize_into::<CssVariableOptions>().is_err());
    }

    #[test]
    fn test_css_string() {
        let stack = json!(["Inter", "system-ui", "sans-serif"]);
        assert_eq!(stack.to_css_string().as_deref(), Some("Inter, system-ui, sans-serif"));
        assert_eq!(json!(1.25).to_css_string().as_deref(), Some("1.25"));
        assert_eq!(json!({}).to_css_string(), None);
        assert_eq!(json!([{"a": 1}]).to_css_string(), None);
    }

    #[test]
    fn test_to_literal() {
        assert_eq!(ThemeValue::from("1rem").to_literal(), Some(Literal::from("1rem")));
        assert_eq!(ThemeValue::from(json!(400)).to_literal(), Some(Literal::from(400)));
        assert_eq!(ThemeValue::Null.to_literal(), None);
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::from(700).to_string(), "700");
        assert_eq!(Literal::from("red !important").to_string(), "red !important");
    }
}
