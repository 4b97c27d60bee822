//! Component style overrides and the values they carry.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

use crate::value::Literal;

/// A dot-separated path into a theme, e.g. `colors.primary.500`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenPath(String);

impl TokenPath {
    /// Create a token path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The raw path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The dot-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The first segment, which names the theme section.
    pub fn category(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// A style property value: either a literal or a reference to a theme token.
///
/// Authored JSON may write a token reference as `"token(colors.primary.500)"`
/// or `{"token": "colors.primary.500"}`. Both forms become
/// [StyleValue::Token] when the theme is deserialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// A value used as-is.
    Literal(Literal),
    /// A value looked up in the active theme at resolution time.
    Token(TokenPath),
}

impl StyleValue {
    /// Parse a string, recognizing the `token(...)` form.
    pub fn parse(raw: &str) -> Self {
        match raw
            .trim()
            .strip_prefix("token(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Some(path) => Self::Token(TokenPath::new(path.trim())),
            None => Self::Literal(Literal::Text(raw.to_string())),
        }
    }

    /// Create a token reference.
    pub fn token(path: impl Into<String>) -> Self {
        Self::Token(TokenPath::new(path))
    }
}

impl From<&str> for StyleValue {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Literal> for StyleValue {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        Self::Literal(Literal::from(value))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawStyleValue {
    Number(Number),
    Text(String),
    Token { token: String },
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawStyleValue::deserialize(deserializer)? {
            RawStyleValue::Number(n) => Self::Literal(Literal::Number(n)),
            RawStyleValue::Text(text) => Self::parse(&text),
            RawStyleValue::Token { token } => Self::Token(TokenPath::new(token)),
        })
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(literal) => literal.serialize(serializer),
            Self::Token(path) => RawStyleValue::Token {
                token: path.as_str().to_string(),
            }
            .serialize(serializer),
        }
    }
}

/// One set of style changes: classes, inline styles and token-backed styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverride {
    /// Classes to append.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Style properties.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub styles: IndexMap<String, StyleValue>,
    /// Style properties whose values are theme token paths.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub tokens: IndexMap<String, TokenPath>,
}

impl StyleOverride {
    /// An empty override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class name.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Add a style property.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    /// Add a token-backed style property.
    pub fn with_token(mut self, property: impl Into<String>, path: impl Into<TokenPath>) -> Self {
        self.tokens.insert(property.into(), path.into());
        self
    }

    /// Whether the override changes nothing.
    pub fn is_empty(&self) -> bool {
        self.class_name.is_none() && self.styles.is_empty() && self.tokens.is_empty()
    }
}

/// A style override that applies to one `(variant, size, state)` combination.
///
/// An absent predicate field matches any value for that dimension. A
/// present field must equal the requested value exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinationOverride {
    /// Variant to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Size to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// State to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// The override to apply on a match.
    #[serde(flatten)]
    pub style: StyleOverride,
}

impl CombinationOverride {
    /// Whether this entry matches the requested dimensions.
    pub fn matches(&self, variant: Option<&str>, size: Option<&str>, state: Option<&str>) -> bool {
        fn field(predicate: &Option<String>, actual: Option<&str>) -> bool {
            predicate.as_deref().map_or(true, |p| Some(p) == actual)
        }
        field(&self.variant, variant) && field(&self.size, size) && field(&self.state, state)
    }
}

/// Tagged content overrides a component may carry in named slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentOverride {
    /// A link.
    Link {
        /// Link text.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        /// Link target.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        /// Link styling.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<StyleOverride>,
    },
    /// A titled group of further content.
    Section {
        /// Section heading.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// Nested content.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        items: Vec<ContentOverride>,
        /// Section styling.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<StyleOverride>,
    },
    /// A feature tile.
    Feature {
        /// Feature heading.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// Feature body text.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        /// Icon name.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        /// Feature styling.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<StyleOverride>,
    },
}

/// All overrides for one component type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentStyleOverride {
    /// Applied to every instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<StyleOverride>,
    /// Keyed by variant name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variants: IndexMap<String, StyleOverride>,
    /// Keyed by size name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub sizes: IndexMap<String, StyleOverride>,
    /// Keyed by state name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub states: IndexMap<String, StyleOverride>,
    /// Tried in order; the first match applies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub combinations: Vec<CombinationOverride>,
    /// Content overrides by slot name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, ContentOverride>,
}

impl ComponentStyleOverride {
    /// The first combination matching the requested dimensions.
    pub fn find_combination(
        &self,
        variant: Option<&str>,
        size: Option<&str>,
        state: Option<&str>,
    ) -> Option<&CombinationOverride> {
        self.combinations
            .iter()
            .find(|combo| combo.matches(variant, size, state))
    }
}
