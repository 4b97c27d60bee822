//! Style extension policy: inheritance, composition order and cascade flags.
//!
//! Every field is optional in authored themes. Absent fields fall back to
//! the defaults below when a [StylePolicy](crate::cascade::StylePolicy) is
//! built.

use serde::{Deserialize, Serialize};

/// CSS properties that inherit unless a theme says otherwise.
pub const DEFAULT_INHERITABLE_PROPERTIES: &[&str] = &[
    "color",
    "font",
    "fontFamily",
    "fontSize",
    "fontStyle",
    "fontWeight",
    "fontVariant",
    "lineHeight",
    "letterSpacing",
    "textAlign",
    "textIndent",
    "textTransform",
    "whiteSpace",
    "wordSpacing",
    "wordBreak",
    "wordWrap",
    "direction",
    "cursor",
    "listStyle",
    "listStyleType",
    "listStylePosition",
    "listStyleImage",
    "visibility",
    "quotes",
    "orphans",
    "widows",
    "borderCollapse",
    "borderSpacing",
    "emptyCells",
    "captionSide",
    "tableLayout",
];

/// Component types that take inherited styles from their parent.
pub const DEFAULT_INHERITING_COMPONENTS: &[&str] =
    &["Text", "Heading", "BlockQuote", "Badge", "Button", "Label"];

/// Component types that start a new inheritance root.
pub const DEFAULT_BOUNDARY_COMPONENTS: &[&str] =
    &["Card", "Modal", "Dialog", "Popover", "Tooltip", "Sheet"];

/// Default precedence order, lowest first.
pub const DEFAULT_PRECEDENCE_ORDER: &[&str] = &[
    "theme.defaults",
    "theme.components",
    "parent.inherited",
    "spec.style",
    "spec.className",
    "runtime.overrides",
];

/// The `styleExtension` section of a theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleExtensionConfig {
    /// Inheritance settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheritance: Option<InheritanceSettings>,
    /// Composition settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<CompositionSettings>,
    /// Cascade settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cascade: Option<CascadeSettings>,
}

/// Which properties inherit, and through which components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritanceSettings {
    /// Properties carried from parent to child.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheritable_properties: Option<Vec<String>>,
    /// Components that accept inherited properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheriting_components: Option<Vec<String>>,
    /// Components that reset inheritance for their children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_components: Option<Vec<String>>,
}

/// Ordering of style sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionSettings {
    /// Named style sources, later wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precedence_order: Option<Vec<String>>,
}

/// Conflict resolution flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeSettings {
    /// Enable precedence-aware conflict resolution. Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_specificity: Option<bool>,
    /// Honor `!important` markers. Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_important: Option<bool>,
}
