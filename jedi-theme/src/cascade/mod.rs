//! # Style Cascade
//!
//! Resolves one component instance to a final `{className, style}` pair by
//! layering the theme's defaults, the component's overrides, inherited
//! properties, the instance's own style and classes, and a runtime
//! override, in the order the theme's [StylePolicy] dictates.
//!
//! ## Overview
//!
//! - **[StyleResolver]**: resolves [StyleRequest]s against one theme
//! - **[StyleContext]**: what a parent hands its children
//! - **[StylePolicy]**: inheritance lists, precedence order and cascade flags
//! - **[StyleWarning]**: problems that dropped a property but did not stop resolution
//!
//! Resolution never fails. Every problem degrades to a missing property
//! and a warning in the returned [Resolution].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use jedi_theme::cascade::{StyleContext, StyleRequest, StyleResolver};
//! use jedi_theme::theme::ThemeSpecification;
//!
//! let theme: ThemeSpecification = serde_json::from_value(serde_json::json!({
//!     "components": {"Button": {"global": {"className": "btn"}}}
//! }))
//! .unwrap();
//! let resolver = StyleResolver::new(Arc::new(theme)).unwrap();
//! let resolved = resolver.resolve(
//!     &StyleRequest::new("Button").with_class_name("wide"),
//!     &StyleContext::root(),
//! );
//! assert_eq!(resolved.value.class_name, "btn wide");
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::Literal;

mod context;
mod policy;
mod resolver;

pub use context::{StyleContext, StyleRequest};
pub use policy::{StylePolicy, StyleSourceKind};
pub use resolver::{ResolvedContent, StyleResolver};

/// The final styling of one component instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    /// Space-separated classes, empty when none apply.
    pub class_name: String,
    /// Style properties in first-set order.
    pub style: IndexMap<String, Literal>,
}

impl ResolvedStyle {
    /// Whether nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.class_name.is_empty() && self.style.is_empty()
    }
}

/// A value together with the warnings raised while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<T> {
    /// The result.
    pub value: T,
    /// Problems that were worked around.
    pub warnings: Vec<StyleWarning>,
}

impl<T> Resolution<T> {
    /// A result with no warnings.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Whether resolution raised no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Transform the value, keeping the warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        Resolution {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

/// A recoverable problem found during resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleWarning {
    /// A token path did not resolve; the property was dropped.
    #[error("Token '{path}' for property '{property}' in {stage} did not resolve")]
    UnresolvedToken {
        /// The style property.
        property: String,
        /// The token path.
        path: String,
        /// The source that referenced it.
        stage: StyleSourceKind,
    },

    /// A token resolved to an object; the property was dropped.
    #[error("Token '{path}' for property '{property}' in {stage} is not a single value")]
    NonPrimitiveToken {
        /// The style property.
        property: String,
        /// The token path.
        path: String,
        /// The source that referenced it.
        stage: StyleSourceKind,
    },

    /// A precedence order named a source that does not exist.
    #[error("Unknown style source '{name}' in precedence order")]
    UnknownPrecedenceSource {
        /// The offending name.
        name: String,
    },

    /// The theme has no overrides for a component type.
    #[error("Theme has no overrides for component '{component_type}'")]
    UnknownComponent {
        /// The component type.
        component_type: String,
    },
}

/// Join class lists with single spaces, dropping empty entries.
pub(crate) fn join_class_names<'a>(parts: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let joined = parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

impl fmt::Display for ResolvedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class=\"{}\"", self.class_name)?;
        for (property, value) in &self.style {
            write!(f, " {}: {};", property, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_class_names() {
        assert_eq!(join_class_names(["a", "  b  c ", ""]).as_deref(), Some("a b c"));
        assert_eq!(join_class_names([" ", ""]), None);
    }

    #[test]
    fn test_warning_display() {
        let warning = StyleWarning::UnresolvedToken {
            property: "color".into(),
            path: "colors.nope.500".into(),
            stage: StyleSourceKind::SpecStyle,
        };
        assert_eq!(
            warning.to_string(),
            "Token 'colors.nope.500' for property 'color' in spec.style did not resolve"
        );
    }

    #[test]
    fn test_resolution_map_keeps_warnings() {
        let resolution = Resolution {
            value: 1,
            warnings: vec![StyleWarning::UnknownComponent {
                component_type: "Widget".into(),
            }],
        };
        let mapped = resolution.map(|v| v + 1);
        assert_eq!(mapped.value, 2);
        assert!(!mapped.is_clean());
    }
}
