//! Per-instance style requests and the context handed down the render tree.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{join_class_names, ResolvedStyle, StylePolicy};
use crate::theme::{StyleOverride, StyleValue};
use crate::value::Literal;

/// One component instance to style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRequest {
    /// Component type, e.g. `Button`.
    pub component_type: String,
    /// Selected variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Selected size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Current interaction state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Per-instance classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Per-instance inline style.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub style: IndexMap<String, StyleValue>,
    /// Caller-supplied last-mile override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<StyleOverride>,
}

impl StyleRequest {
    /// A request for `component_type` with nothing else set.
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            ..Self::default()
        }
    }

    /// Select a variant.
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Select a size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the interaction state.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Set the instance classes.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Add an inline style property.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Set the runtime override.
    pub fn with_runtime(mut self, runtime: StyleOverride) -> Self {
        self.runtime = Some(runtime);
        self
    }
}

/// What a parent passes to its children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleContext {
    /// Classes accumulated from inheriting ancestors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_class_name: Option<String>,
    /// Inheritable properties accumulated from ancestors.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub inherited_style: IndexMap<String, Literal>,
    /// Component types from the root to the current node.
    #[serde(default)]
    pub component_path: Vec<String>,
}

impl StyleContext {
    /// The context of a tree root.
    pub fn root() -> Self {
        Self::default()
    }

    /// The context for the children of a node that resolved to `resolved`.
    ///
    /// - A boundary component starts a new root: its children see only the
    ///   inheritable part of what the boundary itself resolved.
    /// - An inheriting component adds its own inheritable properties and
    ///   classes on top of what it received.
    /// - Any other component passes its context through unchanged.
    pub fn child(&self, request: &StyleRequest, resolved: &ResolvedStyle, policy: &StylePolicy) -> StyleContext {
        let mut component_path = self.component_path.clone();
        component_path.push(request.component_type.clone());

        if policy.is_boundary(&request.component_type) {
            return StyleContext {
                inherited_class_name: request.class_name.as_deref().and_then(|c| join_class_names([c])),
                inherited_style: policy.inheritable(&resolved.style),
                component_path,
            };
        }

        if policy.inherits(&request.component_type) {
            let mut inherited_style = policy.inheritable(&self.inherited_style);
            inherited_style.extend(policy.inheritable(&resolved.style));
            return StyleContext {
                inherited_class_name: join_class_names(
                    [self.inherited_class_name.as_deref(), request.class_name.as_deref()]
                        .into_iter()
                        .flatten(),
                ),
                inherited_style,
                component_path,
            };
        }

        StyleContext {
            component_path,
            ..self.clone()
        }
    }

    /// The type of the node this context belongs to.
    pub fn current(&self) -> Option<&str> {
        self.component_path.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(pairs: &[(&str, &str)]) -> ResolvedStyle {
        ResolvedStyle {
            class_name: String::new(),
            style: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), Literal::from(*v)))
                .collect(),
        }
    }

    #[test]
    fn test_request_builder() {
        let request = StyleRequest::new("Button")
            .with_variant("primary")
            .with_size("lg")
            .with_style("color", "token(colors.primary.500)");
        assert_eq!(request.variant.as_deref(), Some("primary"));
        assert_eq!(request.style["color"], StyleValue::token("colors.primary.500"));
    }

    #[test]
    fn test_boundary_starts_new_root() {
        let policy = StylePolicy::default();
        let parent = StyleContext {
            inherited_class_name: Some("outer".into()),
            inherited_style: resolved(&[("color", "red")]).style,
            component_path: vec!["Page".into()],
        };
        let card = StyleRequest::new("Card").with_class_name("card");
        let child = parent.child(&card, &resolved(&[("fontSize", "2rem"), ("padding", "1rem")]), &policy);

        assert_eq!(child.inherited_class_name.as_deref(), Some("card"));
        assert_eq!(child.inherited_style, resolved(&[("fontSize", "2rem")]).style);
        assert_eq!(child.component_path, ["Page", "Card"]);
    }

    #[test]
    fn test_inheriting_component_accumulates() {
        let policy = StylePolicy::default();
        let parent = StyleContext {
            inherited_class_name: Some("outer".into()),
            inherited_style: resolved(&[("color", "red"), ("fontSize", "1rem")]).style,
            component_path: vec![],
        };
        let text = StyleRequest::new("Text").with_class_name("muted");
        let child = parent.child(&text, &resolved(&[("color", "gray"), ("margin", "0")]), &policy);

        assert_eq!(child.inherited_class_name.as_deref(), Some("outer muted"));
        assert_eq!(child.inherited_style, resolved(&[("color", "gray"), ("fontSize", "1rem")]).style);
        assert_eq!(child.current(), Some("Text"));
    }

    #[test]
    fn test_other_components_pass_through() {
        let policy = StylePolicy::default();
        let parent = StyleContext {
            inherited_class_name: Some("outer".into()),
            inherited_style: resolved(&[("color", "red")]).style,
            component_path: vec!["Page".into()],
        };
        let child = parent.child(&StyleRequest::new("Box"), &resolved(&[("color", "blue")]), &policy);
        assert_eq!(child.inherited_class_name, parent.inherited_class_name);
        assert_eq!(child.inherited_style, parent.inherited_style);
        assert_eq!(child.component_path, ["Page", "Box"]);
    }
}
