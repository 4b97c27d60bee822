//! The cascade resolver.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{join_class_names, Resolution, ResolvedStyle, StyleContext, StylePolicy, StyleRequest, StyleSourceKind, StyleWarning};
use crate::error::ThemeResult;
use crate::theme::{ContentOverride, StyleOverride, StyleValue, ThemeSpecification, TokenPath};
use crate::tokens::resolve_theme_token;
use crate::value::{Literal, ThemeValue, ThemeValueExt};

const IMPORTANT: &str = "!important";

/// One source's contribution before cascading.
#[derive(Debug, Default)]
struct Layer {
    class_name: Option<String>,
    style: IndexMap<String, Literal>,
}

/// Resolves component styles against one theme.
///
/// The resolver owns a shared handle to its theme and the theme's untyped
/// form for token lookup, so it can be cloned cheaply and used from any
/// thread.
#[derive(Debug, Clone)]
pub struct StyleResolver {
    theme: Arc<ThemeSpecification>,
    tokens: Arc<ThemeValue>,
    policy: StylePolicy,
    policy_warnings: Vec<StyleWarning>,
}

impl StyleResolver {
    /// Create a resolver for `theme`.
    pub fn new(theme: Arc<ThemeSpecification>) -> ThemeResult<Self> {
        let tokens = Arc::new(theme.to_value()?);
        let policy = StylePolicy::from_config(theme.style_extension.as_ref());
        Ok(Self {
            theme,
            tokens,
            policy: policy.value,
            policy_warnings: policy.warnings,
        })
    }

    /// The theme being resolved against.
    pub fn theme(&self) -> &Arc<ThemeSpecification> {
        &self.theme
    }

    /// The untyped theme used for token lookup.
    pub fn tokens(&self) -> &ThemeValue {
        &self.tokens
    }

    /// The effective cascade policy.
    pub fn policy(&self) -> &StylePolicy {
        &self.policy
    }

    /// Problems found in the theme's `styleExtension` section.
    pub fn policy_warnings(&self) -> &[StyleWarning] {
        &self.policy_warnings
    }

    /// Look up a token in the theme.
    pub fn resolve_token(&self, path: &str) -> Option<&ThemeValue> {
        resolve_theme_token(&self.tokens, path)
    }

    /// Resolve one component instance.
    pub fn resolve(&self, request: &StyleRequest, context: &StyleContext) -> Resolution<ResolvedStyle> {
        let mut warnings = Vec::new();
        let mut layers = Vec::new();

        for &kind in &self.policy.precedence {
            match kind {
                StyleSourceKind::ThemeDefaults => {
                    if let Some(defaults) = &self.theme.defaults {
                        layers.push(self.override_layer(defaults, kind, &mut warnings));
                    }
                }
                StyleSourceKind::ThemeComponents => {
                    for component_override in self.component_overrides(request, &mut warnings) {
                        layers.push(self.override_layer(component_override, kind, &mut warnings));
                    }
                }
                StyleSourceKind::ParentInherited => {
                    if self.policy.inherits(&request.component_type) {
                        layers.push(Layer {
                            class_name: context.inherited_class_name.clone(),
                            style: self.policy.inheritable(&context.inherited_style),
                        });
                    }
                }
                StyleSourceKind::SpecStyle => {
                    let mut layer = Layer::default();
                    for (property, value) in &request.style {
                        self.apply_value(&mut layer, property, value, kind, &mut warnings);
                    }
                    layers.push(layer);
                }
                StyleSourceKind::SpecClassName => layers.push(Layer {
                    class_name: request.class_name.clone(),
                    style: IndexMap::new(),
                }),
                StyleSourceKind::RuntimeOverrides => {
                    if let Some(runtime) = &request.runtime {
                        layers.push(self.override_layer(runtime, kind, &mut warnings));
                    }
                }
            }
        }

        Resolution {
            value: self.cascade(layers),
            warnings,
        }
    }

    /// Resolve the content override in `slot` of `component_type`.
    pub fn resolve_content(&self, component_type: &str, slot: &str) -> Option<Resolution<ResolvedContent>> {
        let content = self.theme.component(component_type)?.content.get(slot)?;
        Some(self.resolve_content_override(content))
    }

    /// Resolve every style embedded in a content override tree.
    pub fn resolve_content_override(&self, content: &ContentOverride) -> Resolution<ResolvedContent> {
        let mut warnings = Vec::new();
        let value = self.content_node(content, &mut warnings);
        Resolution { value, warnings }
    }

    /// Resolve a single override on its own, outside any cascade.
    pub fn resolve_override(&self, style_override: &StyleOverride) -> Resolution<ResolvedStyle> {
        let mut warnings = Vec::new();
        let layer = self.override_layer(style_override, StyleSourceKind::ThemeComponents, &mut warnings);
        Resolution {
            value: ResolvedStyle {
                class_name: join_class_names(layer.class_name.as_deref()).unwrap_or_default(),
                style: layer.style,
            },
            warnings,
        }
    }

    fn content_node(&self, content: &ContentOverride, warnings: &mut Vec<StyleWarning>) -> ResolvedContent {
        let mut resolve_style = |style: &Option<StyleOverride>| {
            style.as_ref().map(|s| {
                let resolved = self.resolve_override(s);
                warnings.extend(resolved.warnings);
                resolved.value
            })
        };

        match content {
            ContentOverride::Link {
                label,
                href,
                style: link_style,
            } => ResolvedContent::Link {
                label: label.clone(),
                href: href.clone(),
                style: resolve_style(link_style),
            },
            ContentOverride::Feature {
                title,
                description,
                icon,
                style: feature_style,
            } => ResolvedContent::Feature {
                title: title.clone(),
                description: description.clone(),
                icon: icon.clone(),
                style: resolve_style(feature_style),
            },
            ContentOverride::Section {
                title,
                items,
                style: section_style,
            } => {
                let section_style = resolve_style(section_style);
                let items = items.iter().map(|item| self.content_node(item, warnings)).collect();
                ResolvedContent::Section {
                    title: title.clone(),
                    items,
                    style: section_style,
                }
            }
        }
    }

    /// The theme's overrides for the request, in application order.
    fn component_overrides<'t>(
        &'t self,
        request: &StyleRequest,
        warnings: &mut Vec<StyleWarning>,
    ) -> Vec<&'t StyleOverride> {
        let Some(component) = self.theme.component(&request.component_type) else {
            log::debug!("No theme overrides for component '{}'", request.component_type);
            warnings.push(StyleWarning::UnknownComponent {
                component_type: request.component_type.clone(),
            });
            return Vec::new();
        };

        let lookup = |map: &'t IndexMap<String, StyleOverride>, key: &Option<String>| {
            key.as_deref().and_then(|key| map.get(key))
        };

        let mut overrides: Vec<&StyleOverride> = Vec::new();
        overrides.extend(component.global.as_ref());
        overrides.extend(lookup(&component.variants, &request.variant));
        overrides.extend(lookup(&component.sizes, &request.size));
        overrides.extend(lookup(&component.states, &request.state));
        overrides.extend(
            component
                .find_combination(request.variant.as_deref(), request.size.as_deref(), request.state.as_deref())
                .map(|combination| &combination.style),
        );
        overrides
    }

    fn override_layer(
        &self,
        style_override: &StyleOverride,
        stage: StyleSourceKind,
        warnings: &mut Vec<StyleWarning>,
    ) -> Layer {
        let mut layer = Layer {
            class_name: style_override.class_name.clone(),
            style: IndexMap::new(),
        };
        for (property, value) in &style_override.styles {
            self.apply_value(&mut layer, property, value, stage, warnings);
        }
        for (property, path) in &style_override.tokens {
            if let Some(literal) = self.token_literal(property, path, stage, warnings) {
                layer.style.insert(property.clone(), literal);
            }
        }
        layer
    }

    fn apply_value(
        &self,
        layer: &mut Layer,
        property: &str,
        value: &StyleValue,
        stage: StyleSourceKind,
        warnings: &mut Vec<StyleWarning>,
    ) {
        let literal = match value {
            StyleValue::Literal(literal) => Some(literal.clone()),
            StyleValue::Token(path) => self.token_literal(property, path, stage, warnings),
        };
        if let Some(literal) = literal {
            layer.style.insert(property.to_string(), literal);
        }
    }

    fn token_literal(
        &self,
        property: &str,
        path: &TokenPath,
        stage: StyleSourceKind,
        warnings: &mut Vec<StyleWarning>,
    ) -> Option<Literal> {
        let found = self.resolve_token(path.as_str()).filter(|value| **value != ThemeValue::Null);
        let Some(value) = found else {
            log::warn!("Dropping '{}': token '{}' did not resolve", property, path);
            warnings.push(StyleWarning::UnresolvedToken {
                property: property.to_string(),
                path: path.as_str().to_string(),
                stage,
            });
            return None;
        };

        let literal = value.to_literal();
        if literal.is_none() {
            log::warn!("Dropping '{}': token '{}' is not a single value", property, path);
            warnings.push(StyleWarning::NonPrimitiveToken {
                property: property.to_string(),
                path: path.as_str().to_string(),
                stage,
            });
        }
        literal
    }

    fn cascade(&self, layers: Vec<Layer>) -> ResolvedStyle {
        let class_name =
            join_class_names(layers.iter().filter_map(|layer| layer.class_name.as_deref())).unwrap_or_default();

        let mut style = IndexMap::new();
        if !self.policy.honors_important() {
            for layer in layers {
                style.extend(layer.style);
            }
            return ResolvedStyle { class_name, style };
        }

        let mut important: IndexMap<String, Literal> = IndexMap::new();
        for layer in layers {
            for (property, value) in layer.style {
                match strip_important(&value) {
                    Some(stripped) => {
                        important.insert(property, stripped);
                    }
                    None if !important.contains_key(&property) => {
                        style.insert(property, value);
                    }
                    None => {}
                }
            }
        }
        style.extend(important);
        ResolvedStyle { class_name, style }
    }
}

/// The value without its `!important` marker, if it carries one.
fn strip_important(value: &Literal) -> Option<Literal> {
    let text = value.as_text()?;
    let index = text.find(IMPORTANT)?;
    Some(Literal::Text(text[..index].trim().to_string()))
}

/// A content override with its styles resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResolvedContent {
    /// A link.
    Link {
        /// Link text.
        label: Option<String>,
        /// Link target.
        href: Option<String>,
        /// Resolved styling.
        style: Option<ResolvedStyle>,
    },
    /// A titled group.
    Section {
        /// Section heading.
        title: Option<String>,
        /// Nested content.
        items: Vec<ResolvedContent>,
        /// Resolved styling.
        style: Option<ResolvedStyle>,
    },
    /// A feature tile.
    Feature {
        /// Feature heading.
        title: Option<String>,
        /// Body text.
        description: Option<String>,
        /// Icon name.
        icon: Option<String>,
        /// Resolved styling.
        style: Option<ResolvedStyle>,
    },
}
