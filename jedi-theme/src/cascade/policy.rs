//! Named style sources and the effective cascade policy of a theme.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use super::{Resolution, StyleWarning};
use crate::theme::extension::{
    StyleExtensionConfig, DEFAULT_BOUNDARY_COMPONENTS, DEFAULT_INHERITABLE_PROPERTIES,
    DEFAULT_INHERITING_COMPONENTS,
};
use crate::value::Literal;

/// A named source of style in the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSourceKind {
    /// `theme.defaults`
    ThemeDefaults,
    /// `theme.components`: global, variant, size, state and combination overrides.
    ThemeComponents,
    /// `parent.inherited`
    ParentInherited,
    /// `spec.style`
    SpecStyle,
    /// `spec.className`
    SpecClassName,
    /// `runtime.overrides`
    RuntimeOverrides,
}

impl StyleSourceKind {
    /// Every source in default precedence order, lowest first.
    pub const DEFAULT_ORDER: [StyleSourceKind; 6] = [
        Self::ThemeDefaults,
        Self::ThemeComponents,
        Self::ParentInherited,
        Self::SpecStyle,
        Self::SpecClassName,
        Self::RuntimeOverrides,
    ];

    /// The configuration name of the source.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThemeDefaults => "theme.defaults",
            Self::ThemeComponents => "theme.components",
            Self::ParentInherited => "parent.inherited",
            Self::SpecStyle => "spec.style",
            Self::SpecClassName => "spec.className",
            Self::RuntimeOverrides => "runtime.overrides",
        }
    }

    /// Parse a configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::DEFAULT_ORDER.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for StyleSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The cascade settings of a theme with every default filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct StylePolicy {
    /// Properties that flow from parent to child.
    pub inheritable_properties: IndexSet<String>,
    /// Components that accept inherited properties.
    pub inheriting_components: IndexSet<String>,
    /// Components that start a new inheritance root.
    pub boundary_components: IndexSet<String>,
    /// Every source, lowest precedence first.
    pub precedence: Vec<StyleSourceKind>,
    /// Precedence-aware conflict resolution.
    pub use_specificity: bool,
    /// Honor `!important` markers.
    pub handle_important: bool,
}

impl Default for StylePolicy {
    fn default() -> Self {
        Self::from_config(None).value
    }
}

fn owned_set(names: &[&str]) -> IndexSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl StylePolicy {
    /// Build the policy from a theme's `styleExtension` section.
    ///
    /// Unknown precedence names are reported and ignored. Sources the
    /// configured order leaves out rank below every listed source, in
    /// their default relative order.
    pub fn from_config(config: Option<&StyleExtensionConfig>) -> Resolution<Self> {
        let inheritance = config.and_then(|c| c.inheritance.as_ref());
        let pick = |list: Option<&Vec<String>>, fallback: &[&str]| match list {
            Some(names) => names.iter().cloned().collect(),
            None => owned_set(fallback),
        };

        let mut warnings = Vec::new();
        let precedence = match config
            .and_then(|c| c.composition.as_ref())
            .and_then(|c| c.precedence_order.as_ref())
        {
            Some(names) => precedence_from_names(names, &mut warnings),
            None => StyleSourceKind::DEFAULT_ORDER.to_vec(),
        };

        let cascade = config.and_then(|c| c.cascade.as_ref());
        let policy = Self {
            inheritable_properties: pick(
                inheritance.and_then(|i| i.inheritable_properties.as_ref()),
                DEFAULT_INHERITABLE_PROPERTIES,
            ),
            inheriting_components: pick(
                inheritance.and_then(|i| i.inheriting_components.as_ref()),
                DEFAULT_INHERITING_COMPONENTS,
            ),
            boundary_components: pick(
                inheritance.and_then(|i| i.boundary_components.as_ref()),
                DEFAULT_BOUNDARY_COMPONENTS,
            ),
            precedence,
            use_specificity: cascade.and_then(|c| c.use_specificity).unwrap_or(true),
            handle_important: cascade.and_then(|c| c.handle_important).unwrap_or(true),
        };

        Resolution {
            value: policy,
            warnings,
        }
    }

    /// Whether `component_type` resets inheritance.
    pub fn is_boundary(&self, component_type: &str) -> bool {
        self.boundary_components.contains(component_type)
    }

    /// Whether `component_type` receives the parent's inherited style.
    pub fn inherits(&self, component_type: &str) -> bool {
        !self.is_boundary(component_type) && self.inheriting_components.contains(component_type)
    }

    /// Keep only the inheritable properties of `style`.
    pub fn inheritable(&self, style: &IndexMap<String, Literal>) -> IndexMap<String, Literal> {
        style
            .iter()
            .filter(|(property, _)| self.inheritable_properties.contains(property.as_str()))
            .map(|(property, value)| (property.clone(), value.clone()))
            .collect()
    }

    /// Whether `!important` markers take effect.
    pub fn honors_important(&self) -> bool {
        self.use_specificity && self.handle_important
    }
}

fn precedence_from_names(names: &[String], warnings: &mut Vec<StyleWarning>) -> Vec<StyleSourceKind> {
    let mut listed: Vec<StyleSourceKind> = Vec::new();
    for name in names {
        match StyleSourceKind::from_name(name) {
            Some(kind) if !listed.contains(&kind) => listed.push(kind),
            Some(_) => {}
            None => {
                log::warn!("Ignoring unknown style source '{}' in precedence order", name);
                warnings.push(StyleWarning::UnknownPrecedenceSource { name: name.clone() });
            }
        }
    }

    let mut order: Vec<StyleSourceKind> = StyleSourceKind::DEFAULT_ORDER
        .into_iter()
        .filter(|kind| !listed.contains(kind))
        .collect();
    order.extend(listed);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::extension::{CascadeSettings, CompositionSettings, InheritanceSettings};

    fn config_with_order(order: &[&str]) -> StyleExtensionConfig {
        StyleExtensionConfig {
            composition: Some(CompositionSettings {
                precedence_order: Some(order.iter().map(|s| s.to_string()).collect()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_policy() {
        let policy = StylePolicy::default();
        assert_eq!(policy.precedence, StyleSourceKind::DEFAULT_ORDER);
        assert!(policy.use_specificity && policy.handle_important);
        assert!(policy.inherits("Text"));
        assert!(!policy.inherits("Card"));
        assert!(policy.is_boundary("Modal"));
        assert!(!policy.inherits("Box"));
    }

    #[test]
    fn test_source_names() {
        for kind in StyleSourceKind::DEFAULT_ORDER {
            assert_eq!(StyleSourceKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(StyleSourceKind::from_name("theme.variants"), None);

        let names: Vec<&str> = StyleSourceKind::DEFAULT_ORDER.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, crate::theme::extension::DEFAULT_PRECEDENCE_ORDER);
    }

    #[test]
    fn test_custom_order_ranks_missing_sources_first() {
        let config = config_with_order(&["spec.style", "theme.components"]);
        let policy = StylePolicy::from_config(Some(&config));
        assert!(policy.warnings.is_empty());
        assert_eq!(
            policy.value.precedence,
            [
                StyleSourceKind::ThemeDefaults,
                StyleSourceKind::ParentInherited,
                StyleSourceKind::SpecClassName,
                StyleSourceKind::RuntimeOverrides,
                StyleSourceKind::SpecStyle,
                StyleSourceKind::ThemeComponents,
            ]
        );
    }

    #[test]
    fn test_unknown_source_is_reported() {
        let config = config_with_order(&["theme.defaults", "theme.bogus", "theme.defaults"]);
        let policy = StylePolicy::from_config(Some(&config));
        assert_eq!(
            policy.warnings,
            [StyleWarning::UnknownPrecedenceSource {
                name: "theme.bogus".into()
            }]
        );
        assert_eq!(policy.value.precedence.len(), 6);
        assert_eq!(policy.value.precedence.last(), Some(&StyleSourceKind::ThemeDefaults));
    }

    #[test]
    fn test_configured_lists_replace_defaults() {
        let config = StyleExtensionConfig {
            inheritance: Some(InheritanceSettings {
                inheritable_properties: Some(vec!["color".into()]),
                inheriting_components: Some(vec!["Card".into(), "Box".into()]),
                boundary_components: None,
            }),
            cascade: Some(CascadeSettings {
                use_specificity: Some(false),
                handle_important: None,
            }),
            ..Default::default()
        };
        let policy = StylePolicy::from_config(Some(&config)).value;
        assert!(policy.inherits("Box"));
        assert!(!policy.inherits("Card"));
        assert!(!policy.inherits("Text"));
        assert!(!policy.honors_important());

        let mut style = IndexMap::new();
        style.insert("color".to_string(), Literal::from("red"));
        style.insert("fontSize".to_string(), Literal::from("1rem"));
        assert_eq!(policy.inheritable(&style).len(), 1);
    }
}
