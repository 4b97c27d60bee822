//! # Theme Composition
//!
//! Structural merging of untyped theme values, and parent/child theme
//! composition on top of it.
//!
//! Merging recurses only where both sides are objects. Everything else,
//! arrays included, is replaced by the source side, so overriding a font
//! stack swaps the whole stack.

use crate::error::ThemeResult;
use crate::theme::{InheritanceStrategy, InheritingTheme, ThemeSpecification};
use crate::value::ThemeValue;

/// Deep-merge `source` over `target`.
///
/// For each key in `source`: if both sides hold objects the merge recurses,
/// otherwise the source value replaces the target value. Keys only present
/// in `target` are kept in their original position.
pub fn merge_themes(target: &ThemeValue, source: &ThemeValue) -> ThemeValue {
    let mut merged = target.clone();
    merge_into(&mut merged, source);
    merged
}

/// In-place form of [merge_themes].
pub fn merge_into(target: &mut ThemeValue, source: &ThemeValue) {
    match (target, source) {
        (ThemeValue::Object(target_map), ThemeValue::Object(source_map)) => {
            for (key, source_value) in source_map {
                let both_objects = matches!(
                    (target_map.get(key), source_value),
                    (Some(ThemeValue::Object(_)), ThemeValue::Object(_))
                );
                if !both_objects {
                    target_map.insert(key.clone(), source_value.clone());
                } else if let Some(target_value) = target_map.get_mut(key) {
                    merge_into(target_value, source_value);
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}

/// Remove the value at a dot path. Missing paths are ignored.
pub fn remove_path(value: &mut ThemeValue, path: &str) -> Option<ThemeValue> {
    let (parent, last) = match path.rsplit_once('.') {
        Some((parent, last)) => (Some(parent), last),
        None => (None, path),
    };

    let mut current = value;
    if let Some(parent) = parent {
        for segment in parent.split('.') {
            current = current.as_object_mut()?.get_mut(segment)?;
        }
    }
    current.as_object_mut()?.shift_remove(last)
}

/// Combine a child theme with its parent.
///
/// The child's `inheritance.exclude` paths are first removed from the
/// parent. With the `merge` strategy the child is then deep-merged over
/// what remains; with `replace` each top-level section the child defines
/// replaces the parent's section wholesale.
pub fn compose_theme(child: &InheritingTheme, parent: &ThemeSpecification) -> ThemeResult<ThemeSpecification> {
    let mut composed = parent.to_value()?;
    for path in &child.inheritance.exclude {
        if remove_path(&mut composed, path).is_none() {
            log::debug!("Excluded path '{}' not present in parent theme", path);
        }
    }

    let child_value = child.theme.to_value()?;
    match child.inheritance.strategy {
        InheritanceStrategy::Merge => merge_into(&mut composed, &child_value),
        InheritanceStrategy::Replace => {
            if let (Some(target), Some(sections)) = (composed.as_object_mut(), child_value.as_object()) {
                for (key, section) in sections {
                    target.insert(key.clone(), section.clone());
                }
            }
        }
    }

    ThemeSpecification::from_value(&composed)
}
