//! Element patches — the change one feed value causes on its element.

use serde::Serialize;

use super::color::ColorBand;
use super::rules::{FieldRule, UpdateMode};
use super::sign::SignClass;

/// What applying one value does to an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementPatch {
    /// Formatted display text.
    pub text: String,
    /// New background, for threshold-colored elements.
    pub background: Option<ColorBand>,
    /// Class to add after `remove_classes` were removed.
    pub add_class: Option<String>,
    /// Classes to remove first.
    pub remove_classes: Vec<String>,
}

impl ElementPatch {
    /// Compute the patch of `key` receiving `value` under `rule`.
    #[must_use]
    pub fn compute(key: &str, value: f64, rule: FieldRule) -> Self {
        let text = rule.scale.display(value);
        match rule.mode {
            UpdateMode::ThresholdColor => Self {
                text,
                background: Some(ColorBand::from_value(value)),
                add_class: None,
                remove_classes: Vec::new(),
            },
            UpdateMode::SignClass => {
                let class = SignClass::from_value(value).class_name(key);
                let remove_classes = SignClass::all_class_names(key)
                    .into_iter()
                    .filter(|c| *c != class)
                    .collect();
                Self {
                    text,
                    background: None,
                    add_class: Some(class),
                    remove_classes,
                }
            }
            UpdateMode::TextOnly => Self {
                text,
                background: None,
                add_class: None,
                remove_classes: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::rules::Scale;

    #[test]
    fn should_color_threshold_element() {
        let rule = FieldRule::new(UpdateMode::ThresholdColor, Scale::Tenths);
        let patch = ElementPatch::compute("success", 900.0, rule);
        assert_eq!(patch.background, Some(ColorBand::GreenYellow));
        assert_eq!(patch.text, "90");
        assert!(patch.add_class.is_none());
    }

    #[test]
    fn should_color_fractional_value_by_raw_value() {
        let rule = FieldRule::new(UpdateMode::ThresholdColor, Scale::Unit);
        assert_eq!(
            ElementPatch::compute("success", 0.4, rule).background,
            Some(ColorBand::Red)
        );
        assert_eq!(
            ElementPatch::compute("success", 249.6, rule).background,
            Some(ColorBand::Red)
        );
    }

    #[test]
    fn should_swap_sign_classes() {
        let patch = ElementPatch::compute("grid", -11.0, FieldRule::signed());
        assert_eq!(patch.add_class.as_deref(), Some("grid-m"));
        assert_eq!(patch.remove_classes, vec!["noise", "grid-p"]);
        assert!(patch.background.is_none());
    }

    #[test]
    fn should_mark_small_values_as_noise() {
        let patch = ElementPatch::compute("grid", 10.0, FieldRule::signed());
        assert_eq!(patch.add_class.as_deref(), Some("noise"));
        assert_eq!(patch.remove_classes, vec!["grid-m", "grid-p"]);
    }

    #[test]
    fn should_only_set_text_in_text_mode() {
        let rule = FieldRule::new(UpdateMode::TextOnly, Scale::Unit);
        let patch = ElementPatch::compute("temp", 1234.5, rule);
        assert_eq!(patch.text, "1.234,5");
        assert!(patch.add_class.is_none());
        assert!(patch.remove_classes.is_empty());
        assert!(patch.background.is_none());
    }
}
