//! Panel — the rendered state of the pv dashboard.
//!
//! A panel holds one element per displayed key (as listed by the
//! [`RuleTable`]) and the device load bars. Feeds patch it; nothing else does.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::Value;

use super::color::ColorBand;
use super::device::{DeviceBar, DeviceState};
use super::feed::Feed;
use super::patch::ElementPatch;
use super::rules::{FieldRule, RuleTable};
use crate::time::Timestamp;

/// One displayed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    #[serde(skip)]
    pub rule: FieldRule,
    pub text: String,
    pub classes: BTreeSet<String>,
    pub background: Option<ColorBand>,
}

impl Element {
    /// An element that has not received a value yet.
    #[must_use]
    pub fn new(rule: FieldRule) -> Self {
        Self {
            rule,
            text: String::new(),
            classes: BTreeSet::new(),
            background: None,
        }
    }

    /// Apply a patch: remove classes first, then add.
    pub fn apply(&mut self, patch: ElementPatch) {
        self.text = patch.text;
        if patch.background.is_some() {
            self.background = patch.background;
        }
        for class in &patch.remove_classes {
            self.classes.remove(class);
        }
        if let Some(class) = patch.add_class {
            self.classes.insert(class);
        }
    }

    /// Space separated class attribute.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

/// Result of applying one feed body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Number of elements (or device bars) updated.
    Applied(usize),
    /// The body did not have the shape this feed expects.
    WrongShape,
}

/// Dashboard state: per-feed elements plus device bars.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Panel {
    sections: BTreeMap<Feed, BTreeMap<String, Element>>,
    devices: Vec<DeviceBar>,
    updated: BTreeMap<Feed, Timestamp>,
}

impl Panel {
    /// Create a panel with one empty element per rule.
    #[must_use]
    pub fn new(rules: &RuleTable) -> Self {
        let mut sections: BTreeMap<Feed, BTreeMap<String, Element>> = BTreeMap::new();
        for feed in Feed::ALL {
            for (key, rule) in rules.feed_rules(feed) {
                sections
                    .entry(feed)
                    .or_default()
                    .insert(key.to_string(), Element::new(rule));
            }
        }
        Self {
            sections,
            ..Self::default()
        }
    }

    /// Elements of one feed, sorted by key.
    pub fn section(&self, feed: Feed) -> impl Iterator<Item = (&str, &Element)> {
        self.sections
            .get(&feed)
            .into_iter()
            .flat_map(|elements| elements.iter().map(|(k, e)| (k.as_str(), e)))
    }

    /// Element of `key` in `feed`.
    #[must_use]
    pub fn element(&self, feed: Feed, key: &str) -> Option<&Element> {
        self.sections.get(&feed)?.get(key)
    }

    /// Current device bars.
    #[must_use]
    pub fn devices(&self) -> &[DeviceBar] {
        &self.devices
    }

    /// When `feed` was last applied successfully.
    #[must_use]
    pub fn updated(&self, feed: Feed) -> Option<Timestamp> {
        self.updated.get(&feed).copied()
    }

    /// Apply a feed body received at `at`.
    pub fn apply(&mut self, feed: Feed, body: &Value, at: Timestamp) -> ApplyOutcome {
        let outcome = match feed {
            Feed::Devices => self.replace_devices(body),
            _ => match body {
                Value::Object(map) => ApplyOutcome::Applied(self.apply_values(feed, map)),
                _ => ApplyOutcome::WrongShape,
            },
        };
        if matches!(outcome, ApplyOutcome::Applied(_)) {
            self.updated.insert(feed, at);
        }
        outcome
    }

    /// Patch every element of `feed` that has a key in `values`. Keys
    /// without an element and non-numeric values are skipped.
    fn apply_values(&mut self, feed: Feed, values: &serde_json::Map<String, Value>) -> usize {
        let Some(elements) = self.sections.get_mut(&feed) else {
            return 0;
        };
        let mut applied = 0;
        for (key, value) in values {
            let Some(element) = elements.get_mut(key) else {
                continue;
            };
            let Some(number) = numeric(value) else {
                continue;
            };
            element.apply(ElementPatch::compute(key, number, element.rule));
            applied += 1;
        }
        applied
    }

    /// Rebuild the device bars. Accepts an array or an object of devices;
    /// entries that do not parse are skipped.
    fn replace_devices(&mut self, body: &Value) -> ApplyOutcome {
        let entries: Vec<&Value> = match body {
            Value::Array(items) => items.iter().collect(),
            Value::Object(map) => map.values().collect(),
            _ => return ApplyOutcome::WrongShape,
        };
        self.devices = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<DeviceState>(entry.clone()).ok())
            .map(|state| DeviceBar::from_state(&state))
            .collect();
        ApplyOutcome::Applied(self.devices.len())
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        _ => None,
    }
}
