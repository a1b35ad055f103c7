//! Rule table — which feed keys are displayed, and how.
//!
//! Every displayed key has an explicit [`FieldRule`]. Keys without a rule are
//! not part of the panel and are ignored when a feed is applied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::feed::Feed;
use super::format::format_de;

/// Global state keys, in struct order of the producing process.
pub const GSTATE_KEYS: [&str; 19] = [
    "pv",
    "produced",
    "consumed",
    "today",
    "tomorrow",
    "sod",
    "eod",
    "need_survive",
    "need_heating",
    "load",
    "soc",
    "akku",
    "ttl",
    "success",
    "forecast",
    "survive",
    "temp_in",
    "temp_out",
    "flags",
];

/// Power state keys.
pub const PSTATE_KEYS: [&str; 28] = [
    "pv", "dpv", "sdpv", "grid", "dgrid", "sdgrid", "akku", "ac1", "ac2", "load", "dload",
    "sdload", "dc1", "dc2", "mppt1", "mppt2", "mppt3", "mppt4", "p1", "p2", "p3", "v1", "v2",
    "v3", "f", "soc", "inv", "flags",
];

/// Dispatcher state keys.
pub const DSTATE_KEYS: [&str; 6] = ["ramp", "steal", "xload", "dload", "lock", "flags"];

/// Per-mille keys shown as colored tiles.
pub const PERMILLE_KEYS: [&str; 3] = ["success", "forecast", "survive"];

/// Efficiency keys reported in hundredths of a percent.
pub const EFFICIENCY_KEYS: [&str; 3] = ["pv_eff", "akku_eff", "inv_eff"];

/// Plain sensor readings shown next to the dispatcher state.
pub const SENSOR_KEYS: [&str; 4] = ["temp", "humi", "lumi", "baro"];

/// How an element reacts to a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Background color from [`ColorBand`](super::color::ColorBand).
    ThresholdColor,
    /// Exclusive `<key>-m` / `noise` / `<key>-p` class.
    SignClass,
    /// Text only.
    TextOnly,
}

/// Conversion from the raw integer to the displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    #[default]
    Unit,
    /// Seconds to minutes.
    Minutes,
    Tenths,
    Hundredths,
}

impl Scale {
    fn divisor(self) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::Minutes => 60.0,
            Self::Tenths => 10.0,
            Self::Hundredths => 100.0,
        }
    }

    fn decimals(self) -> u8 {
        match self {
            Self::Unit => 3,
            Self::Minutes | Self::Tenths => 1,
            Self::Hundredths => 2,
        }
    }

    /// Scaled numeric value.
    #[must_use]
    pub fn apply(self, raw: f64) -> f64 {
        raw / self.divisor()
    }

    /// Scaled value formatted for display.
    #[must_use]
    pub fn display(self, raw: f64) -> String {
        format_de(self.apply(raw), self.decimals())
    }
}

/// Display rule of one feed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub mode: UpdateMode,
    #[serde(default)]
    pub scale: Scale,
}

impl FieldRule {
    #[must_use]
    pub const fn new(mode: UpdateMode, scale: Scale) -> Self {
        Self { mode, scale }
    }

    #[must_use]
    pub const fn signed() -> Self {
        Self::new(UpdateMode::SignClass, Scale::Unit)
    }
}

/// All display rules, keyed by feed then key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<Feed, BTreeMap<String, FieldRule>>,
}

impl Default for RuleTable {
    fn default() -> Self {
        let mut table = Self::empty();

        for key in GSTATE_KEYS {
            let rule = match key {
                "ttl" => FieldRule::new(UpdateMode::SignClass, Scale::Minutes),
                "soc" => FieldRule::new(UpdateMode::SignClass, Scale::Tenths),
                k if PERMILLE_KEYS.contains(&k) => {
                    FieldRule::new(UpdateMode::ThresholdColor, Scale::Tenths)
                }
                _ => FieldRule::signed(),
            };
            table.insert(Feed::Gstate, key, rule);
        }
        for key in EFFICIENCY_KEYS {
            table.insert(
                Feed::Gstate,
                key,
                FieldRule::new(UpdateMode::SignClass, Scale::Hundredths),
            );
        }
        for key in PSTATE_KEYS {
            let rule = if key == "soc" {
                FieldRule::new(UpdateMode::SignClass, Scale::Tenths)
            } else {
                FieldRule::signed()
            };
            table.insert(Feed::Pstate, key, rule);
        }
        for key in DSTATE_KEYS {
            table.insert(Feed::Dstate, key, FieldRule::signed());
        }
        for key in SENSOR_KEYS {
            table.insert(
                Feed::Sensors,
                key,
                FieldRule::new(UpdateMode::TextOnly, Scale::Unit),
            );
        }

        table
    }
}

impl RuleTable {
    /// A table without any rule.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Add or replace the rule of `key` in `feed`.
    pub fn insert(&mut self, feed: Feed, key: impl Into<String>, rule: FieldRule) {
        self.rules.entry(feed).or_default().insert(key.into(), rule);
    }

    /// Drop the rule of `key` in `feed`, hiding it from the panel.
    pub fn remove(&mut self, feed: Feed, key: &str) -> Option<FieldRule> {
        self.rules.get_mut(&feed)?.remove(key)
    }

    /// Rule of `key` in `feed`, if displayed.
    #[must_use]
    pub fn lookup(&self, feed: Feed, key: &str) -> Option<FieldRule> {
        self.rules.get(&feed)?.get(key).copied()
    }

    /// Keys and rules of one feed, sorted by key.
    pub fn feed_rules(&self, feed: Feed) -> impl Iterator<Item = (&str, FieldRule)> {
        self.rules
            .get(&feed)
            .into_iter()
            .flat_map(|rules| rules.iter().map(|(k, r)| (k.as_str(), *r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_scale_ttl_to_minutes() {
        let rule = RuleTable::default().lookup(Feed::Gstate, "ttl").unwrap();
        assert_eq!(rule.scale, Scale::Minutes);
        assert_eq!(rule.scale.display(150.0), "2,5");
    }

    #[test]
    fn should_scale_soc_to_tenths() {
        let table = RuleTable::default();
        for feed in [Feed::Gstate, Feed::Pstate] {
            let rule = table.lookup(feed, "soc").unwrap();
            assert_eq!(rule.scale.display(853.0), "85,3");
        }
    }

    #[test]
    fn should_color_permille_keys() {
        let table = RuleTable::default();
        for key in PERMILLE_KEYS {
            let rule = table.lookup(Feed::Gstate, key).unwrap();
            assert_eq!(rule.mode, UpdateMode::ThresholdColor);
            assert_eq!(rule.scale, Scale::Tenths);
        }
    }

    #[test]
    fn should_scale_efficiency_keys_to_hundredths() {
        let table = RuleTable::default();
        for key in EFFICIENCY_KEYS {
            let rule = table.lookup(Feed::Gstate, key).unwrap();
            assert_eq!(rule.scale.display(9_512.0), "95,12");
        }
    }

    #[test]
    fn should_pass_other_keys_through_unscaled() {
        let rule = RuleTable::default().lookup(Feed::Pstate, "grid").unwrap();
        assert_eq!(rule, FieldRule::signed());
        assert_eq!(rule.scale.display(-12_345.0), "-12.345");
    }

    #[test]
    fn should_return_none_for_unknown_key() {
        assert!(RuleTable::default().lookup(Feed::Dstate, "bogus").is_none());
    }

    #[test]
    fn should_override_and_remove_rules() {
        let mut table = RuleTable::default();
        table.insert(
            Feed::Dstate,
            "lock",
            FieldRule::new(UpdateMode::TextOnly, Scale::Unit),
        );
        assert_eq!(
            table.lookup(Feed::Dstate, "lock").unwrap().mode,
            UpdateMode::TextOnly
        );
        assert!(table.remove(Feed::Dstate, "lock").is_some());
        assert!(table.lookup(Feed::Dstate, "lock").is_none());
    }

    #[test]
    fn should_deserialize_rule_with_default_scale() {
        let rule: FieldRule = serde_json::from_str(r#"{"mode":"threshold_color"}"#).unwrap();
        assert_eq!(rule.mode, UpdateMode::ThresholdColor);
        assert_eq!(rule.scale, Scale::Unit);
    }
}
