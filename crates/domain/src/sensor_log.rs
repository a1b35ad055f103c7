//! Sensor log — aggregation of the newline-delimited JSON log written by the
//! radio bridge.
//!
//! Every line is one reading: `{"model": "...", "id": 42, "<field>": <scalar>, ...}`.
//! Readings are grouped by model then id, and each remaining field becomes an
//! ordered series so repeated lines accumulate a time series.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::units;

/// Models the radio bridge reports that are never shown.
pub const DEFAULT_EXCLUDED_MODELS: [&str; 21] = [
    "Acurite-986",
    "Akhan-100F14",
    "AlectoV1-Temperature",
    "Ambientweather-F007TH",
    "DSC-Security",
    "Generic-Temperature",
    "GT-WT02",
    "Nexa-Security",
    "Nexus-TH",
    "Oregon-CM180i",
    "Oregon-SL109H",
    "Proove-Security",
    "Prologue-TH",
    "RadioHead-ASK",
    "Rubicson-Temperature",
    "Secplus_v1",
    "SensibleLiving-Moisture",
    "Smoke-GS558",
    "Springfield-Soil",
    "TFA-TwinPlus",
    "Waveman-Switch",
];

/// Payload keys that identify the transmitter rather than carry a reading.
const STRIPPED_KEYS: [&str; 4] = ["model", "id", "channel", "mic"];

/// Field → ordered values for one device.
pub type FieldSeries = BTreeMap<String, Vec<Value>>;

/// Id → field series for one model.
pub type DeviceSeries = BTreeMap<String, FieldSeries>;

/// Which models are dropped from the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorLogFilter {
    excluded: BTreeSet<String>,
}

impl Default for SensorLogFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_MODELS)
    }
}

impl SensorLogFilter {
    /// Build a filter excluding exactly the given models.
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether readings of `model` are kept.
    #[must_use]
    pub fn allows(&self, model: &str) -> bool {
        !self.excluded.contains(model)
    }
}

/// A single parsed log line.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub model: String,
    pub id: String,
    pub fields: Map<String, Value>,
}

/// Why a log line did not produce a reading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadingError {
    #[error("line is not valid JSON")]
    NotJson,
    #[error("line is not a JSON object")]
    NotObject,
    #[error("reading has no model")]
    MissingModel,
}

impl SensorReading {
    /// Parse one log line.
    ///
    /// # Errors
    ///
    /// Returns a [`ReadingError`] when the line is not a JSON object or has an
    /// empty `model`.
    pub fn parse(line: &str) -> Result<Self, ReadingError> {
        let value: Value = serde_json::from_str(line).map_err(|_| ReadingError::NotJson)?;
        let Value::Object(mut fields) = value else {
            return Err(ReadingError::NotObject);
        };

        let model = fields.get("model").map(scalar_to_string).unwrap_or_default();
        // "0" is what an empty model collapses to in the bridge's output
        if model.is_empty() || model == "0" {
            return Err(ReadingError::MissingModel);
        }
        let id = fields.get("id").map(scalar_to_string).unwrap_or_default();

        for key in STRIPPED_KEYS {
            fields.remove(key);
        }

        Ok(Self { model, id, fields })
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Map a raw field to its displayed name and value.
///
/// Returns `None` when a convertible field carries a non-numeric value; the
/// field is then skipped for this reading only.
#[must_use]
pub fn convert_field(key: &str, value: &Value) -> Option<(String, Value)> {
    let converted = match key {
        "temperature_F" => ("temperature_C", units::fahrenheit_to_celsius(as_number(value)?)),
        "pressure_PSI" => ("pressure_BAR", units::psi_to_bar(as_number(value)?)),
        "pressure_kPa" => ("pressure_BAR", units::kpa_to_bar(as_number(value)?)),
        _ => return Some((key.to_string(), value.clone())),
    };
    Some((converted.0.to_string(), Value::String(converted.1)))
}

/// Grouped sensor readings: model → id → field → values in line order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SensorSummary {
    models: BTreeMap<String, DeviceSeries>,
}

impl SensorSummary {
    /// Iterate over models and their devices.
    pub fn models(&self) -> impl Iterator<Item = (&str, &DeviceSeries)> {
        self.models.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field series of one device, if present.
    #[must_use]
    pub fn device(&self, model: &str, id: &str) -> Option<&FieldSeries> {
        self.models.get(model)?.get(id)
    }

    /// Whether no reading was kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Append one reading, converting units on the way.
    pub fn push(&mut self, reading: SensorReading) {
        let series = self
            .models
            .entry(reading.model)
            .or_default()
            .entry(reading.id)
            .or_default();

        for (key, value) in &reading.fields {
            if let Some((name, converted)) = convert_field(key, value) {
                series.entry(name).or_default().push(converted);
            }
        }
    }
}

/// Incremental builder that also counts what it dropped.
#[derive(Debug, Default)]
pub struct SensorLogAggregator {
    filter: SensorLogFilter,
    summary: SensorSummary,
    malformed: usize,
    excluded: usize,
}

impl SensorLogAggregator {
    /// Start an empty aggregation with the given filter.
    #[must_use]
    pub fn new(filter: SensorLogFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Feed one raw log line. Blank lines are ignored silently.
    pub fn push_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        match SensorReading::parse(line) {
            Ok(reading) if self.filter.allows(&reading.model) => self.summary.push(reading),
            Ok(_) | Err(ReadingError::MissingModel) => self.excluded += 1,
            Err(_) => self.malformed += 1,
        }
    }

    /// Feed one raw log line as read from disk. Lines that are not valid
    /// UTF-8 count as malformed.
    pub fn push_raw_line(&mut self, line: &[u8]) {
        match std::str::from_utf8(line) {
            Ok(line) => self.push_line(line),
            Err(_) => self.malformed += 1,
        }
    }

    /// Lines that were not JSON objects or not UTF-8.
    #[must_use]
    pub fn malformed(&self) -> usize {
        self.malformed
    }

    /// Readings dropped for an empty or excluded model.
    #[must_use]
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// Finish and return the summary.
    #[must_use]
    pub fn finish(self) -> SensorSummary {
        self.summary
    }
}

/// Aggregate a whole log in one call.
pub fn aggregate<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    filter: SensorLogFilter,
) -> SensorSummary {
    let mut aggregator = SensorLogAggregator::new(filter);
    for line in lines {
        aggregator.push_line(line);
    }
    aggregator.finish()
}
