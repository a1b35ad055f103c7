//! Weather snapshot — the latest outdoor readings, one file per value.

use serde::{Deserialize, Serialize};

/// Raw single-value file contents, `None` when the file could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherSources {
    pub mtime: Option<String>,
    pub temperature: Option<String>,
    pub humidity: Option<String>,
    pub luminosity: Option<String>,
    pub barometric: Option<String>,
}

/// Formatted readings as served to the webcam page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub mtime: String,
    pub temp: String,
    pub humi: String,
    pub lumi: String,
    pub baro: String,
}

impl WeatherSnapshot {
    /// Build the snapshot from raw file contents.
    ///
    /// Line breaks are stripped and a unit suffix appended. A missing source
    /// becomes an empty string without suffix.
    #[must_use]
    pub fn from_sources(sources: &WeatherSources) -> Self {
        Self {
            mtime: with_suffix(sources.mtime.as_deref(), ""),
            temp: with_suffix(sources.temperature.as_deref(), " °C"),
            humi: with_suffix(sources.humidity.as_deref(), " %"),
            lumi: with_suffix(sources.luminosity.as_deref(), " %"),
            baro: with_suffix(sources.barometric.as_deref(), " hPa"),
        }
    }
}

fn with_suffix(raw: Option<&str>, suffix: &str) -> String {
    match raw {
        Some(value) => {
            let mut out: String = value.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
            out.push_str(suffix);
            out
        }
        None => String::new(),
    }
}
