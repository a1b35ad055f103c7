//! Feeds — the JSON state documents the pv dashboard polls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One polled JSON document. Each feed patches its own panel section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feed {
    /// Global (daily) battery/grid state.
    Gstate,
    /// Power state, updated every second by the inverter bridge.
    Pstate,
    /// Dispatcher state.
    Dstate,
    /// Switchable device loads, rendered as bars.
    Devices,
    /// Plain sensor readings shown next to the dispatcher state.
    Sensors,
}

impl Feed {
    /// All feeds in display order.
    pub const ALL: [Self; 5] = [
        Self::Pstate,
        Self::Dstate,
        Self::Devices,
        Self::Gstate,
        Self::Sensors,
    ];

    /// Lowercase feed name, also its file stem (`gstate` → `gstate.json`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gstate => "gstate",
            Self::Pstate => "pstate",
            Self::Dstate => "dstate",
            Self::Devices => "devices",
            Self::Sensors => "sensors",
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feed {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feed| feed.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownFeed(s.to_string()))
    }
}
