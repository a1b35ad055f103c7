//! Threshold colors for per-mille tiles.

use serde::{Deserialize, Serialize};

/// Background color of a per-mille tile, ordered from neutral through a
/// red-to-green ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBand {
    /// Exactly zero, no data.
    Neutral,
    Red,
    OrangeRed,
    Coral,
    Orange,
    GreenYellow,
    /// 100% and above.
    Success,
}

impl ColorBand {
    /// Map a per-mille value to its band.
    ///
    /// Boundaries belong to the upper band: `250` is orangered, `1000` is
    /// success. Negative values land in red, and only an exact zero is
    /// neutral.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_value(value: f64) -> Self {
        match value {
            v if v == 0.0 => Self::Neutral,
            v if v < 250.0 => Self::Red,
            v if v < 500.0 => Self::OrangeRed,
            v if v < 750.0 => Self::Coral,
            v if v < 900.0 => Self::Orange,
            v if v < 1000.0 => Self::GreenYellow,
            _ => Self::Success,
        }
    }

    /// CSS color name.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Neutral => "lightgrey",
            Self::Red => "red",
            Self::OrangeRed => "orangered",
            Self::Coral => "coral",
            Self::Orange => "orange",
            Self::GreenYellow => "greenyellow",
            Self::Success => "palegreen",
        }
    }
}
