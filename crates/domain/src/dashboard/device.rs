//! Switchable devices — load bars of the pv dashboard.

use serde::{Deserialize, Deserializer, Serialize};

/// Operating state reported by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Off,
    On,
    #[default]
    Unknown,
    /// Switched on but drawing nothing.
    Zero,
}

impl From<i64> for DeviceStatus {
    fn from(raw: i64) -> Self {
        match raw {
            0 => Self::Off,
            1 => Self::On,
            3 => Self::Zero,
            _ => Self::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for DeviceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(lenient_int(deserializer)?.map_or(Self::Unknown, Self::from))
    }
}

/// One entry of the devices feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceState {
    #[serde(default)]
    pub host: String,
    /// Hex id of the switching relay board; `"000000"` means not switchable.
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// Relay index on the board.
    #[serde(default, deserialize_with = "lenient_u32")]
    pub r: u32,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub load: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total: i64,
    #[serde(default)]
    pub state: DeviceStatus,
}

impl DeviceState {
    /// Whether the device can be toggled (it has a non-zero relay id).
    #[must_use]
    pub fn is_switchable(&self) -> bool {
        parse_device_id(&self.id).is_some_and(|id| id != 0)
    }
}

/// Parse a relay id: hexadecimal as written by the dispatcher.
#[must_use]
pub fn parse_device_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    u64::from_str_radix(trimmed, 16).ok()
}

/// Visual class of a load bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarClass {
    Zero,
    Unknown,
    /// Negative load (feeding), bar grows downward.
    Minus,
    Plus,
}

impl BarClass {
    /// CSS class attribute.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Zero => "bar z",
            Self::Unknown => "bar u",
            Self::Minus => "bar m",
            Self::Plus => "bar p",
        }
    }
}

/// A rendered load bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceBar {
    pub name: String,
    pub host: String,
    pub id: String,
    pub relay: u32,
    pub load: i64,
    /// Bar height in percent of the device's total load; negative-load bars
    /// are flipped so they grow downward.
    pub height: f64,
    pub class: BarClass,
    pub switchable: bool,
}

impl DeviceBar {
    /// Compute the bar of one device.
    #[must_use]
    pub fn from_state(state: &DeviceState) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let mut height = if state.total == 0 {
            0.0
        } else {
            state.load as f64 * 100.0 / state.total as f64
        };

        let class = match state.state {
            DeviceStatus::Zero => BarClass::Zero,
            DeviceStatus::Unknown => BarClass::Unknown,
            _ if state.load < 0 => {
                height = -height;
                BarClass::Minus
            }
            _ => BarClass::Plus,
        };

        Self {
            name: state.name.clone(),
            host: state.host.clone(),
            id: state.id.clone(),
            relay: state.r,
            load: state.load,
            height,
            class,
            switchable: state.is_switchable(),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(lenient_int(deserializer)?.unwrap_or_default())
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(lenient_int(deserializer)?
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or_default())
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
