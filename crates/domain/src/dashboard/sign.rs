//! Sign classes for power-flow tiles.

use serde::{Deserialize, Serialize};

/// Values within `±NOISE` count as noise.
pub const NOISE: f64 = 10.0;

/// CSS class shared by all tiles inside the noise band.
pub const NOISE_CLASS: &str = "noise";

/// Direction of a signed reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignClass {
    Negative,
    Noise,
    Positive,
}

impl SignClass {
    /// Classify a value; `-10` and `10` are still noise.
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value < -NOISE {
            Self::Negative
        } else if value > NOISE {
            Self::Positive
        } else {
            Self::Noise
        }
    }

    /// CSS class for `key` in this state: `<key>-m`, `noise` or `<key>-p`.
    #[must_use]
    pub fn class_name(self, key: &str) -> String {
        match self {
            Self::Negative => format!("{key}-m"),
            Self::Noise => NOISE_CLASS.to_string(),
            Self::Positive => format!("{key}-p"),
        }
    }

    /// Every class this key can carry, used to clear the previous state.
    #[must_use]
    pub fn all_class_names(key: &str) -> [String; 3] {
        [
            Self::Negative.class_name(key),
            Self::Noise.class_name(key),
            Self::Positive.class_name(key),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_boundaries() {
        assert_eq!(SignClass::from_value(-11.0), SignClass::Negative);
        assert_eq!(SignClass::from_value(-10.0), SignClass::Noise);
        assert_eq!(SignClass::from_value(0.0), SignClass::Noise);
        assert_eq!(SignClass::from_value(10.0), SignClass::Noise);
        assert_eq!(SignClass::from_value(11.0), SignClass::Positive);
    }

    #[test]
    fn should_name_classes_after_key() {
        assert_eq!(SignClass::Negative.class_name("grid"), "grid-m");
        assert_eq!(SignClass::Positive.class_name("grid"), "grid-p");
        assert_eq!(SignClass::Noise.class_name("grid"), "noise");
    }
}
