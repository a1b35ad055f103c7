//! Unit conversions applied to raw sensor readings.
//!
//! Results are pre-formatted strings: the sensor summary carries converted
//! values exactly as they are displayed.

/// PSI to bar factor.
pub const PSI_TO_BAR: f64 = 0.068_947_57;

/// kPa to bar factor.
pub const KPA_TO_BAR: f64 = 0.01;

/// Convert degrees Fahrenheit to whole degrees Celsius.
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> String {
    fixed(5.0 / 9.0 * (fahrenheit - 32.0), 0)
}

/// Convert PSI to bar with two decimals.
#[must_use]
pub fn psi_to_bar(psi: f64) -> String {
    fixed(psi * PSI_TO_BAR, 2)
}

/// Convert kPa to bar with two decimals.
#[must_use]
pub fn kpa_to_bar(kpa: f64) -> String {
    fixed(kpa * KPA_TO_BAR, 2)
}

/// Round half away from zero to `decimals` places and format without
/// thousands separators.
#[must_use]
pub fn fixed(value: f64, decimals: u8) -> String {
    let factor = 10f64.powi(i32::from(decimals));
    // adding +0.0 turns -0.0 into 0.0, which would otherwise render as "-0"
    let rounded = (value * factor).round() / factor + 0.0;
    format!("{rounded:.prec$}", prec = usize::from(decimals))
}
