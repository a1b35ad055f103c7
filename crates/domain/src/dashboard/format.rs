//! German number formatting (`1.234,5`) for dashboard text.

use crate::units;

/// Format `value` with `.` as thousands separator and `,` as decimal mark,
/// rounded to at most `max_decimals` places. Trailing fractional zeros are
/// dropped, so `12.0` renders as `12`.
#[must_use]
pub fn format_de(value: f64, max_decimals: u8) -> String {
    let fixed = units::fixed(value, max_decimals);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac}")
    }
}
