//! Human-readable formatting helpers shared by cards and tables.

use chrono::{DateTime, FixedOffset, Utc};

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Format a byte count using the largest unit where the scaled value is at
/// least one, rounded to `precision` decimal digits. Zero renders as `0 B`.
#[must_use]
pub fn bytes_to_size(bytes: u64, precision: u32) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let exponent = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1);
    let unit = 1u128 << (10 * exponent);
    let pow10 = 10u128.pow(precision);
    // Integer arithmetic, rounded half-up at the requested precision.
    let scaled = (u128::from(bytes) * pow10 + unit / 2) / unit;
    let whole = scaled / pow10;
    let frac = scaled % pow10;
    let label = UNITS[exponent as usize];
    if precision == 0 {
        format!("{whole} {label}")
    } else {
        format!("{whole}.{frac:0width$} {label}", width = precision as usize)
    }
}

/// Render an RFC 3339 timestamp as a fixed, locale-independent string.
/// Malformed input yields `Unknown date` rather than an error.
#[must_use]
pub fn to_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map_or_else(|_| "Unknown date".to_string(), |dt| format_datetime(&dt))
}

/// Fixed rendering of an already-parsed timestamp, normalised to UTC.
#[must_use]
pub fn format_datetime(value: &DateTime<FixedOffset>) -> String {
    value
        .with_timezone(&Utc)
        .format("%Y-%m-%d %H:%M UTC")
        .to_string()
}

/// Naive pluralisation used by count labels.
#[must_use]
pub fn pluralize(word: &str, count: u64) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Zero-padded nine-digit rendering of a local content id.
#[must_use]
pub fn padded_id(id: u64) -> String {
    format!("{id:09}")
}
