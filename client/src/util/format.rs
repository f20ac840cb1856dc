//! Display formatting for money and dates (es-CO conventions).
//!
//! Currency uses `.` for thousands and `,` for decimals, at most two decimal
//! digits with trailing zeros dropped: `1000000.5 -> "$1.000.000,5"`.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate};

pub const MISSING: &str = "N/A";

/// Format an optional amount as Colombian pesos.
#[must_use]
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_amount(v),
        _ => MISSING.to_owned(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_amount(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u128;
    let negative = value < 0.0 && cents > 0;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('$');
    out.push_str(&whole);
    if fraction > 0 {
        let digits = format!("{fraction:02}");
        out.push(',');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Parse an ISO date or timestamp from the backend.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    // Timestamps without an offset, e.g. `2024-03-05T10:00:00`.
    raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// `2024-03-05` -> `05/03/2024`. Unparseable input is shown as-is.
#[must_use]
pub fn format_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => MISSING.to_owned(),
        Some(r) => parse_date(r).map_or_else(|| r.to_owned(), |d| d.format("%d/%m/%Y").to_string()),
    }
}

/// Today's date in ISO form, used as the default for date inputs.
#[must_use]
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
