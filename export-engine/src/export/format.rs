//! Display formatting shared by the sheet builders.

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::ExportConfig;

/// `-` for anything blank.
pub fn dash_if_empty<S: AsRef<str>>(value: Option<S>) -> String {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => v.as_ref().to_string(),
        _ => "-".to_string(),
    }
}

/// Format an amount in whole currency units: `Rp 1.234.567`.
pub fn format_currency(amount: i64, cfg: &ExportConfig) -> String {
    format!("{} {}", cfg.currency_prefix, group_thousands(amount, cfg.thousands_separator))
}

/// Group digits in threes from the right.
pub(crate) fn group_thousands(amount: i64, separator: char) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    if amount < 0 { format!("-{grouped}") } else { grouped }
}

/// Timestamp column value, `-` when absent.
pub fn format_datetime(value: Option<NaiveDateTime>, cfg: &ExportConfig) -> String {
    match value {
        Some(dt) => dt.format(&cfg.datetime_format).to_string(),
        None => "-".to_string(),
    }
}

/// Date column value, `-` when absent.
pub fn format_date(value: Option<NaiveDate>, cfg: &ExportConfig) -> String {
    match value {
        Some(d) => d.format(&cfg.date_format).to_string(),
        None => "-".to_string(),
    }
}
