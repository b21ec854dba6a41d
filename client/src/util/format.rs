//! Display formatting for times and dates shown in the UI.
//!
//! Inputs come straight from API payloads and may be missing, so every helper
//! takes `Option<&str>` and returns an empty string for nothing to show.
//! Input that does not look like the expected shape is returned unchanged.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `"08:30"` or `"08:30:45"` -> `"08:30h"`.
pub fn format_vreme(vreme: Option<&str>) -> String {
    let Some(vreme) = vreme.filter(|v| !v.is_empty()) else {
        return String::new();
    };
    let mut parts = vreme.split(':');
    match (parts.next(), parts.next()) {
        (Some(hours), Some(minutes)) => format!("{hours}:{minutes}h"),
        _ => vreme.to_owned(),
    }
}

/// `"2024-03-05"` (optionally followed by a time) -> `"05.03.2024."`.
pub fn format_datum(datum: Option<&str>) -> String {
    let Some(datum) = datum.filter(|d| !d.is_empty()) else {
        return String::new();
    };
    let date = datum.split(['T', ' ']).next().unwrap_or(datum);
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [year, month, day] if is_digits(year, 4) && is_digits(month, 2) && is_digits(day, 2) => {
            format!("{day}.{month}.{year}.")
        }
        _ => datum.to_owned(),
    }
}

/// `"08:30"`, `"10:00"` -> `"08:30h - 10:00h"`. A missing side is dropped.
pub fn format_vreme_range(from: Option<&str>, to: Option<&str>) -> String {
    let from = format_vreme(from);
    let to = format_vreme(to);
    match (from.is_empty(), to.is_empty()) {
        (false, false) => format!("{from} - {to}"),
        (false, true) => from,
        (true, false) => to,
        (true, true) => String::new(),
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}
