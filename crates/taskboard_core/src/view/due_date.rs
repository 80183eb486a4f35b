//! Due date display formatting.

use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid iso date regex"));

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Renders `YYYY-MM-DD` as `Mon D, YYYY`.
///
/// Input that is not a valid calendar date is returned trimmed and
/// otherwise unchanged, so the header always shows something.
pub fn format_due_date(raw: &str) -> String {
    let trimmed = raw.trim();
    match parse_iso_date(trimmed) {
        Some((year, month, day)) => {
            format!("{} {day}, {year}", MONTH_ABBREVIATIONS[(month - 1) as usize])
        }
        None => trimmed.to_string(),
    }
}

fn parse_iso_date(value: &str) -> Option<(u32, u32, u32)> {
    let captures = ISO_DATE_RE.captures(value)?;
    let year = captures[1].parse::<u32>().ok()?;
    let month = captures[2].parse::<u32>().ok()?;
    let day = captures[3].parse::<u32>().ok()?;
    if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
        return None;
    }
    Some((year, month, day))
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
