//! Display helpers shared by the list views.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Format millisatoshi amount for display.
pub(crate) fn format_msat(amount_msat: Option<u64>) -> String {
    match amount_msat {
        None => "-".to_string(),
        Some(msat) if msat % 1000 == 0 => format!("{} sats", msat / 1000),
        Some(msat) => format!("{} msats", msat),
    }
}

pub(crate) fn format_signed_msat(amount_msat: i64) -> String {
    if amount_msat < 0 {
        format!("-{}", format_msat(Some(amount_msat.unsigned_abs())))
    } else {
        format_msat(Some(amount_msat as u64))
    }
}

pub(crate) fn format_datetime(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub(crate) fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Value for an `<input type="date">`.
pub(crate) fn date_input_value(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Start of the day picked in a date input, or `None` when cleared.
pub(crate) fn parse_start_date(input: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()?;
    Some(date.and_time(NaiveTime::MIN).and_utc())
}

/// Last millisecond of the day picked in a date input, so the range
/// includes the whole end day.
pub(crate) fn parse_end_date(input: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()?;
    let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?;
    Some(date.and_time(end_of_day).and_utc())
}

/// Shortens long identifiers (hashes, pubkeys) to `head…tail`.
pub(crate) fn truncate_middle(value: &str, keep: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= keep * 2 + 1 {
        return value.to_string();
    }

    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{head}…{tail}")
}
