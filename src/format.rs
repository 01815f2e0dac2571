//! Display formatting helpers for the chat-style transcript.
//!
//! Timestamps follow messaging-app conventions: today shows only the time,
//! recent days show the weekday, older dates spell out the month. Metric
//! counts compact to `1.2K` / `1.5M` style. All times are rendered in UTC,
//! matching the timestamps the API returns.

use chrono::{DateTime, Datelike, Utc};

/// Formats a tweet timestamp for chat-style display, relative to `now`.
///
/// - Today: `10:30 AM`
/// - Yesterday: `Yesterday 10:30 AM`
/// - Within a week: `Monday 10:30 AM`
/// - Same year: `Jan 15, 10:30 AM`
/// - Older: `Jan 15, 2024 10:30 AM`
pub fn chat_timestamp(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let time = date.format("%-I:%M %p");

    let days_ago = (now.date_naive() - date.date_naive()).num_days();
    if days_ago <= 0 {
        return format!("{}", time);
    }
    if days_ago == 1 {
        return format!("Yesterday {}", time);
    }
    if days_ago < 7 {
        return format!("{} {}", date.format("%A"), time);
    }
    if date.year() == now.year() {
        return format!("{} {}", date.format("%b %-d,"), time);
    }
    format!("{} {}", date.format("%b %-d, %Y"), time)
}

/// Formats a tweet timestamp relative to the current wall clock.
pub fn chat_timestamp_now(date: DateTime<Utc>) -> String {
    chat_timestamp(date, Utc::now())
}

/// Formats an engagement metric for display.
///
/// Examples: `999` -> `"999"`, `1234` -> `"1.2K"`, `1500000` -> `"1.5M"`.
pub fn format_metric(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let (value, suffix) = if count < 1_000_000 {
        (count as f64 / 1_000.0, "K")
    } else {
        (count as f64 / 1_000_000.0, "M")
    };
    let formatted = format!("{:.1}", value);
    let formatted = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{}{}", formatted, suffix)
}
