//! Display formatting for numbers, lengths and timestamps.

use chrono::{DateTime, Utc};

/// `1234567` -> `"1,234,567"`
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `1234` -> `"1.2K"`, `5_600_000` -> `"5.6M"`
pub fn format_compact(n: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000, "K"), (1_000_000, "M"), (1_000_000_000, "B")];

    let Some(mut unit) = UNITS.iter().rposition(|&(scale, _)| n >= scale) else {
        return n.to_string();
    };

    // 999.95K rounds to 1000K, which reads as 1M
    let mut value = n as f64 / UNITS[unit].0 as f64;
    if (value * 10.0).round() >= 10_000.0 && unit + 1 < UNITS.len() {
        unit += 1;
        value = n as f64 / UNITS[unit].0 as f64;
    }

    let text = format!("{:.1}", value);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}{}", text, UNITS[unit].1)
}

/// Track length: `m:ss`, or `h:mm:ss` past an hour.
pub fn format_length(seconds: u64) -> String {
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Total play time, e.g. `"3d 4h 12m"`. Zero components are skipped.
pub fn format_play_time(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;

    let parts: Vec<String> = [(days, "d"), (hours, "h"), (minutes, "m")]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{}{}", value, unit))
        .collect();

    if parts.is_empty() {
        "0m".to_string()
    } else {
        parts.join(" ")
    }
}

pub fn format_accuracy(accuracy: f64) -> String {
    format!("{:.2}%", accuracy)
}

pub fn format_date(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d").to_string()
}

/// Coarse relative time such as `"3 days ago"`.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let seconds = delta.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let (value, unit) = if seconds < 3600 {
        (delta.num_minutes(), "minute")
    } else if seconds < 86_400 {
        (delta.num_hours(), "hour")
    } else if delta.num_days() < 30 {
        (delta.num_days(), "day")
    } else if delta.num_days() < 365 {
        (delta.num_days() / 30, "month")
    } else {
        (delta.num_days() / 365, "year")
    };

    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}
