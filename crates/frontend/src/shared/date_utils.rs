//! Utilities for date and time formatting

use chrono::{DateTime, Utc};

/// Format an optional timestamp as "YYYY-MM-DD HH:MM:SS", "-" when absent
pub fn format_timestamp(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Format a duration in seconds as "1h 2m 3s", dropping leading zero units
pub fn format_duration(seconds: Option<i64>) -> String {
    let Some(total) = seconds else {
        return "-".to_string();
    };
    let total = total.max(0);
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{}h {}m {}s", h, m, s)
    } else if m > 0 {
        format!("{}m {}s", m, s)
    } else {
        format!("{}s", s)
    }
}
