//! Relative time formatting for notification and history lists.

use chrono::{DateTime, Utc};

/// Format `timestamp` relative to `now`: "Just now", "5m ago", "3h ago", "Yesterday".
#[must_use]
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    if seconds < 60 {
        return "Just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    "Yesterday".to_string()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn buckets() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now - Duration::seconds(59), now), "Just now");
        assert_eq!(format_time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_time_ago(now - Duration::minutes(61), now), "1h ago");
        assert_eq!(format_time_ago(now - Duration::hours(23), now), "23h ago");
        assert_eq!(format_time_ago(now - Duration::days(3), now), "Yesterday");
    }

    #[test]
    fn future_timestamps_are_just_now() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now + Duration::minutes(2), now), "Just now");
    }
}
