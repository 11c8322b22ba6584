use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Human-readable age of a timestamp, bucketed the way the admin dashboard
/// displays recent applications. Anything at least a week old falls back to
/// an absolute date like "05 Mar 2025".
pub fn relative_time(dt: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    let seconds = (reference - dt).num_seconds().max(0);
    if seconds < 3600 {
        let minutes = (seconds / 60).max(1);
        return format!("{} minute{} ago", minutes, if minutes != 1 { "s" } else { "" });
    }
    if seconds < 86400 {
        let hours = seconds / 3600;
        return format!("{} hour{} ago", hours, if hours != 1 { "s" } else { "" });
    }
    let days = seconds / 86400;
    if days == 1 {
        return "Yesterday".to_string();
    }
    if days < 7 {
        return format!("{} days ago", days);
    }
    dt.format("%d %b %Y").to_string()
}

/// "3m 5s" style durations for the analytics panels; sub-minute values drop
/// the minutes part entirely.
pub fn format_duration(seconds: i64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn minutes_bucket() {
        let now = reference();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(
            relative_time(now - Duration::minutes(45), now),
            "45 minutes ago"
        );
    }

    #[test]
    fn hours_bucket() {
        let now = reference();
        assert_eq!(relative_time(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(relative_time(now - Duration::hours(23), now), "23 hours ago");
    }

    #[test]
    fn days_bucket() {
        let now = reference();
        assert_eq!(relative_time(now - Duration::days(1), now), "Yesterday");
        assert_eq!(relative_time(now - Duration::days(3), now), "3 days ago");
    }

    #[test]
    fn old_dates_are_absolute() {
        let now = reference();
        assert_eq!(relative_time(now - Duration::days(10), now), "05 Jul 2025");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        let now = reference();
        assert_eq!(relative_time(now + Duration::minutes(5), now), "1 minute ago");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(185), "3m 5s");
        assert_eq!(format_duration(59), "59s");
        assert_eq!(format_duration(60), "1m 0s");
        assert_eq!(format_duration(0), "0s");
    }
}
