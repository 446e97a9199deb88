// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

/// Coarse relative age: "3d ago", "5h ago", "12m ago" or "just now".
///
/// Timestamps in the future count as "just now".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let days = elapsed.num_days();
    let hours = elapsed.num_hours();
    let mins = elapsed.num_minutes();

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if mins > 0 {
        format!("{}m ago", mins)
    } else {
        "just now".to_string()
    }
}

/// List-card date label, e.g. "Saturday, Mar 7".
pub fn format_run_date_short(date: DateTime<Utc>) -> String {
    date.format("%A, %b %-d").to_string()
}

/// Detail-view date label, e.g. "Saturday, March 7, 2026".
pub fn format_run_date_long(date: DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Next occurrence of `target` strictly after `now`, keeping the time of day.
///
/// If today is already `target`, this is a week from now.
pub fn next_weekday(now: DateTime<Utc>, target: Weekday) -> DateTime<Utc> {
    let today = now.weekday().num_days_from_sunday() as i64;
    let wanted = target.num_days_from_sunday() as i64;
    let mut diff = wanted - today;
    if diff <= 0 {
        diff += 7;
    }
    now + Duration::days(diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = at("2026-03-10T12:00:00Z");

        assert_eq!(time_ago(now, now), "just now");
        assert_eq!(time_ago(now - Duration::seconds(59), now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(12), now), "12m ago");
        assert_eq!(time_ago(now - Duration::minutes(185), now), "3h ago");
        assert_eq!(time_ago(now - Duration::hours(47), now), "1d ago");
        assert_eq!(time_ago(now + Duration::hours(1), now), "just now");
    }

    #[test]
    fn test_next_weekday_skips_today() {
        // 2026-03-07 is a Saturday
        let saturday = at("2026-03-07T08:00:00Z");
        assert_eq!(next_weekday(saturday, Weekday::Sat), at("2026-03-14T08:00:00Z"));
        assert_eq!(next_weekday(saturday, Weekday::Sun), at("2026-03-08T08:00:00Z"));

        let wednesday = at("2026-03-04T08:00:00Z");
        assert_eq!(next_weekday(wednesday, Weekday::Sat), at("2026-03-07T08:00:00Z"));
        assert_eq!(next_weekday(wednesday, Weekday::Sun), at("2026-03-08T08:00:00Z"));
    }

    #[test]
    fn test_run_date_labels() {
        let date = at("2026-03-07T08:00:00Z");
        assert_eq!(format_run_date_short(date), "Saturday, Mar 7");
        assert_eq!(format_run_date_long(date), "Saturday, March 7, 2026");
    }
}
