// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sample runners, runs and scores for a fresh process.

use crate::clock::Clock;
use crate::config::Config;
use crate::db::RunsStore;
use crate::models::{Run, Runner, Score};
use crate::time_utils::next_weekday;
use chrono::{DateTime, Duration, Utc, Weekday};
use std::sync::Arc;

pub fn sample_runners() -> [Runner; 4] {
    [
        Runner::new("1", "Alex Park", "🧑"),
        Runner::new("2", "Jordan Lee", "👩"),
        Runner::new("3", "Sam Rivera", "🧑‍🦱"),
        Runner::new("4", "Casey Morgan", "👨"),
    ]
}

/// Two upcoming runs: next Saturday and the Sunday after it.
pub fn sample_runs(now: DateTime<Utc>) -> Vec<Run> {
    let [alex, jordan, sam, casey] = sample_runners();
    let saturday = next_weekday(now, Weekday::Sat);
    let sunday = saturday + Duration::days(1);

    vec![
        Run {
            id: "run1".to_string(),
            title: "Riverside Morning Run".to_string(),
            date: saturday,
            time: "7:00 AM".to_string(),
            location: "Riverside Park, NYC".to_string(),
            distance: "5K".to_string(),
            notes: "Easy pace along the river. Meet at the main fountain entrance. Bring water!"
                .to_string(),
            lat: 40.8016,
            lng: -73.9704,
            organizer: alex.clone(),
            signups: vec![alex, jordan],
        },
        Run {
            id: "run2".to_string(),
            title: "Central Park Long Run".to_string(),
            date: sunday,
            time: "8:30 AM".to_string(),
            location: "Central Park, NYC".to_string(),
            distance: "10K".to_string(),
            notes: "Loop around the park. We'll run the full 6-mile loop. Intermediate pace."
                .to_string(),
            lat: 40.7851,
            lng: -73.9683,
            organizer: sam.clone(),
            signups: vec![sam, casey],
        },
    ]
}

/// Three scores from past runs that are not in the run list.
pub fn sample_scores(now: DateTime<Utc>) -> Vec<Score> {
    let [alex, jordan, _, casey] = sample_runners();
    let hours_ago = |h: i64| now - Duration::hours(h);

    vec![
        Score {
            id: "score1".to_string(),
            run_id: "run-past-1".to_string(),
            run_title: "Last Saturday Run".to_string(),
            runner: alex,
            time: "24:12".to_string(),
            distance: "5K".to_string(),
            notes: "Felt great, new PR!".to_string(),
            posted_at: hours_ago(48),
        },
        Score {
            id: "score2".to_string(),
            run_id: "run-past-1".to_string(),
            run_title: "Last Saturday Run".to_string(),
            runner: jordan,
            time: "27:45".to_string(),
            distance: "5K".to_string(),
            notes: "Tough morning but finished strong".to_string(),
            posted_at: now - Duration::minutes(45 * 60 + 36), // 1.9 days
        },
        Score {
            id: "score3".to_string(),
            run_id: "run-past-2".to_string(),
            run_title: "Sunday Long Run".to_string(),
            runner: casey,
            time: "52:08".to_string(),
            distance: "10K".to_string(),
            notes: "Beautiful morning!".to_string(),
            posted_at: hours_ago(24),
        },
    ]
}

/// Build the store for this process, seeded if configured.
pub fn build_store(config: &Config, clock: Arc<dyn Clock>) -> RunsStore {
    let current_user = config.current_user.clone();
    if !config.seed_sample_data {
        return RunsStore::new(current_user, clock);
    }

    let now = clock.now();
    let runs = sample_runs(now);
    let scores = sample_scores(now);
    tracing::info!(
        runs = runs.len(),
        scores = scores.len(),
        "Seeding store with sample data"
    );
    RunsStore::with_data(current_user, clock, runs, scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn friday() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-06T18:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_seeded_store_contents() {
        let config = Config {
            seed_sample_data: true,
            ..Config::test_default()
        };
        let store = build_store(&config, Arc::new(FixedClock::new(friday())));

        let runs = store.runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].id, "run1");
        assert_eq!(runs[0].date.format("%Y-%m-%d").to_string(), "2026-03-07");
        assert_eq!(runs[1].date.format("%Y-%m-%d").to_string(), "2026-03-08");
        assert!(!store.is_signed_up("run1"));

        let scores = store.scores();
        assert_eq!(scores.len(), 3);
        assert!(scores[0].posted_at < scores[1].posted_at);
        assert!(scores[1].posted_at < scores[2].posted_at);
    }

    #[test]
    fn test_unseeded_store_is_empty() {
        let store = build_store(&Config::test_default(), Arc::new(FixedClock::new(friday())));
        assert!(store.runs().is_empty());
        assert!(store.scores().is_empty());
    }
}
