// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store behavior through the public API: ordering, signup pairing,
//! unknown ids and standalone scores.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use weekend_runs::clock::{Clock, FixedClock, SystemClock};
use weekend_runs::db::{RunsStore, SignupChange, SignupToggle};
use weekend_runs::models::{NewRun, NewScore, Runner};

fn me() -> Runner {
    Runner::new("me", "You", "🏃")
}

fn loop_run(date: DateTime<Utc>) -> NewRun {
    NewRun {
        title: "Loop".to_string(),
        date,
        time: "7:00 AM".to_string(),
        location: "Park".to_string(),
        distance: "5K".to_string(),
        notes: String::new(),
        lat: 0.0,
        lng: 0.0,
    }
}

fn free_run_score() -> NewScore {
    NewScore {
        run_id: "nonexistent".to_string(),
        run_title: "Free Run".to_string(),
        distance: "5K".to_string(),
        time: "25:00".to_string(),
        notes: String::new(),
    }
}

#[test]
fn test_create_then_leave_own_run() {
    let store = RunsStore::new(me(), Arc::new(SystemClock));

    store.add_run(loop_run(Utc::now()));

    let runs = store.runs();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].title, "Loop");
    assert_eq!(runs[0].signups.len(), 1);
    assert_eq!(runs[0].organizer.id, store.current_user().id);
    assert!(store.is_signed_up(&runs[0].id));

    // The organizer is the sole signup; toggling leaves.
    assert_eq!(
        store.toggle_signup(&runs[0].id),
        Some(SignupToggle {
            change: SignupChange::Left,
            signup_count: 0,
        })
    );
    assert_eq!(store.run(&runs[0].id).unwrap().signups.len(), 0);
    assert!(!store.is_signed_up(&runs[0].id));

    // And toggling again joins back at the end.
    let rejoined = store.toggle_signup(&runs[0].id).unwrap();
    assert_eq!(rejoined.change, SignupChange::Joined);
    assert_eq!(rejoined.signup_count, 1);
    assert!(store.is_signed_up(&runs[0].id));
}

#[test]
fn test_new_runs_go_first() {
    let store = RunsStore::new(me(), Arc::new(SystemClock));
    let now = Utc::now();

    let ids: Vec<String> = (0..5).map(|_| store.add_run(loop_run(now)).id).collect();

    let stored: Vec<String> = store.runs().into_iter().map(|r| r.id).collect();
    let expected: Vec<String> = ids.into_iter().rev().collect();
    assert_eq!(stored, expected);
}

#[test]
fn test_rapid_creations_get_unique_ids() {
    // A frozen clock puts every creation in the same millisecond.
    let store = RunsStore::new(me(), Arc::new(FixedClock::new(Utc::now())));

    for _ in 0..50 {
        store.add_run(loop_run(Utc::now()));
        store.add_score(free_run_score());
    }

    let mut run_ids: Vec<String> = store.runs().into_iter().map(|r| r.id).collect();
    run_ids.sort();
    run_ids.dedup();
    assert_eq!(run_ids.len(), 50);

    let mut score_ids: Vec<String> = store.scores().into_iter().map(|s| s.id).collect();
    score_ids.sort();
    score_ids.dedup();
    assert_eq!(score_ids.len(), 50);
}

#[test]
fn test_unknown_run_leaves_runs_unchanged() {
    let store = RunsStore::new(me(), Arc::new(SystemClock));
    store.add_run(loop_run(Utc::now()));
    store.add_run(loop_run(Utc::now()));
    let before = store.runs();

    assert_eq!(store.toggle_signup("nonexistent"), None);

    assert_eq!(store.runs(), before);
    assert!(!store.is_signed_up("nonexistent"));
}

#[test]
fn test_standalone_score_accepted() {
    let clock = FixedClock::new(Utc::now());
    let store = RunsStore::new(me(), Arc::new(clock.clone()));
    store.add_score(free_run_score());
    let before = clock.now();
    clock.advance(Duration::seconds(30));

    let score = store.add_score(free_run_score());

    let scores = store.scores();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].id, score.id);
    assert_eq!(scores[0].run_id, "nonexistent");
    assert_eq!(scores[0].runner.id, "me");
    assert!(scores[0].posted_at >= before);
}

#[test]
fn test_scores_for_run_returns_linked_scores() {
    let store = RunsStore::new(me(), Arc::new(SystemClock));
    let run = store.add_run(loop_run(Utc::now()));

    let score = store.add_score(NewScore {
        run_id: run.id.clone(),
        run_title: run.title.clone(),
        ..free_run_score()
    });

    assert_eq!(store.scores_for_run(&run.id), vec![score.clone()]);
    assert_eq!(score.run_title, "Loop");
}
