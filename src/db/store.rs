// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The runs/scores store.
//!
//! Single source of truth for everything the API shows. State lives only in
//! process memory. Readers take an immutable [`Snapshot`]; every mutation
//! builds a new snapshot and swaps it in, so a reader never sees a run
//! halfway through a signup toggle. Writers are serialized.

use crate::clock::Clock;
use crate::db::collections;
use crate::db::ids::IdGenerator;
use crate::models::{NewRun, NewScore, Run, Runner, Score};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Immutable view of both collections, newest first.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    runs: Arc<Vec<Run>>,
    scores: Arc<Vec<Score>>,
}

impl Snapshot {
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn run(&self, run_id: &str) -> Option<&Run> {
        self.runs.iter().find(|r| r.id == run_id)
    }

    /// Scores whose `run_id` matches, in posting order (newest first).
    pub fn scores_for_run<'a>(&'a self, run_id: &'a str) -> impl Iterator<Item = &'a Score> + 'a {
        self.scores.iter().filter(move |s| s.run_id == run_id)
    }
}

/// Outcome of a signup toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupChange {
    Joined,
    Left,
}

impl SignupChange {
    pub fn is_signed_up(self) -> bool {
        matches!(self, SignupChange::Joined)
    }
}

/// What a toggle did, as of the snapshot it published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupToggle {
    pub change: SignupChange,
    /// Signups on the run right after this toggle
    pub signup_count: usize,
}

struct Inner {
    current_user: Runner,
    clock: Arc<dyn Clock>,
    ids: IdGenerator,
    published: RwLock<Arc<Snapshot>>,
    /// Held for the whole read-modify-publish cycle of a mutation.
    write_lock: Mutex<()>,
}

/// Handle to the shared store. Clones refer to the same state.
#[derive(Clone)]
pub struct RunsStore {
    inner: Arc<Inner>,
}

impl RunsStore {
    /// Create an empty store acting on behalf of `current_user`.
    pub fn new(current_user: Runner, clock: Arc<dyn Clock>) -> Self {
        Self::with_data(current_user, clock, Vec::new(), Vec::new())
    }

    /// Create a store with initial collections (newest first).
    pub fn with_data(
        current_user: Runner,
        clock: Arc<dyn Clock>,
        runs: Vec<Run>,
        scores: Vec<Score>,
    ) -> Self {
        let snapshot = Snapshot {
            runs: Arc::new(runs),
            scores: Arc::new(scores),
        };
        Self {
            inner: Arc::new(Inner {
                current_user,
                clock,
                ids: IdGenerator::new(),
                published: RwLock::new(Arc::new(snapshot)),
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// The local actor. Constant for the lifetime of the store.
    pub fn current_user(&self) -> &Runner {
        &self.inner.current_user
    }

    /// Current snapshot. Later mutations do not affect it.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.inner
            .published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn runs(&self) -> Vec<Run> {
        self.snapshot().runs().to_vec()
    }

    pub fn scores(&self) -> Vec<Score> {
        self.snapshot().scores().to_vec()
    }

    pub fn run(&self, run_id: &str) -> Option<Run> {
        self.snapshot().run(run_id).cloned()
    }

    pub fn scores_for_run(&self, run_id: &str) -> Vec<Score> {
        self.snapshot().scores_for_run(run_id).cloned().collect()
    }

    /// Create a run organized by the current user and put it at the front.
    ///
    /// The organizer starts as the only signup. No validation happens here.
    pub fn add_run(&self, input: NewRun) -> Run {
        self.mutate(|current, inner| {
            let id = inner.ids.next_id(collections::RUNS, inner.clock.now());
            let run = input.into_run(id, inner.current_user.clone());

            let mut runs = Vec::with_capacity(current.runs.len() + 1);
            runs.push(run.clone());
            runs.extend(current.runs.iter().cloned());

            tracing::debug!(run_id = %run.id, title = %run.title, "Run created");

            let next = Snapshot {
                runs: Arc::new(runs),
                scores: current.scores.clone(),
            };
            (Some(next), run)
        })
    }

    /// Join or leave a run as the current user.
    ///
    /// Leaving removes the user wherever they are in the list; joining
    /// appends at the end. The organizer is not special-cased. Unknown ids
    /// are a silent no-op and return `None`.
    pub fn toggle_signup(&self, run_id: &str) -> Option<SignupToggle> {
        self.mutate(|current, inner| {
            let Some(index) = current.runs.iter().position(|r| r.id == run_id) else {
                tracing::debug!(run_id, "Signup toggle for unknown run ignored");
                return (None, None);
            };

            let user = &inner.current_user;
            let mut runs = current.runs.as_ref().clone();
            let run = &mut runs[index];

            let change = if run.has_signup(&user.id) {
                run.signups.retain(|r| r.id != user.id);
                SignupChange::Left
            } else {
                run.signups.push(user.clone());
                SignupChange::Joined
            };

            let toggle = SignupToggle {
                change,
                signup_count: run.signups.len(),
            };

            tracing::debug!(
                run_id,
                runner_id = %user.id,
                change = ?toggle.change,
                signups = toggle.signup_count,
                "Signup toggled"
            );

            let next = Snapshot {
                runs: Arc::new(runs),
                scores: current.scores.clone(),
            };
            (Some(next), Some(toggle))
        })
    }

    /// Post a score as the current user and put it at the front.
    ///
    /// `run_id` is stored as given; it is not checked against `runs`.
    pub fn add_score(&self, input: NewScore) -> Score {
        self.mutate(|current, inner| {
            let now = inner.clock.now();
            let id = inner.ids.next_id(collections::SCORES, now);
            let score = input.into_score(id, inner.current_user.clone(), now);

            let mut scores = Vec::with_capacity(current.scores.len() + 1);
            scores.push(score.clone());
            scores.extend(current.scores.iter().cloned());

            tracing::debug!(
                score_id = %score.id,
                run_id = %score.run_id,
                time = %score.time,
                "Score posted"
            );

            let next = Snapshot {
                runs: current.runs.clone(),
                scores: Arc::new(scores),
            };
            (Some(next), score)
        })
    }

    /// Whether the current user is signed up for `run_id`. `false` for unknown runs.
    pub fn is_signed_up(&self, run_id: &str) -> bool {
        self.snapshot()
            .run(run_id)
            .is_some_and(|r| r.has_signup(&self.inner.current_user.id))
    }

    /// Run one serialized read-modify-publish cycle.
    ///
    /// `f` returns the snapshot to publish (if any) and the caller's result.
    fn mutate<T>(&self, f: impl FnOnce(&Snapshot, &Inner) -> (Option<Snapshot>, T)) -> T {
        let _guard = self
            .inner
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let current = self.snapshot();
        let (next, result) = f(&*current, &self.inner);

        if let Some(next) = next {
            *self
                .inner
                .published
                .write()
                .unwrap_or_else(PoisonError::into_inner) = Arc::new(next);
        }

        result
    }
}
