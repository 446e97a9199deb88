// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory state for runs and scores.

pub mod ids;
pub mod store;

pub use store::{RunsStore, SignupChange, SignupToggle, Snapshot};

/// Id prefixes per collection.
pub mod collections {
    pub const RUNS: &str = "run";
    pub const SCORES: &str = "score";
}
