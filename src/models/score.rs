// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Self-reported finish result model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Runner;

/// Run id used by the score form for results not linked to any run.
///
/// Any id that does not resolve to a stored run is treated as standalone;
/// this is just the one the form sends.
pub const STANDALONE_RUN_ID: &str = "free";

/// A self-reported result, optionally linked to a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Score {
    /// Generated at creation time
    pub id: String,
    /// Linked run id, or anything that doesn't resolve for standalone efforts
    pub run_id: String,
    /// Title captured at post time; not re-synced with the run
    pub run_title: String,
    pub runner: Runner,
    /// Free-text finish time (e.g. "28:34")
    pub time: String,
    pub distance: String,
    pub notes: String,
    pub posted_at: DateTime<Utc>,
}

/// Input for posting a score: every field except `id`, `runner` and `postedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScore {
    pub run_id: String,
    pub run_title: String,
    pub time: String,
    pub distance: String,
    pub notes: String,
}

impl NewScore {
    pub(crate) fn into_score(self, id: String, runner: Runner, posted_at: DateTime<Utc>) -> Score {
        Score {
            id,
            run_id: self.run_id,
            run_title: self.run_title,
            runner,
            time: self.time,
            distance: self.distance,
            notes: self.notes,
            posted_at,
        }
    }
}
