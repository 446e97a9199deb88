// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Scheduled group run model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Runner;

/// A scheduled group run event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Run {
    /// Generated at creation time
    pub id: String,
    pub title: String,
    /// Calendar date of the event
    pub date: DateTime<Utc>,
    /// Free-text start time (e.g. "7:00 AM")
    pub time: String,
    /// Free-text location label
    pub location: String,
    /// Free-text distance category (e.g. "5K")
    pub distance: String,
    pub notes: String,
    pub lat: f64,
    pub lng: f64,
    /// Creator of the run; never changes
    pub organizer: Runner,
    /// Everyone attending, unique by runner id
    pub signups: Vec<Runner>,
}

impl Run {
    /// Whether `runner_id` is in the signup list.
    pub fn has_signup(&self, runner_id: &str) -> bool {
        self.signups.iter().any(|r| r.id == runner_id)
    }
}

/// Input for creating a run: every field except `id`, `organizer` and `signups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRun {
    pub title: String,
    pub date: DateTime<Utc>,
    pub time: String,
    pub location: String,
    pub distance: String,
    pub notes: String,
    pub lat: f64,
    pub lng: f64,
}

impl NewRun {
    /// Build the stored run. The organizer is always the first signup.
    pub(crate) fn into_run(self, id: String, organizer: Runner) -> Run {
        Run {
            id,
            title: self.title,
            date: self.date,
            time: self.time,
            location: self.location,
            distance: self.distance,
            notes: self.notes,
            lat: self.lat,
            lng: self.lng,
            signups: vec![organizer.clone()],
            organizer,
        }
    }
}
