// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Submit handling for the new-run and post-score forms.
//!
//! Turns raw form input into store inputs: trims text, applies defaults,
//! resolves location presets and weekend dates, and picks the score title.
//! Checks are presence-only; everything else is free text.

use crate::db::Snapshot;
use crate::models::{NewRun, NewScore, STANDALONE_RUN_ID};
use crate::time_utils::next_weekday;
use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

/// Distance categories offered by both forms.
pub const DISTANCES: [&str; 5] = ["5K", "10K", "Half Marathon", "Full Marathon", "Other"];

/// Title used when a linked run id no longer resolves.
pub const DEFAULT_LINKED_TITLE: &str = "Weekend Run";

const DEFAULT_TIME: &str = "7:00 AM";

/// A selectable meeting spot. Coordinates are decorative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LocationPreset {
    pub label: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// Location presets. The last entry is the custom-location slot.
pub const LOCATIONS: [LocationPreset; 5] = [
    LocationPreset {
        label: "Riverside Park, NYC",
        lat: 40.8016,
        lng: -73.9704,
    },
    LocationPreset {
        label: "Central Park, NYC",
        lat: 40.7851,
        lng: -73.9683,
    },
    LocationPreset {
        label: "Brooklyn Bridge Park",
        lat: 40.7024,
        lng: -73.9971,
    },
    LocationPreset {
        label: "Prospect Park, Brooklyn",
        lat: 40.6602,
        lng: -73.9688,
    },
    LocationPreset {
        label: "Custom Location",
        lat: 40.7128,
        lng: -74.006,
    },
];

const CUSTOM_LOCATION_INDEX: usize = LOCATIONS.len() - 1;

/// Which upcoming weekend day a new run is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum RunDay {
    #[default]
    Saturday,
    Sunday,
}

impl RunDay {
    pub fn weekday(self) -> Weekday {
        match self {
            RunDay::Saturday => Weekday::Sat,
            RunDay::Sunday => Weekday::Sun,
        }
    }

    /// Date of the next such day strictly after `now`.
    pub fn next_date(self, now: DateTime<Utc>) -> DateTime<Utc> {
        next_weekday(now, self.weekday())
    }
}

/// New-run form as submitted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewRunForm {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    pub day: RunDay,
    #[serde(default = "default_time")]
    pub time: String,
    #[serde(default = "default_distance")]
    pub distance: String,
    #[serde(default)]
    pub location_index: usize,
    #[serde(default)]
    pub custom_location: String,
    #[serde(default)]
    pub notes: String,
}

impl NewRunForm {
    /// Resolve into a store input, dated relative to `now`.
    pub fn into_new_run(self, now: DateTime<Utc>) -> Result<NewRun, FormError> {
        self.validate()?;

        let preset = LOCATIONS
            .get(self.location_index)
            .ok_or(FormError::UnknownLocation(self.location_index))?;

        let custom = self.custom_location.trim();
        let location = if self.location_index == CUSTOM_LOCATION_INDEX && !custom.is_empty() {
            custom.to_string()
        } else {
            preset.label.to_string()
        };

        Ok(NewRun {
            title: self.title.trim().to_string(),
            date: self.day.next_date(now),
            time: self.time,
            location,
            distance: self.distance,
            notes: self.notes.trim().to_string(),
            lat: preset.lat,
            lng: preset.lng,
        })
    }
}

/// Post-score form as submitted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostScoreForm {
    #[validate(custom(function = "not_blank"))]
    pub finish_time: String,
    /// Run to link to; [`STANDALONE_RUN_ID`] for none
    #[serde(default = "default_run_id")]
    pub run_id: String,
    /// Only used for standalone scores
    #[serde(default)]
    pub run_title: String,
    #[serde(default = "default_distance")]
    pub distance: String,
    #[serde(default)]
    pub notes: String,
}

impl PostScoreForm {
    pub fn is_standalone(&self) -> bool {
        self.run_id == STANDALONE_RUN_ID
    }

    /// Resolve into a store input.
    ///
    /// Linked scores copy the run's title as it is right now. A linked id
    /// that doesn't resolve still posts, under [`DEFAULT_LINKED_TITLE`].
    pub fn into_new_score(self, snapshot: &Snapshot) -> Result<NewScore, FormError> {
        self.validate()?;

        let run_title = if self.is_standalone() {
            let title = self.run_title.trim();
            if title.is_empty() {
                return Err(FormError::MissingStandaloneTitle);
            }
            title.to_string()
        } else {
            snapshot
                .run(&self.run_id)
                .map(|r| r.title.clone())
                .unwrap_or_else(|| DEFAULT_LINKED_TITLE.to_string())
        };

        Ok(NewScore {
            run_id: self.run_id,
            run_title,
            time: self.finish_time.trim().to_string(),
            distance: self.distance,
            notes: self.notes.trim().to_string(),
        })
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn default_time() -> String {
    DEFAULT_TIME.to_string()
}

fn default_distance() -> String {
    DISTANCES[0].to_string()
}

fn default_run_id() -> String {
    STANDALONE_RUN_ID.to_string()
}

/// Errors from form submission.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Missing required field: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("Unknown location index: {0}")]
    UnknownLocation(usize),

    #[error("A title is required for scores not linked to a run")]
    MissingStandaloneTitle,
}
