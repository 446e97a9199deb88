// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run list, run detail, run creation and signup toggling.

use crate::error::{AppError, Result};
use crate::models::{Run, Runner};
use crate::routes::scores::ScoreView;
use crate::services::NewRunForm;
use crate::time_utils::{format_run_date_long, format_run_date_short};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/runs", get(list_runs).post(create_run))
        .route("/api/runs/{id}", get(get_run))
        .route("/api/runs/{id}/signup", post(toggle_signup))
}

// ─── Run List ────────────────────────────────────────────────

/// One card in the run list.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RunSummary {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub date_label: String,
    pub time: String,
    pub location: String,
    pub distance: String,
    pub organizer: Runner,
    pub signup_count: usize,
    pub signed_up: bool,
}

impl RunSummary {
    fn new(run: &Run, current_user: &Runner) -> Self {
        Self {
            id: run.id.clone(),
            title: run.title.clone(),
            date: run.date,
            date_label: format_run_date_short(run.date),
            time: run.time.clone(),
            location: run.location.clone(),
            distance: run.distance.clone(),
            organizer: run.organizer.clone(),
            signup_count: run.signups.len(),
            signed_up: run.has_signup(&current_user.id),
        }
    }
}

/// All runs, newest first.
async fn list_runs(State(state): State<Arc<AppState>>) -> Json<Vec<RunSummary>> {
    let snapshot = state.store.snapshot();
    let current_user = state.store.current_user();

    Json(
        snapshot
            .runs()
            .iter()
            .map(|run| RunSummary::new(run, current_user))
            .collect(),
    )
}

// ─── Run Detail ──────────────────────────────────────────────

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RunDetail {
    #[serde(flatten)]
    pub run: Run,
    pub date_label: String,
    pub signed_up: bool,
    pub is_organizer: bool,
    /// Scores posted against this run, newest first
    pub scores: Vec<ScoreView>,
}

async fn get_run(
    State(state): State<Arc<AppState>>,
    Path(run_id): Path<String>,
) -> Result<Json<RunDetail>> {
    // Everything below comes from one snapshot so the pieces agree.
    let snapshot = state.store.snapshot();
    let current_user = state.store.current_user();

    let run = snapshot
        .run(&run_id)
        .ok_or_else(|| AppError::NotFound(format!("Run {} not found", run_id)))?;

    let now = state.clock.now();
    let scores = snapshot
        .scores_for_run(&run_id)
        .map(|s| ScoreView::new(s, now))
        .collect();

    Ok(Json(RunDetail {
        date_label: format_run_date_long(run.date),
        signed_up: run.has_signup(&current_user.id),
        is_organizer: run.organizer.id == current_user.id,
        run: run.clone(),
        scores,
    }))
}

// ─── Create Run ──────────────────────────────────────────────

async fn create_run(
    State(state): State<Arc<AppState>>,
    Json(form): Json<NewRunForm>,
) -> Result<(StatusCode, Json<Run>)> {
    let new_run = form.into_new_run(state.clock.now())?;
    let run = state.store.add_run(new_run);

    tracing::info!(run_id = %run.id, title = %run.title, date = %run.date, "Run posted");

    Ok((StatusCode::CREATED, Json(run)))
}

// ─── Signup ──────────────────────────────────────────────────

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SignupResponse {
    pub signed_up: bool,
    pub signup_count: usize,
}

/// Join or leave a run.
///
/// The store ignores unknown ids; here that becomes a 404 so the client can
/// drop a stale detail view.
async fn toggle_signup(
    State(state): State<Arc<AppState>>,
    Path(run_id): Path<String>,
) -> Result<Json<SignupResponse>> {
    let toggle = state
        .store
        .toggle_signup(&run_id)
        .ok_or_else(|| AppError::NotFound(format!("Run {} not found", run_id)))?;

    tracing::info!(
        run_id = %run_id,
        change = ?toggle.change,
        signup_count = toggle.signup_count,
        "Signup toggled"
    );

    Ok(Json(SignupResponse {
        signed_up: toggle.change.is_signed_up(),
        signup_count: toggle.signup_count,
    }))
}
