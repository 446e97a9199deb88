// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Score feed and score posting.

use crate::error::Result;
use crate::models::Score;
use crate::services::PostScoreForm;
use crate::time_utils::time_ago;
use crate::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/scores", get(list_scores).post(post_score))
}

/// A score plus its relative age ("2d ago").
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ScoreView {
    #[serde(flatten)]
    pub score: Score,
    pub posted_label: String,
}

impl ScoreView {
    pub fn new(score: &Score, now: DateTime<Utc>) -> Self {
        Self {
            posted_label: time_ago(score.posted_at, now),
            score: score.clone(),
        }
    }
}

async fn list_scores(State(state): State<Arc<AppState>>) -> Json<Vec<ScoreView>> {
    let now = state.clock.now();
    Json(
        state
            .store
            .snapshot()
            .scores()
            .iter()
            .map(|s| ScoreView::new(s, now))
            .collect(),
    )
}

async fn post_score(
    State(state): State<Arc<AppState>>,
    Json(form): Json<PostScoreForm>,
) -> Result<(StatusCode, Json<ScoreView>)> {
    // The title is resolved against the snapshot current at submit time.
    let new_score = form.into_new_score(&state.store.snapshot())?;
    let score = state.store.add_score(new_score);

    tracing::info!(
        score_id = %score.id,
        run_id = %score.run_id,
        time = %score.time,
        "Score posted"
    );

    Ok((
        StatusCode::CREATED,
        Json(ScoreView::new(&score, state.clock.now())),
    ))
}
