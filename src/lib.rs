// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Weekend Runs: organize informal group runs and share finish times
//!
//! This crate provides an in-memory store of scheduled runs and posted
//! scores for a single local runner, and the JSON API the app's screens
//! read from and write to.

pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use clock::Clock;
use config::Config;
use db::RunsStore;
use std::sync::Arc;

/// Shared application state.
///
/// Built once at startup and handed to the router; there is no global store.
pub struct AppState {
    pub config: Config,
    pub store: RunsStore,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Build state from config, seeding the store if configured.
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
        let store = services::build_store(&config, clock.clone());
        Self {
            config,
            store,
            clock,
        }
    }
}
