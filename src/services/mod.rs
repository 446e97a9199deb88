// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - form handling and seed data.

pub mod forms;
pub mod seed;

pub use forms::{FormError, NewRunForm, PostScoreForm};
pub use seed::build_store;
