// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Photo Rally: a monthly photo contest backend
//!
//! This crate provides the backend API for uploading monthly contest photos,
//! voting on them, and letting administrators curate the submissions.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod period;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
