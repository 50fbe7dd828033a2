// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Administrator routes: moderation queue, theme, photo limit, ranking.
//!
//! These sit behind the same JWT middleware as the user API; each handler
//! additionally requires the caller's stored role to be admin.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::photo::PhotoView;
use crate::models::{AppSettings, MonthlyTheme, User};
use crate::period::{now_rfc3339, MonthPeriod};
use crate::routes::api::{load_theme, resolve_viewer, ThemeResponse};
use crate::services::{moderation, ranking, sweep};
use crate::services::{RankingEntry, SweepReport};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Upper bound accepted for the per-user photo limit.
const MAX_PHOTO_LIMIT: u32 = 1000;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/admin/pending", get(list_pending))
        .route("/api/admin/photos/{id}/approve", post(approve_photo))
        .route("/api/admin/photos/{id}/reject", post(reject_photo))
        .route("/api/admin/theme", put(set_theme))
        .route("/api/admin/settings", get(get_settings).put(update_settings))
        .route("/api/admin/ranking", get(get_ranking))
        .route("/api/admin/stats", get(get_stats))
}

/// Resolve the caller and require the admin role.
async fn require_admin(state: &AppState, user: &AuthUser) -> Result<User> {
    let viewer = resolve_viewer(state, user).await?;
    moderation::ensure_admin(&viewer)?;
    Ok(viewer)
}

// ─── Moderation Queue ────────────────────────────────────────

/// Photos awaiting approval, oldest first.
async fn list_pending(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<PhotoView>>> {
    let admin = require_admin(&state, &user).await?;
    let photos = state.db.list_pending_photos().await?;

    Ok(Json(
        photos
            .into_iter()
            .map(|p| PhotoView::from_photo(p, &admin.id))
            .collect(),
    ))
}

async fn approve_photo(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(photo_id): Path<String>,
) -> Result<Json<PhotoView>> {
    let admin = require_admin(&state, &user).await?;

    let photo = state
        .db
        .modify_photo(&photo_id, |photo| {
            if !moderation::approve(photo) {
                tracing::debug!(photo_id = %photo.id, "Photo was already approved");
            }
            Ok(())
        })
        .await?;

    tracing::info!(admin_id = %admin.id, photo_id = %photo.id, "Photo approved");
    Ok(Json(PhotoView::from_photo(photo, &admin.id)))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct RejectResponse {
    pub id: String,
    pub rejected: bool,
}

/// Reject a pending photo, deleting it.
async fn reject_photo(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(photo_id): Path<String>,
) -> Result<Json<RejectResponse>> {
    let admin = require_admin(&state, &user).await?;

    let photo = state
        .db
        .delete_photo(&photo_id, moderation::ensure_pending)
        .await?;

    tracing::info!(admin_id = %admin.id, photo_id = %photo.id, "Photo rejected");
    Ok(Json(RejectResponse {
        id: photo.id,
        rejected: true,
    }))
}

// ─── Theme ───────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct SetThemeRequest {
    #[validate(length(min = 1, max = 100, message = "Theme must be 1 to 100 characters"))]
    theme: String,
}

/// Set this month's theme.
async fn set_theme(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<SetThemeRequest>,
) -> Result<Json<ThemeResponse>> {
    body.validate()?;
    if body.theme.trim().is_empty() {
        return Err(AppError::BadRequest("Theme cannot be blank".to_string()));
    }

    let admin = require_admin(&state, &user).await?;
    let period = MonthPeriod::current();

    let theme = MonthlyTheme::new(&body.theme, period, &now_rfc3339());
    state.db.set_theme(&theme).await?;

    tracing::info!(admin_id = %admin.id, period = %period, theme = %theme.theme, "Theme set");
    Ok(Json(load_theme(&state, period).await?))
}

// ─── Settings & Limit Sweep ──────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct SettingsResponse {
    pub photo_limit: u32,
}

async fn get_settings(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<SettingsResponse>> {
    require_admin(&state, &user).await?;
    let settings = state.db.get_settings().await?;
    Ok(Json(SettingsResponse {
        photo_limit: settings.photo_limit(),
    }))
}

#[derive(Deserialize, Validate)]
struct UpdateSettingsRequest {
    #[validate(range(max = MAX_PHOTO_LIMIT, message = "Photo limit is too large"))]
    photo_limit: u32,
}

/// Store a new photo limit and delete photos that exceed it.
///
/// Each user keeps their newest `photo_limit` photos.
async fn update_settings(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<UpdateSettingsRequest>,
) -> Result<Json<SweepReport>> {
    body.validate()?;
    let admin = require_admin(&state, &user).await?;

    state
        .db
        .set_settings(&AppSettings::with_limit(body.photo_limit))
        .await?;

    let stubs = state.db.list_photo_stubs().await?;
    let plan = sweep::plan_sweep(&stubs, body.photo_limit);
    if !plan.is_empty() {
        state.db.apply_sweep(&plan).await?;
    }

    let report = SweepReport::from_plan(body.photo_limit, &plan);
    tracing::info!(
        admin_id = %admin.id,
        photo_limit = report.photo_limit,
        users_affected = report.users_affected,
        photos_deleted = report.photos_deleted,
        "Photo limit updated"
    );

    Ok(Json(report))
}

// ─── Ranking & Stats ─────────────────────────────────────────

#[derive(Deserialize)]
struct RankingQuery {
    /// Period key such as "2024-3"; defaults to the current month
    period: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct RankingResponse {
    pub period: String,
    pub entries: Vec<RankingEntry>,
}

async fn get_ranking(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<RankingResponse>> {
    let period = match query.period.as_deref() {
        Some(key) => MonthPeriod::parse_key(key)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid period: {}", key)))?,
        None => MonthPeriod::current(),
    };

    require_admin(&state, &user).await?;
    let photos = state.db.list_photos_for_period(period).await?;

    Ok(Json(RankingResponse {
        period: period.key(),
        entries: ranking::rank(photos),
    }))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct StatsResponse {
    pub approved: u32,
    pub pending: u32,
    pub total: u32,
}

async fn get_stats(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<StatsResponse>> {
    require_admin(&state, &user).await?;
    let counts = state.db.count_photos_by_state().await?;

    Ok(Json(StatsResponse {
        approved: counts.approved,
        pending: counts.pending,
        total: counts.approved + counts.pending,
    }))
}
