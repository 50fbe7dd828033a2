// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for signed-in users.

use crate::config::MAX_VOTES_PER_MONTH;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::photo::PhotoView;
use crate::models::theme::DEFAULT_THEME;
use crate::models::{Role, User};
use crate::period::{now_rfc3339, MonthPeriod};
use crate::services::{moderation, ranking, submission, voting};
use crate::services::{UploadRequest, VoteOutcome};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/session", post(start_session))
        .route("/api/me", get(get_me).put(update_me).delete(delete_me))
        .route("/api/theme", get(get_theme))
        .route("/api/photos", get(get_feed).post(upload_photo))
        .route("/api/photos/mine", get(get_my_photos))
        .route("/api/photos/{id}", delete(delete_photo))
        .route("/api/photos/{id}/vote", post(toggle_vote))
}

/// Load the caller's profile, creating it the first time they are seen.
pub(crate) async fn resolve_viewer(state: &AppState, user: &AuthUser) -> Result<User> {
    let role = if state.config.is_bootstrap_admin(&user.user_id) {
        Role::Admin
    } else {
        Role::User
    };

    state
        .db
        .get_or_create_user(
            &user.user_id,
            user.name.as_deref().unwrap_or_default(),
            user.email.as_deref().unwrap_or_default(),
            role,
        )
        .await
}

// ─── Session & Profile ───────────────────────────────────────

/// Current user response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub photo_url: String,
    pub created_at: String,
    /// Photos currently owned
    pub photos_uploaded: u32,
    pub votes_this_month: u32,
    pub votes_remaining: u32,
}

impl UserResponse {
    fn from_user(user: User, period: MonthPeriod) -> Self {
        let votes = user.votes_in_period(period);
        Self {
            role: match user.role {
                Role::Admin => "admin".to_string(),
                Role::User => "user".to_string(),
            },
            id: user.id,
            name: user.name,
            email: user.email,
            photo_url: user.photo_url,
            created_at: user.created_at,
            photos_uploaded: user.photos_uploaded_base64,
            votes_this_month: votes,
            votes_remaining: MAX_VOTES_PER_MONTH.saturating_sub(votes),
        }
    }
}

/// Resolve the signed-in user's profile and role.
///
/// Called by the app right after sign-in; creates the profile on first use.
async fn start_session(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserResponse>> {
    let profile = resolve_viewer(&state, &user).await?;
    tracing::info!(user_id = %profile.id, role = ?profile.role, "Session started");
    Ok(Json(UserResponse::from_user(profile, MonthPeriod::current())))
}

/// Get current user profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserResponse>> {
    let profile = resolve_viewer(&state, &user).await?;
    Ok(Json(UserResponse::from_user(profile, MonthPeriod::current())))
}

#[derive(Deserialize, Validate)]
struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be 1 to 50 characters"))]
    name: String,
}

/// Update the display name.
async fn update_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>> {
    body.validate()?;
    let name = body.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Name cannot be blank".to_string()));
    }

    let viewer = resolve_viewer(&state, &user).await?;
    let profile = state
        .db
        .modify_user(&viewer.id, |profile| {
            profile.name = name.to_string();
            Ok(())
        })
        .await?;

    tracing::info!(user_id = %profile.id, "Profile updated");
    Ok(Json(UserResponse::from_user(profile, MonthPeriod::current())))
}

/// Response for account deletion.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct DeleteAccountResponse {
    pub success: bool,
    pub documents_deleted: u32,
}

/// Delete the caller's profile and photos.
///
/// Admin accounts are managed out of band and cannot delete themselves here.
async fn delete_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<DeleteAccountResponse>> {
    if let Some(profile) = state.db.get_user(&user.user_id).await? {
        if profile.is_admin() {
            return Err(AppError::Forbidden(
                "Administrator accounts cannot be deleted from the app".to_string(),
            ));
        }
    }

    tracing::info!(user_id = %user.user_id, "User-initiated account deletion");
    let deleted = state.db.delete_user_data(&user.user_id).await?;

    Ok(Json(DeleteAccountResponse {
        success: true,
        documents_deleted: deleted as u32,
    }))
}

// ─── Theme ───────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct ThemeResponse {
    /// Period key, e.g. "2024-3"
    pub period: String,
    pub month: u32,
    pub year: i32,
    pub theme: String,
    /// True when no theme was set and the default is reported
    pub is_default: bool,
}

pub(crate) async fn load_theme(state: &AppState, period: MonthPeriod) -> Result<ThemeResponse> {
    let theme = state.db.get_theme(period).await?;
    let (theme, is_default) = match theme {
        Some(t) if !t.theme.trim().is_empty() => (t.theme, false),
        _ => (DEFAULT_THEME.to_string(), true),
    };

    Ok(ThemeResponse {
        period: period.key(),
        month: period.month,
        year: period.year,
        theme,
        is_default,
    })
}

/// Get this month's theme.
async fn get_theme(State(state): State<Arc<AppState>>) -> Result<Json<ThemeResponse>> {
    Ok(Json(load_theme(&state, MonthPeriod::current()).await?))
}

// ─── Photos ──────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct FeedResponse {
    pub theme: ThemeResponse,
    /// Sorted by vote count, most votes first
    pub photos: Vec<PhotoView>,
    pub votes_remaining: u32,
}

/// This month's photos, as visible to the caller.
async fn get_feed(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<FeedResponse>> {
    let period = MonthPeriod::current();
    let viewer = resolve_viewer(&state, &user).await?;

    let photos = state.db.list_photos_for_period(period).await?;
    let photos = ranking::assemble_feed(photos, &viewer);

    tracing::debug!(
        user_id = %viewer.id,
        period = %period,
        count = photos.len(),
        "Assembled feed"
    );

    let theme = load_theme(&state, period).await?;
    let votes_remaining = MAX_VOTES_PER_MONTH.saturating_sub(viewer.votes_in_period(period));

    Ok(Json(FeedResponse {
        theme,
        photos: photos
            .into_iter()
            .map(|p| PhotoView::from_photo(p, &viewer.id))
            .collect(),
        votes_remaining,
    }))
}

/// Submit a photo for this month.
async fn upload_photo(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<UploadRequest>,
) -> Result<(StatusCode, Json<PhotoView>)> {
    // Reject malformed uploads before any database work.
    let upload = submission::validate_upload(&body, state.config.max_image_bytes)?;

    let viewer = resolve_viewer(&state, &user).await?;
    let period = MonthPeriod::current();
    let now = now_rfc3339();

    let photo = state
        .db
        .create_photo(&viewer.id, |uploader, settings, photo_id| {
            submission::accept_upload(uploader, settings, upload, photo_id, period, &now)
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PhotoView::from_photo(photo, &viewer.id)),
    ))
}

/// All photos owned by the caller, newest first.
async fn get_my_photos(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<PhotoView>>> {
    let photos = state.db.list_photos_for_user(&user.user_id).await?;
    Ok(Json(
        photos
            .into_iter()
            .map(|p| PhotoView::from_photo(p, &user.user_id))
            .collect(),
    ))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct DeletePhotoResponse {
    pub id: String,
    pub deleted: bool,
}

/// Delete a photo (owner or admin).
async fn delete_photo(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(photo_id): Path<String>,
) -> Result<Json<DeletePhotoResponse>> {
    let viewer = resolve_viewer(&state, &user).await?;

    let photo = state
        .db
        .delete_photo(&photo_id, |photo| moderation::authorize_delete(&viewer, photo))
        .await?;

    Ok(Json(DeletePhotoResponse {
        id: photo.id,
        deleted: true,
    }))
}

/// Toggle the caller's vote on a photo.
async fn toggle_vote(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(photo_id): Path<String>,
) -> Result<Json<VoteOutcome>> {
    // Make sure the voter has a profile to hold the counters.
    let viewer = resolve_viewer(&state, &user).await?;
    let period = MonthPeriod::current();

    let outcome = state
        .db
        .modify_photo_and_user(&photo_id, &viewer.id, |photo, voter| {
            voting::toggle_vote(voter, photo, period)
        })
        .await?;

    tracing::info!(
        user_id = %viewer.id,
        photo_id = %photo_id,
        action = ?outcome.action,
        vote_count = outcome.vote_count,
        "Vote toggled"
    );

    Ok(Json(outcome))
}
