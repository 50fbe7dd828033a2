// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Upload gate: validates a photo submission and builds the stored record.

use crate::error::{AppError, Result};
use crate::models::{AppSettings, Photo, User};
use crate::period::MonthPeriod;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/photos`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadRequest {
    #[validate(length(max = 100, message = "Title must be at most 100 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    /// Base64 image, optionally as a `data:image/...;base64,` URL
    #[serde(default)]
    pub image_base64: String,
}

/// An upload that passed request validation.
#[derive(Debug, Clone)]
pub struct ValidatedUpload {
    pub title: String,
    pub description: String,
    pub image_base64: String,
}

/// Check the request body without touching the database.
pub fn validate_upload(request: &UploadRequest, max_image_bytes: usize) -> Result<ValidatedUpload> {
    request.validate()?;

    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::BadRequest("A title is required".to_string()));
    }

    let image_base64 = normalize_image(&request.image_base64, max_image_bytes)?;

    Ok(ValidatedUpload {
        title: title.to_string(),
        description: request
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        image_base64,
    })
}

/// Strip any data URL prefix and check the payload decodes within the size cap.
pub fn normalize_image(raw: &str, max_image_bytes: usize) -> Result<String> {
    let raw = raw.trim();
    let payload = match raw.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .map(|(_, data)| data)
            .ok_or_else(|| AppError::BadRequest("Image data URL must be base64".to_string()))?,
        None => raw,
    };

    if payload.is_empty() {
        return Err(AppError::BadRequest("An image is required".to_string()));
    }

    // Cheap upper bound before decoding: 4 base64 chars carry 3 bytes.
    if payload.len() / 4 * 3 > max_image_bytes + 3 {
        return Err(AppError::BadRequest(format!(
            "Image exceeds {} bytes",
            max_image_bytes
        )));
    }

    let decoded = STANDARD
        .decode(payload)
        .map_err(|_| AppError::BadRequest("Image is not valid base64".to_string()))?;

    if decoded.len() > max_image_bytes {
        return Err(AppError::BadRequest(format!(
            "Image exceeds {} bytes",
            max_image_bytes
        )));
    }

    Ok(payload.to_string())
}

/// Enforce the per-user photo limit.
pub fn check_upload_allowed(user: &User, settings: &AppSettings) -> Result<()> {
    let limit = settings.photo_limit();
    if user.photos_uploaded_base64 >= limit {
        return Err(AppError::LimitReached(format!(
            "You can upload at most {} photos",
            limit
        )));
    }
    Ok(())
}

/// Build the photo record and bump the uploader's counter.
///
/// Admin uploads skip the moderation queue.
pub fn accept_upload(
    user: &mut User,
    settings: &AppSettings,
    upload: ValidatedUpload,
    photo_id: &str,
    period: MonthPeriod,
    now: &str,
) -> Result<Photo> {
    check_upload_allowed(user, settings)?;

    user.photos_uploaded_base64 += 1;

    Ok(Photo {
        id: photo_id.to_string(),
        user_id: user.id.clone(),
        user_name: user.display_name().to_string(),
        title: upload.title,
        description: upload.description,
        image_base64: upload.image_base64,
        month: period.month,
        year: period.year,
        created_at: now.to_string(),
        vote_count: 0,
        votes: Vec::new(),
        pending: !user.is_admin(),
    })
}
