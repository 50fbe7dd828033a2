// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Contest photo model for storage and API.

use crate::period::MonthPeriod;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Photo submission stored in Firestore (`photos_base64/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Document ID (not stored as a field)
    #[serde(alias = "_firestore_id", default, skip_serializing)]
    pub id: String,
    /// Owner's user ID
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Owner's display name at upload time
    #[serde(default)]
    pub user_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Inline base64 image payload (no data URL prefix)
    pub image_base64: String,
    /// Contest month (1-based)
    pub month: u32,
    pub year: i32,
    /// Upload timestamp (RFC3339)
    pub created_at: String,
    /// Denormalized `votes.len()`
    #[serde(default)]
    pub vote_count: u32,
    /// IDs of users who voted for this photo
    #[serde(default)]
    pub votes: Vec<String>,
    /// Awaiting admin approval
    #[serde(default)]
    pub pending: bool,
}

impl Photo {
    pub fn period(&self) -> Option<MonthPeriod> {
        MonthPeriod::new(self.year, self.month)
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    pub fn has_vote_from(&self, user_id: &str) -> bool {
        self.votes.iter().any(|v| v == user_id)
    }
}

/// Photo as returned by the feed and "my photos" endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct PhotoView {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub description: String,
    pub image_base64: String,
    pub month: u32,
    pub year: i32,
    pub created_at: String,
    pub vote_count: u32,
    pub pending: bool,
    /// Whether the requesting user has voted for this photo
    pub voted_by_me: bool,
}

impl PhotoView {
    pub fn from_photo(photo: Photo, viewer_id: &str) -> Self {
        let voted_by_me = photo.has_vote_from(viewer_id);
        Self {
            id: photo.id,
            user_id: photo.user_id,
            user_name: photo.user_name,
            title: photo.title,
            description: photo.description,
            image_base64: photo.image_base64,
            month: photo.month,
            year: photo.year,
            created_at: photo.created_at,
            vote_count: photo.vote_count,
            pending: photo.pending,
            voted_by_me,
        }
    }
}

/// Projection of a photo used by the limit sweep.
///
/// Only the owner and upload time are read, so the sweep never downloads
/// image payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoStub {
    #[serde(alias = "_firestore_id", default, skip_serializing)]
    pub id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(default)]
    pub created_at: String,
}

/// Projection of a photo used for moderation counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoFlags {
    #[serde(default)]
    pub pending: bool,
}
