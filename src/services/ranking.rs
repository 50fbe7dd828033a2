//! Feed assembly and vote ranking.

use crate::models::{Photo, User};
use serde::Serialize;
use std::cmp::Ordering;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Order by votes (most first), then oldest upload first, then ID.
fn by_votes(a: &Photo, b: &Photo) -> Ordering {
    b.vote_count
        .cmp(&a.vote_count)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Build the month's feed for `viewer`.
///
/// Admins see every photo including pending ones; everyone else only sees
/// approved photos.
pub fn assemble_feed(mut photos: Vec<Photo>, viewer: &User) -> Vec<Photo> {
    if !viewer.is_admin() {
        photos.retain(|p| !p.pending);
    }
    photos.sort_by(by_votes);
    photos
}

/// Ranking row without the image payload.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct RankingEntry {
    /// 1-based position
    pub position: u32,
    pub id: String,
    pub title: String,
    pub user_name: String,
    pub vote_count: u32,
    pub pending: bool,
}

/// Rank all photos (pending included) by vote count.
pub fn rank(mut photos: Vec<Photo>) -> Vec<RankingEntry> {
    photos.sort_by(by_votes);
    photos
        .into_iter()
        .enumerate()
        .map(|(i, p)| RankingEntry {
            position: i as u32 + 1,
            user_name: if p.user_name.is_empty() {
                "Unknown user".to_string()
            } else {
                p.user_name
            },
            id: p.id,
            title: p.title,
            vote_count: p.vote_count,
            pending: p.pending,
        })
        .collect()
}
