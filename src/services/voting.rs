// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Vote ledger rules.
//!
//! A vote is recorded in two places: the photo's `votes` list (with its
//! denormalized `vote_count`) and the voter's monthly counters.

use crate::config::MAX_VOTES_PER_MONTH;
use crate::error::{AppError, Result};
use crate::models::{Photo, User};
use crate::period::MonthPeriod;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub enum VoteAction {
    Added,
    Removed,
}

/// Result of a vote toggle, returned to the client.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct VoteOutcome {
    pub photo_id: String,
    pub action: VoteAction,
    /// Whether the viewer's vote is now recorded on the photo
    pub voted: bool,
    pub vote_count: u32,
    /// Votes the viewer may still cast this month
    pub votes_remaining: u32,
}

/// Toggle `viewer`'s vote on `photo` during `period`.
///
/// Removing a vote is always allowed; adding one requires the viewer to be
/// under the monthly cap. Nothing is modified when an error is returned.
pub fn toggle_vote(viewer: &mut User, photo: &mut Photo, period: MonthPeriod) -> Result<VoteOutcome> {
    if photo.is_owned_by(&viewer.id) {
        return Err(AppError::Forbidden(
            "You cannot vote for your own photo".to_string(),
        ));
    }

    if photo.pending {
        return Err(AppError::BadRequest(
            "Photo is awaiting approval".to_string(),
        ));
    }

    let already_voted = photo.has_vote_from(&viewer.id);
    if !already_voted && viewer.votes_in_period(period) >= MAX_VOTES_PER_MONTH {
        return Err(AppError::LimitReached(format!(
            "You can only vote for {} photos per month",
            MAX_VOTES_PER_MONTH
        )));
    }

    viewer.roll_vote_period(period);

    let action = if already_voted {
        photo.votes.retain(|v| v != &viewer.id);
        // Only votes cast this period count against this period's cap.
        let cast_this_period = viewer.voted_photos.contains(&photo.id);
        viewer.voted_photos.retain(|p| p != &photo.id);
        if cast_this_period {
            viewer.votes_this_month = viewer.votes_this_month.saturating_sub(1);
        }
        VoteAction::Removed
    } else {
        photo.votes.push(viewer.id.clone());
        if !viewer.voted_photos.contains(&photo.id) {
            viewer.voted_photos.push(photo.id.clone());
        }
        viewer.votes_this_month += 1;
        VoteAction::Added
    };

    // Recompute rather than increment so a previously drifted count heals.
    photo.vote_count = photo.votes.len() as u32;

    Ok(VoteOutcome {
        photo_id: photo.id.clone(),
        action,
        voted: action == VoteAction::Added,
        vote_count: photo.vote_count,
        votes_remaining: MAX_VOTES_PER_MONTH.saturating_sub(viewer.votes_this_month),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn period() -> MonthPeriod {
        MonthPeriod::new(2024, 3).unwrap()
    }

    fn make_user(id: &str) -> User {
        User::new(id, id, &format!("{}@example.com", id), Role::User, "2024-01-01T00:00:00.000Z")
    }

    fn make_photo(id: &str, owner: &str) -> Photo {
        Photo {
            id: id.to_string(),
            user_id: owner.to_string(),
            user_name: owner.to_string(),
            title: format!("Photo {}", id),
            description: String::new(),
            image_base64: String::new(),
            month: 3,
            year: 2024,
            created_at: "2024-03-01T10:00:00.000Z".to_string(),
            vote_count: 0,
            votes: vec![],
            pending: false,
        }
    }

    #[test]
    fn test_vote_adds_to_ledger_and_counter() {
        let mut viewer = make_user("voter");
        let mut photo = make_photo("p1", "owner");

        let outcome = toggle_vote(&mut viewer, &mut photo, period()).unwrap();

        assert_eq!(outcome.action, VoteAction::Added);
        assert!(outcome.voted);
        assert_eq!(photo.votes, vec!["voter"]);
        assert_eq!(photo.vote_count, 1);
        assert_eq!(viewer.votes_this_month, 1);
        assert_eq!(viewer.voted_photos, vec!["p1"]);
        assert_eq!(outcome.votes_remaining, 2);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut viewer = make_user("voter");
        viewer.votes_period = Some(period().key());
        let mut photo = make_photo("p1", "owner");
        photo.votes = vec!["someone".to_string()];
        photo.vote_count = 1;

        toggle_vote(&mut viewer, &mut photo, period()).unwrap();
        let outcome = toggle_vote(&mut viewer, &mut photo, period()).unwrap();

        assert_eq!(outcome.action, VoteAction::Removed);
        assert!(!outcome.voted);
        assert_eq!(photo.votes, vec!["someone"]);
        assert_eq!(photo.vote_count, 1);
        assert_eq!(viewer.votes_this_month, 0);
        assert!(viewer.voted_photos.is_empty());
    }

    #[test]
    fn test_self_vote_rejected() {
        let mut viewer = make_user("owner");
        let mut photo = make_photo("p1", "owner");

        let err = toggle_vote(&mut viewer, &mut photo, period()).unwrap_err();

        assert!(matches!(err, AppError::Forbidden(_)));
        assert!(photo.votes.is_empty());
        assert_eq!(viewer.votes_this_month, 0);
    }

    #[test]
    fn test_monthly_cap_blocks_fourth_vote() {
        let mut viewer = make_user("voter");
        let mut photos: Vec<Photo> = (0..4)
            .map(|i| make_photo(&format!("p{}", i), "owner"))
            .collect();

        for photo in photos.iter_mut().take(3) {
            toggle_vote(&mut viewer, photo, period()).unwrap();
        }
        assert_eq!(viewer.votes_this_month, MAX_VOTES_PER_MONTH);

        let err = toggle_vote(&mut viewer, &mut photos[3], period()).unwrap_err();
        assert!(matches!(err, AppError::LimitReached(_)));
        assert!(photos[3].votes.is_empty());
        assert_eq!(viewer.votes_this_month, MAX_VOTES_PER_MONTH);
    }

    #[test]
    fn test_vote_can_be_withdrawn_at_cap() {
        let mut viewer = make_user("voter");
        let mut photos: Vec<Photo> = (0..3)
            .map(|i| make_photo(&format!("p{}", i), "owner"))
            .collect();
        for photo in photos.iter_mut() {
            toggle_vote(&mut viewer, photo, period()).unwrap();
        }

        let outcome = toggle_vote(&mut viewer, &mut photos[0], period()).unwrap();

        assert_eq!(outcome.action, VoteAction::Removed);
        assert_eq!(viewer.votes_this_month, 2);
        assert_eq!(outcome.votes_remaining, 1);
    }

    #[test]
    fn test_new_month_resets_cap() {
        let mut viewer = make_user("voter");
        viewer.votes_this_month = 3;
        viewer.voted_photos = vec!["a".into(), "b".into(), "c".into()];
        viewer.votes_period = Some("2024-2".to_string());
        let mut photo = make_photo("p1", "owner");

        let outcome = toggle_vote(&mut viewer, &mut photo, period()).unwrap();

        assert_eq!(outcome.action, VoteAction::Added);
        assert_eq!(viewer.votes_this_month, 1);
        assert_eq!(viewer.voted_photos, vec!["p1"]);
        assert_eq!(viewer.votes_period.as_deref(), Some("2024-3"));
    }

    #[test]
    fn test_withdrawing_old_vote_never_goes_negative() {
        let mut viewer = make_user("voter");
        viewer.votes_period = Some("2024-2".to_string());
        let mut photo = make_photo("p1", "owner");
        photo.votes = vec!["voter".to_string()];
        photo.vote_count = 1;

        toggle_vote(&mut viewer, &mut photo, period()).unwrap();

        assert_eq!(viewer.votes_this_month, 0);
        assert_eq!(photo.vote_count, 0);
    }

    #[test]
    fn test_withdrawing_old_vote_frees_no_slot() {
        let mut viewer = make_user("voter");
        let mut old_photos: Vec<Photo> = (0..3)
            .map(|i| make_photo(&format!("feb{}", i), "owner"))
            .collect();
        let february = MonthPeriod::new(2024, 2).unwrap();
        for photo in old_photos.iter_mut() {
            toggle_vote(&mut viewer, photo, february).unwrap();
        }

        let mut new_photos: Vec<Photo> = (0..6)
            .map(|i| make_photo(&format!("mar{}", i), "owner"))
            .collect();
        for photo in new_photos.iter_mut().take(3) {
            toggle_vote(&mut viewer, photo, period()).unwrap();
        }

        // Withdrawing February votes must not make room for more March votes.
        for (old, new) in old_photos.iter_mut().zip(new_photos.iter_mut().skip(3)) {
            let outcome = toggle_vote(&mut viewer, old, period()).unwrap();
            assert_eq!(outcome.action, VoteAction::Removed);
            assert_eq!(outcome.votes_remaining, 0);

            let err = toggle_vote(&mut viewer, new, period()).unwrap_err();
            assert!(matches!(err, AppError::LimitReached(_)));
        }

        let march_votes = new_photos.iter().filter(|p| p.has_vote_from("voter")).count();
        assert_eq!(march_votes, 3);
        assert_eq!(viewer.votes_this_month, 3);
        assert!(old_photos.iter().all(|p| p.votes.is_empty()));
    }

    #[test]
    fn test_pending_photo_cannot_be_voted() {
        let mut viewer = make_user("voter");
        let mut photo = make_photo("p1", "owner");
        photo.pending = true;

        let err = toggle_vote(&mut viewer, &mut photo, period()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_drifted_count_is_recomputed() {
        let mut viewer = make_user("voter");
        let mut photo = make_photo("p1", "owner");
        photo.votes = vec!["a".to_string(), "b".to_string()];
        photo.vote_count = 7;

        let outcome = toggle_vote(&mut viewer, &mut photo, period()).unwrap();
        assert_eq!(outcome.vote_count, 3);
        assert_eq!(photo.vote_count as usize, photo.votes.len());
    }
}
