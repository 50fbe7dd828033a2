// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Photo limit enforcement.
//!
//! When an administrator sets a new per-user photo limit, every user who owns
//! more photos than the limit loses their oldest excess photos. Planning is
//! a pure function over photo stubs so it can be tested and benchmarked
//! without Firestore; `FirestoreDb::apply_sweep` performs the deletions.

use crate::models::photo::PhotoStub;
use serde::Serialize;
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Deletions needed to bring every user within the limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepPlan {
    /// Photo IDs to delete
    pub deletions: Vec<String>,
    /// Photos each affected user keeps after the sweep
    pub retained: BTreeMap<String, u32>,
}

impl SweepPlan {
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty()
    }
}

/// Summary returned to the admin after a limit change.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct SweepReport {
    pub photo_limit: u32,
    pub users_affected: u32,
    pub photos_deleted: u32,
}

impl SweepReport {
    pub fn from_plan(photo_limit: u32, plan: &SweepPlan) -> Self {
        Self {
            photo_limit,
            users_affected: plan.retained.len() as u32,
            photos_deleted: plan.deletions.len() as u32,
        }
    }
}

/// Compute which photos to delete so no user owns more than `limit`.
///
/// Each user's photos are ordered newest first by `created_at` (ties by ID
/// for a stable result) and everything past the first `limit` is deleted.
pub fn plan_sweep(photos: &[PhotoStub], limit: u32) -> SweepPlan {
    let mut by_user: BTreeMap<&str, Vec<&PhotoStub>> = BTreeMap::new();
    for photo in photos {
        by_user.entry(photo.user_id.as_str()).or_default().push(photo);
    }

    let limit = limit as usize;
    let mut plan = SweepPlan::default();

    for (user_id, mut owned) in by_user {
        if owned.len() <= limit {
            continue;
        }

        owned.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        plan.deletions
            .extend(owned[limit..].iter().map(|p| p.id.clone()));
        plan.retained.insert(user_id.to_string(), limit as u32);
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(id: &str, user: &str, created_at: &str) -> PhotoStub {
        PhotoStub {
            id: id.to_string(),
            user_id: user.to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_oldest_excess_photos_deleted() {
        // Inserted out of order to make sure the plan sorts by time.
        let photos = vec![
            stub("t3", "ana", "2024-03-03T00:00:00.000Z"),
            stub("t1", "ana", "2024-03-01T00:00:00.000Z"),
            stub("t5", "ana", "2024-03-05T00:00:00.000Z"),
            stub("t2", "ana", "2024-03-02T00:00:00.000Z"),
            stub("t4", "ana", "2024-03-04T00:00:00.000Z"),
        ];

        let plan = plan_sweep(&photos, 3);

        let mut deleted = plan.deletions.clone();
        deleted.sort();
        assert_eq!(deleted, vec!["t1", "t2"]);
        assert_eq!(plan.retained.get("ana"), Some(&3));
    }

    #[test]
    fn test_users_within_limit_untouched() {
        let photos = vec![
            stub("a1", "ana", "2024-03-01T00:00:00.000Z"),
            stub("b1", "ben", "2024-03-01T00:00:00.000Z"),
            stub("b2", "ben", "2024-03-02T00:00:00.000Z"),
        ];

        let plan = plan_sweep(&photos, 2);

        assert!(plan.is_empty());
        assert!(plan.retained.is_empty());
    }

    #[test]
    fn test_zero_limit_deletes_everything() {
        let photos = vec![
            stub("a1", "ana", "2024-03-01T00:00:00.000Z"),
            stub("b1", "ben", "2024-03-01T00:00:00.000Z"),
        ];

        let plan = plan_sweep(&photos, 0);

        assert_eq!(plan.deletions.len(), 2);
        assert_eq!(plan.retained.get("ana"), Some(&0));
        assert_eq!(plan.retained.get("ben"), Some(&0));
    }

    #[test]
    fn test_every_user_ends_within_limit() {
        let mut photos = Vec::new();
        for user in 0..5 {
            for i in 0..(user * 2) {
                photos.push(stub(
                    &format!("u{}-p{}", user, i),
                    &format!("u{}", user),
                    &format!("2024-03-{:02}T00:00:00.000Z", i + 1),
                ));
            }
        }

        let limit = 3;
        let plan = plan_sweep(&photos, limit);

        for user in 0..5 {
            let owner = format!("u{}", user);
            let kept = photos
                .iter()
                .filter(|p| p.user_id == owner && !plan.deletions.contains(&p.id))
                .count();
            assert!(kept <= limit as usize, "{} kept {}", owner, kept);
        }

        let report = SweepReport::from_plan(limit, &plan);
        // u2 has 4 photos, u3 has 6, u4 has 8
        assert_eq!(report.users_affected, 3);
        assert_eq!(report.photos_deleted, 1 + 3 + 5);
    }

    #[test]
    fn test_kept_photos_are_most_recent() {
        let photos = vec![
            stub("old", "ana", "2023-12-31T23:59:59.000Z"),
            stub("new", "ana", "2024-01-01T00:00:00.000Z"),
        ];

        let plan = plan_sweep(&photos, 1);
        assert_eq!(plan.deletions, vec!["old"]);
    }
}
