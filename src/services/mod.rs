// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - contest rules.

pub mod moderation;
pub mod ranking;
pub mod submission;
pub mod sweep;
pub mod voting;

pub use ranking::RankingEntry;
pub use submission::{UploadRequest, ValidatedUpload};
pub use sweep::{SweepPlan, SweepReport};
pub use voting::{VoteAction, VoteOutcome};
