// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Moderation rules: who may approve, reject and delete photos.

use crate::error::{AppError, Result};
use crate::models::{Photo, User};

/// Fail unless `user` is an administrator.
pub fn ensure_admin(user: &User) -> Result<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Only administrators can do this".to_string(),
        ))
    }
}

/// Admins may delete any photo, owners their own.
pub fn authorize_delete(viewer: &User, photo: &Photo) -> Result<()> {
    if viewer.is_admin() || photo.is_owned_by(&viewer.id) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You can only delete your own photos".to_string(),
        ))
    }
}

/// Rejection only applies to photos still in the queue.
pub fn ensure_pending(photo: &Photo) -> Result<()> {
    if photo.pending {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Photo {} is not pending",
            photo.id
        )))
    }
}

/// Approve a queued photo. Approving an already-approved photo is a no-op.
pub fn approve(photo: &mut Photo) -> bool {
    std::mem::replace(&mut photo.pending, false)
}
