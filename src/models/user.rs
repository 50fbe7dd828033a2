//! User profile model for storage and API.

use crate::period::MonthPeriod;
use serde::{Deserialize, Serialize};

/// Permission level stored on the profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// User profile stored in Firestore (`users/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identity-provider user ID (the document ID, not stored as a field)
    #[serde(alias = "_firestore_id", default, skip_serializing)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// When the profile was created (RFC3339)
    #[serde(default)]
    pub created_at: String,
    /// Avatar URL, empty when unset
    #[serde(rename = "photoURL", default)]
    pub photo_url: String,
    /// Votes cast during `votes_period`
    #[serde(default)]
    pub votes_this_month: u32,
    /// Photos voted for during `votes_period`
    #[serde(default)]
    pub voted_photos: Vec<String>,
    /// Photos currently owned by this user
    #[serde(default)]
    pub photos_uploaded_base64: u32,
    /// Period key the vote counters belong to
    #[serde(default)]
    pub votes_period: Option<String>,
}

impl User {
    /// A fresh profile with zeroed counters.
    pub fn new(id: &str, name: &str, email: &str, role: Role, created_at: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            created_at: created_at.to_string(),
            photo_url: String::new(),
            votes_this_month: 0,
            voted_photos: Vec::new(),
            photos_uploaded_base64: 0,
            votes_period: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name shown next to the user's photos: the profile name, else the email.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Votes cast in `period`. Counters left over from an earlier month count as zero.
    pub fn votes_in_period(&self, period: MonthPeriod) -> u32 {
        if self.votes_period.as_deref() == Some(period.key().as_str()) {
            self.votes_this_month
        } else {
            0
        }
    }

    /// Reset the vote counters if they belong to a month other than `period`.
    pub fn roll_vote_period(&mut self, period: MonthPeriod) {
        let key = period.key();
        if self.votes_period.as_deref() != Some(key.as_str()) {
            self.votes_this_month = 0;
            self.voted_photos.clear();
            self.votes_period = Some(key);
        }
    }
}
