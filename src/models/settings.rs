//! Global contest settings (`app_settings/config`).

use crate::config::DEFAULT_PHOTO_LIMIT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Maximum photos a user may own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_limit: Option<u32>,
}

impl AppSettings {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            photo_limit: Some(limit),
        }
    }

    /// Configured limit, or the default when unset.
    pub fn photo_limit(&self) -> u32 {
        self.photo_limit.unwrap_or(DEFAULT_PHOTO_LIMIT)
    }
}
