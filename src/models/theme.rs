//! Monthly contest theme.

use crate::period::MonthPeriod;
use serde::{Deserialize, Serialize};

/// Theme reported when an admin has not set one for the month.
pub const DEFAULT_THEME: &str = "Free theme";

/// Theme document stored at `monthly_themes/{year}-{month}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTheme {
    pub theme: String,
    #[serde(default)]
    pub active: bool,
    pub month: u32,
    pub year: i32,
    #[serde(default)]
    pub created_at: String,
}

impl MonthlyTheme {
    pub fn new(theme: &str, period: MonthPeriod, created_at: &str) -> Self {
        Self {
            theme: theme.trim().to_string(),
            active: true,
            month: period.month,
            year: period.year,
            created_at: created_at.to_string(),
        }
    }
}
