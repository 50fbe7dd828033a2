// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Monthly contest periods and timestamp helpers.
//!
//! Themes, submissions and vote counters are all scoped to a calendar month
//! in UTC. The period key is `"{year}-{month}"` without zero padding, which is
//! also the document ID of the month's theme.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

/// A `(year, month)` pair identifying one contest round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonthPeriod {
    pub year: i32,
    /// 1-based month (January = 1)
    pub month: u32,
}

impl MonthPeriod {
    /// Build a period, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The period containing the current wall-clock time.
    pub fn current() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn from_datetime(date: DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Document key, e.g. `2024-3`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.year, self.month)
    }

    /// Parse a key produced by [`MonthPeriod::key`].
    pub fn parse_key(key: &str) -> Option<Self> {
        let (year, month) = key.split_once('-')?;
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

/// Format a UTC timestamp as RFC3339 with millisecond precision and a `Z` suffix.
///
/// Fixed width output keeps lexical and chronological order identical.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time, formatted with [`format_utc_rfc3339`].
pub fn now_rfc3339() -> String {
    format_utc_rfc3339(Utc::now())
}
