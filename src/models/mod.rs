// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod photo;
pub mod settings;
pub mod theme;
pub mod user;

pub use photo::Photo;
pub use settings::AppSettings;
pub use theme::MonthlyTheme;
pub use user::{Role, User};
