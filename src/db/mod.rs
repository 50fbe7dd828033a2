//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Photo submissions with inline base64 images
    pub const PHOTOS: &str = "photos_base64";
    /// Themes keyed by period (`{year}-{month}`)
    pub const MONTHLY_THEMES: &str = "monthly_themes";
    pub const APP_SETTINGS: &str = "app_settings";
    /// Document ID of the singleton settings document
    pub const CONFIG_DOC_ID: &str = "config";
}
