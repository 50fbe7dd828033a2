//! Application configuration loaded from environment variables.
//!
//! Cloud Run injects secrets as environment variables via secret bindings,
//! so everything is read from the environment once at startup.

use std::env;

/// Maximum votes a user may have outstanding in one month.
pub const MAX_VOTES_PER_MONTH: u32 = 3;

/// Photo limit applied when `app_settings/config` has no `photoLimit`.
pub const DEFAULT_PHOTO_LIMIT: u32 = 3;

/// Decoded image size cap. Firestore documents max out at 1 MiB and the
/// base64 text is a third larger than the decoded bytes.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 750 * 1024;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Identity-provider user IDs that get the admin role when their
    /// profile is first created
    pub bootstrap_admin_ids: Vec<String>,
    /// Largest accepted decoded image payload, in bytes
    pub max_image_bytes: usize,

    // --- Secrets ---
    /// HS256 key used to verify session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:8081".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            bootstrap_admin_ids: Vec::new(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
        }
    }
}

impl Config {
    /// Config used by the integration tests.
    pub fn test_default() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let max_image_bytes = match env::var("MAX_IMAGE_BYTES") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("MAX_IMAGE_BYTES", raw))?,
            Err(_) => DEFAULT_MAX_IMAGE_BYTES,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            bootstrap_admin_ids: env::var("BOOTSTRAP_ADMIN_IDS")
                .map(|v| parse_id_list(&v))
                .unwrap_or_default(),
            max_image_bytes,
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .trim()
                .as_bytes()
                .to_vec(),
        })
    }

    /// Whether a newly created profile with this ID starts out as admin.
    pub fn is_bootstrap_admin(&self, user_id: &str) -> bool {
        self.bootstrap_admin_ids.iter().any(|id| id == user_id)
    }
}

fn parse_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("JWT_SIGNING_KEY", "test_jwt_key_32_bytes_minimum!!");
        env::set_var("BOOTSTRAP_ADMIN_IDS", "admin-1, admin-2,,");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.jwt_signing_key, b"test_jwt_key_32_bytes_minimum!!");
        assert_eq!(config.bootstrap_admin_ids, vec!["admin-1", "admin-2"]);
        assert!(config.is_bootstrap_admin("admin-2"));
        assert!(!config.is_bootstrap_admin("someone"));
    }

    #[test]
    fn test_parse_id_list_skips_blanks() {
        assert!(parse_id_list(" , ").is_empty());
        assert_eq!(parse_id_list("a"), vec!["a"]);
    }
}
