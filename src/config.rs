//! Run configuration, read once from the environment at startup.

use crate::error::AppError;
use crate::models::CommitDate;

/// Environment variable holding the personal access token.
pub const TOKEN_VAR: &str = "PERSONAL_ACCESS_TOKEN";

/// Environment variable overriding the API base URL.
pub const API_URL_VAR: &str = "GITHUB_API_URL";

/// Environment variable setting a per-request timeout in seconds.
pub const TIMEOUT_VAR: &str = "GITHUB_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_SEARCH_QUERY: &str = "README";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_TARGET_PATH: &str = "README.md";
pub const DEFAULT_COMMIT_MESSAGE: &str = "Update README.md";
pub const DEFAULT_COMMIT_DATE: &str = "2023-01-01T12:00:00Z";
pub const FALLBACK_EMAIL: &str = "example@example.com";

/// Settings for one run of the pipeline.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Personal access token sent as a bearer token.
    pub token: String,

    /// Base URL of the API (e.g., `https://api.github.com`).
    pub api_base_url: String,

    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,

    /// Keyword used to discover a public repository.
    pub search_query: String,

    /// Branch whose ref is force-updated.
    pub branch: String,

    /// Path whose content hash is looked up before writing.
    pub target_path: String,

    pub commit_message: String,
    pub commit_date: CommitDate,

    /// Email used when the profile does not expose one.
    pub fallback_email: String,
}

impl AppConfig {
    /// Build a config with the given token and all defaults.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: None,
            search_query: DEFAULT_SEARCH_QUERY.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            target_path: DEFAULT_TARGET_PATH.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            commit_date: CommitDate::fixed_default(),
            fallback_email: FALLBACK_EMAIL.to_string(),
        }
    }

    /// Override the API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::missing_credential(TOKEN_VAR))?;

        let mut config = Self::with_token(token.trim());
        config.commit_date = DEFAULT_COMMIT_DATE.parse::<CommitDate>()?;

        if let Some(url) = lookup(API_URL_VAR).filter(|value| !value.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|value| !value.trim().is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    AppError::invalid_input_field(
                        format!("expected a positive number of seconds, got {:?}", raw),
                        TIMEOUT_VAR,
                    )
                })?;
            config.timeout_secs = Some(secs);
        }

        Ok(config)
    }
}
