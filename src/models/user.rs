//! Authenticated user profile and repositories.

use serde::Deserialize;

/// Response of `GET /user`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub login: String,

    /// Public email; `null` when hidden by privacy settings.
    #[serde(default)]
    pub email: Option<String>,
}

/// One element of `GET /user/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRepository {
    pub name: String,
}

/// Username and email used as commit author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub email: String,
}

impl AuthenticatedUser {
    /// Resolve into an identity, substituting `fallback_email` for a missing
    /// or blank email.
    pub fn into_identity(self, fallback_email: &str) -> Identity {
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| fallback_email.to_string());
        Identity {
            username: self.login,
            email,
        }
    }
}
