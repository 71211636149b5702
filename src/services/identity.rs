//! Resolves the acting user's identity.

use crate::error::AppError;
use crate::models::Identity;
use crate::services::github_client::GitHubClient;

/// Fetch the authenticated profile. A hidden email becomes `fallback_email`.
pub async fn resolve_identity(
    client: &GitHubClient,
    fallback_email: &str,
) -> Result<Identity, AppError> {
    let user = client.get_authenticated_user().await?;
    if user.email.is_none() {
        log::debug!("[identity] {} has no public email", user.login);
    }
    Ok(user.into_identity(fallback_email))
}
