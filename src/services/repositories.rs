//! Lists the acting user's own repositories.

use crate::error::AppError;
use crate::services::github_client::GitHubClient;

/// Names of the user's repositories in API order. Never empty on success.
pub async fn list_repository_names(client: &GitHubClient) -> Result<Vec<String>, AppError> {
    let names: Vec<String> = client
        .list_user_repositories()
        .await?
        .into_iter()
        .map(|repo| repo.name)
        .collect();

    if names.is_empty() {
        return Err(AppError::not_found("repositories owned by the user"));
    }
    Ok(names)
}
