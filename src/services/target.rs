//! Looks up the current content hash of the file about to be replaced.

use crate::error::AppError;
use crate::services::github_client::GitHubClient;

/// Current hash of `path` in `owner/repository`. A missing path is `NotFound`.
pub async fn locate_target(
    client: &GitHubClient,
    owner: &str,
    repository: &str,
    path: &str,
) -> Result<String, AppError> {
    client
        .get_file_sha(owner, repository, path)
        .await?
        .ok_or_else(|| AppError::not_found_with_id("file", format!("{}/{}/{}", owner, repository, path)))
}
