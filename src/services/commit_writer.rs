//! Publishes content as a new commit through the Git object API.
//!
//! The write is six sequential calls: create blob, read branch ref, read the
//! tip's tree, create a tree, create a commit, force-update the ref. There is
//! no rollback; objects created before a failing call are left orphaned.

use crate::error::AppError;
use crate::models::{
    BlobRequest, CommitDate, CommitRequest, CommitSignature, Identity, NewTreeEntry, TreeRequest,
    UpdateRefRequest,
};
use crate::services::github_client::GitHubClient;

/// Path replaced in the new tree, independent of the path that was sampled
/// or looked up.
pub const WRITE_PATH: &str = "README.md";

/// Everything needed to publish one commit.
#[derive(Debug, Clone)]
pub struct WriteRequest<'a> {
    pub identity: &'a Identity,
    pub owner: &'a str,
    pub repository: &'a str,
    pub branch: &'a str,
    pub message: &'a str,
    pub content: &'a str,
    /// Hash of the file before the write. Carried along, never compared.
    pub prior_sha: Option<&'a str>,
    pub date: &'a CommitDate,
}

/// Run the write sequence and return the new commit hash.
pub async fn write_commit(
    client: &GitHubClient,
    request: &WriteRequest<'_>,
) -> Result<String, AppError> {
    let (owner, repo) = (request.owner, request.repository);

    if let Some(prior) = request.prior_sha {
        log::debug!("[commit] {} was at {} before the write", WRITE_PATH, prior);
    }

    let blob = client
        .create_blob(owner, repo, &BlobRequest::base64(request.content))
        .await?;
    log::debug!("[commit] Created blob {}", blob.sha);

    let tip = client.get_branch_ref(owner, repo, request.branch).await?;
    let base_commit = tip.object.sha;

    let base_tree = client.get_tree(owner, repo, &base_commit).await?;

    let tree = client
        .create_tree(
            owner,
            repo,
            &TreeRequest {
                base_tree: base_tree.sha,
                tree: vec![NewTreeEntry::blob(WRITE_PATH, blob.sha)],
            },
        )
        .await?;
    log::debug!("[commit] Created tree {}", tree.sha);

    let signature = CommitSignature {
        name: request.identity.username.clone(),
        email: request.identity.email.clone(),
        date: request.date.clone(),
    };
    let commit = client
        .create_commit(
            owner,
            repo,
            &CommitRequest {
                message: request.message.to_string(),
                author: signature.clone(),
                committer: signature,
                parents: vec![base_commit.clone()],
                tree: tree.sha,
            },
        )
        .await?;
    log::info!(
        "[commit] Created commit {} on top of {} dated {}",
        commit.sha,
        base_commit,
        request.date
    );

    client
        .update_branch_ref(
            owner,
            repo,
            request.branch,
            &UpdateRefRequest {
                sha: commit.sha.clone(),
                force: true,
            },
        )
        .await?;
    log::info!("[commit] Moved {}/{}@{} to {}", owner, repo, request.branch, commit.sha);

    Ok(commit.sha)
}
