//! The run: sample, resolve identity, pick a repository, locate the target,
//! write the commit.
//!
//! Steps run strictly in order and each consumes only what the previous ones
//! produced. The first failing step ends the run; nothing after it is called.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::SampledContent;
use crate::services::chooser::{choose, Chooser};
use crate::services::commit_writer::{write_commit, WriteRequest};
use crate::services::github_client::GitHubClient;
use crate::services::identity::resolve_identity;
use crate::services::repositories::list_repository_names;
use crate::services::sampler::sample_content;
use crate::services::target::locate_target;
use std::fmt;
use thiserror::Error;

/// Step at which a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Credential,
    Sample,
    Identity,
    Repositories,
    Target,
    Commit,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Credential => "Failed to get personal access token from environment variables.",
            Self::Sample => "Failed to get random file content.",
            Self::Identity => "Failed to get user info. Please check your access token.",
            Self::Repositories => "User has no repositories.",
            Self::Target => "Failed to get file SHA.",
            Self::Commit => "Failed to create commit.",
        };
        f.write_str(message)
    }
}

/// A run that stopped early.
#[derive(Debug, Error)]
#[error("{stage}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: AppError,
}

impl PipelineError {
    pub fn new(stage: Stage, source: AppError) -> Self {
        Self { stage, source }
    }

    /// Stage message followed by the underlying cause, including any HTTP status.
    pub fn diagnostic(&self) -> String {
        format!("{} ({})", self.stage, self.source)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct CommitSummary {
    pub owner: String,
    pub repository: String,
    pub branch: String,
    pub commit_sha: String,
    /// Where the committed text was sampled from.
    pub source: SampledContent,
}

/// Attach `stage` to a step's error and log it.
fn at<T>(stage: Stage, result: Result<T, AppError>) -> Result<T, PipelineError> {
    result.map_err(|source| {
        let err = PipelineError::new(stage, source);
        if err.source.is_absence() {
            log::info!("[pipeline] {}", err.diagnostic());
        } else {
            log::error!("[pipeline] {}", err.diagnostic());
        }
        err
    })
}

/// Run every step once against `client`.
pub async fn run_pipeline(
    client: &GitHubClient,
    config: &AppConfig,
    chooser: &mut dyn Chooser,
) -> Result<CommitSummary, PipelineError> {
    let sampled = at(
        Stage::Sample,
        sample_content(client, &config.search_query, chooser).await,
    )?;
    log::info!(
        "[pipeline] Sampled {} bytes from {}/{}:{}",
        sampled.text.len(),
        sampled.owner,
        sampled.repository,
        sampled.path
    );

    let identity = at(
        Stage::Identity,
        resolve_identity(client, &config.fallback_email).await,
    )?;

    let names = at(Stage::Repositories, list_repository_names(client).await)?;
    let repository = at(
        Stage::Repositories,
        choose(chooser, &names)
            .cloned()
            .ok_or_else(|| AppError::not_found("repositories owned by the user")),
    )?;
    log::info!("[pipeline] Target repository {}/{}", identity.username, repository);

    let file_sha = at(
        Stage::Target,
        locate_target(client, &identity.username, &repository, &config.target_path).await,
    )?;

    let request = WriteRequest {
        identity: &identity,
        owner: &identity.username,
        repository: &repository,
        branch: &config.branch,
        message: &config.commit_message,
        content: &sampled.text,
        prior_sha: Some(&file_sha),
        date: &config.commit_date,
    };
    let commit_sha = at(Stage::Commit, write_commit(client, &request).await)?;

    Ok(CommitSummary {
        owner: identity.username.clone(),
        repository,
        branch: config.branch.clone(),
        commit_sha,
        source: sampled,
    })
}
