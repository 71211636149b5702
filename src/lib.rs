//! readme-backdate - replaces a README in one of your repositories with text
//! sampled from a random public repository, as a backdated commit.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

use config::AppConfig;
use services::{
    run_pipeline, Chooser, CommitSummary, GitHubClient, GitHubClientConfig, PipelineError, Stage,
};

/// Load configuration from the environment and run the pipeline once.
pub async fn run() -> Result<CommitSummary, PipelineError> {
    let config =
        AppConfig::from_env().map_err(|e| PipelineError::new(Stage::Credential, e))?;
    run_with(&config, &mut services::ThreadRngChooser).await
}

/// Run the pipeline once with an explicit config and random source.
pub async fn run_with(
    config: &AppConfig,
    chooser: &mut dyn Chooser,
) -> Result<CommitSummary, PipelineError> {
    let client = GitHubClient::new(GitHubClientConfig::from(config))
        .map_err(|e| PipelineError::new(Stage::Credential, e))?;
    run_pipeline(&client, config, chooser).await
}
