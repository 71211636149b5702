//! Pipeline services.
//!
//! `github_client` owns all HTTP traffic; the step modules each wrap one
//! stage of the run and `pipeline` chains them.

pub mod chooser;
pub mod commit_writer;
pub mod github_client;
pub mod identity;
pub mod pipeline;
pub mod repositories;
pub mod sampler;
pub mod target;

pub use chooser::{Chooser, ScriptedChooser, ThreadRngChooser};
pub use github_client::{GitHubClient, GitHubClientConfig};
pub use pipeline::{run_pipeline, CommitSummary, PipelineError, Stage};
