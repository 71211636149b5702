//! Git object API payloads: blobs, trees, commits and refs.

use crate::config::DEFAULT_COMMIT_DATE;
use crate::error::AppError;
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp layout accepted for authored dates.
pub const COMMIT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Mode of a regular, non-executable file.
pub const REGULAR_FILE_MODE: &str = "100644";

/// An authored/committed date in `YYYY-MM-DDTHH:MM:SSZ` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommitDate(String);

impl CommitDate {
    /// `2023-01-01T12:00:00Z`, unchecked. `AppConfig::from_lookup` parses
    /// the same constant so a bad edit fails at startup.
    pub fn fixed_default() -> Self {
        Self(DEFAULT_COMMIT_DATE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CommitDate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, COMMIT_DATE_FORMAT).map_err(|e| {
            AppError::invalid_input_field(
                format!("{:?} is not a UTC timestamp ({})", s, e),
                "commit_date",
            )
        })?;
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for CommitDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /repos/{owner}/{repo}/git/blobs`.
#[derive(Debug, Clone, Serialize)]
pub struct BlobRequest {
    pub content: String,
    pub encoding: &'static str,
}

impl BlobRequest {
    /// Encode `text` as a base64 blob.
    pub fn base64(text: &str) -> Self {
        Self {
            content: STANDARD.encode(text.as_bytes()),
            encoding: "base64",
        }
    }
}

/// Response of any create call (blob, tree, commit); only the hash is used.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedObject {
    pub sha: String,
}

/// Response of `GET /repos/{owner}/{repo}/git/refs/heads/{branch}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitRef {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub object: GitRefObject,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitRefObject {
    pub sha: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Response of `GET /repos/{owner}/{repo}/git/trees/{sha}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub sha: String,
}

/// Entry of a new tree.
#[derive(Debug, Clone, Serialize)]
pub struct NewTreeEntry {
    pub path: String,
    pub mode: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub sha: String,
}

impl NewTreeEntry {
    /// A regular-file blob entry.
    pub fn blob(path: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: REGULAR_FILE_MODE,
            kind: "blob",
            sha: sha.into(),
        }
    }
}

/// Body of `POST /repos/{owner}/{repo}/git/trees`.
#[derive(Debug, Clone, Serialize)]
pub struct TreeRequest {
    pub base_tree: String,
    pub tree: Vec<NewTreeEntry>,
}

/// Author or committer of a new commit.
#[derive(Debug, Clone, Serialize)]
pub struct CommitSignature {
    pub name: String,
    pub email: String,
    pub date: CommitDate,
}

/// Body of `POST /repos/{owner}/{repo}/git/commits`.
#[derive(Debug, Clone, Serialize)]
pub struct CommitRequest {
    pub message: String,
    pub author: CommitSignature,
    pub committer: CommitSignature,
    pub parents: Vec<String>,
    pub tree: String,
}

/// Body of `PATCH /repos/{owner}/{repo}/git/refs/heads/{branch}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRefRequest {
    pub sha: String,
    pub force: bool,
}
