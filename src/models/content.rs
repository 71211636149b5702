//! Repository contents responses and the sampled text they yield.

use crate::error::AppError;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Deserialize;

/// Response of `GET /repos/{owner}/{repo}/contents[/{path}]`.
///
/// A directory path returns a JSON array, anything else a single object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentsResponse {
    Listing(Vec<ContentEntry>),
    Item(ContentItem),
}

/// Entry of a directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    pub sha: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A single file, symlink or submodule.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    pub path: String,
    pub sha: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ContentItem {
    /// Decode the item as UTF-8 text.
    ///
    /// Only `file` items carrying base64 content qualify; everything else is
    /// `AppError::NotText`.
    pub fn decode_text(&self) -> Result<String, AppError> {
        if self.kind != "file" || self.encoding.as_deref() != Some("base64") {
            return Err(AppError::not_text(&self.path));
        }
        let encoded = self
            .content
            .as_deref()
            .ok_or_else(|| AppError::not_text(&self.path))?;

        // The API wraps base64 payloads at 60 columns.
        let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|_| AppError::not_text(&self.path))?;
        String::from_utf8(bytes).map_err(|_| AppError::not_text(&self.path))
    }
}

impl ContentsResponse {
    /// Decode as text, treating a directory listing as non-text.
    pub fn decode_text(&self, requested_path: &str) -> Result<String, AppError> {
        match self {
            Self::Item(item) => item.decode_text(),
            Self::Listing(_) => Err(AppError::not_text(requested_path)),
        }
    }
}

/// Text sampled from a public repository, with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledContent {
    pub owner: String,
    pub repository: String,
    pub path: String,
    pub text: String,
}
