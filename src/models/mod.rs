//! Data models for the GitHub REST API.
//!
//! Only the fields the pipeline reads are declared; anything else in a
//! response body is ignored during deserialization.

pub mod content;
pub mod git;
pub mod repository;
pub mod user;

// Re-exports for convenient access
pub use content::{ContentEntry, ContentItem, ContentsResponse, SampledContent};
pub use git::{
    BlobRequest, CommitDate, CommitRequest, CommitSignature, CreatedObject, GitRef, GitRefObject,
    NewTreeEntry, Tree, TreeRequest, UpdateRefRequest,
};
pub use repository::{Owner, Repository, RepositorySearch};
pub use user::{AuthenticatedUser, Identity, UserRepository};
