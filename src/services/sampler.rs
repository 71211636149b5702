//! Samples text from a randomly discovered public repository.

use crate::error::AppError;
use crate::models::{ContentsResponse, SampledContent};
use crate::services::chooser::{choose, Chooser};
use crate::services::github_client::GitHubClient;

/// Search for `query`, pick a repository, pick one root entry, and return
/// its decoded text.
///
/// Empty search results, empty listings and empty files yield
/// `AppError::NotFound`; an entry that is not a base64 file yields
/// `AppError::NotText`. No second pick is attempted in any case.
pub async fn sample_content(
    client: &GitHubClient,
    query: &str,
    chooser: &mut dyn Chooser,
) -> Result<SampledContent, AppError> {
    let search = client.search_repositories(query).await?;
    let repository = choose(chooser, &search.items).ok_or_else(|| {
        log::info!("[sampler] No repositories found for {:?}", query);
        AppError::not_found_with_id("repositories", query)
    })?;
    let owner = repository.owner.login.clone();
    let name = repository.name.clone();
    log::info!("[sampler] Picked {} of {} results", repository.full_name(), search.items.len());

    let entries = match client.list_root(&owner, &name).await? {
        ContentsResponse::Listing(entries) => entries,
        ContentsResponse::Item(item) => {
            return Err(AppError::unexpected_response(format!(
                "root of {}/{} is a single {} entry",
                owner, name, item.kind
            )))
        }
    };
    let entry = choose(chooser, &entries).ok_or_else(|| {
        log::info!("[sampler] No files found in {}/{}", owner, name);
        AppError::not_found_with_id("files", format!("{}/{}", owner, name))
    })?;
    let path = entry.path.clone();

    let contents = client.get_contents(&owner, &name, &path).await?;
    let text = contents.decode_text(&path).map_err(|e| {
        log::info!("[sampler] {} is not text, skipping", path);
        e
    })?;
    if text.is_empty() {
        log::info!("[sampler] {} is empty, skipping", path);
        return Err(AppError::not_found_with_id("content", path));
    }

    Ok(SampledContent {
        owner,
        repository: name,
        path,
        text,
    })
}
