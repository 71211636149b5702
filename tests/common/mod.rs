//! Shared fixtures for the stubbed-API tests.

#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use readme_backdate::config::AppConfig;
use readme_backdate::services::{GitHubClient, GitHubClientConfig};
use serde_json::{json, Value};

pub const TOKEN: &str = "test-token";

pub fn config_for(server: &ServerGuard) -> AppConfig {
    AppConfig::with_token(TOKEN).with_api_base_url(server.url())
}

pub fn client_for(config: &AppConfig) -> GitHubClient {
    GitHubClient::new(GitHubClientConfig::from(config)).unwrap()
}

/// Mock `method path` answering `status` with a JSON body, expected `hits` times.
pub async fn mock_json(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: Value,
    hits: usize,
) -> Mock {
    server
        .mock(method, path)
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create_async()
        .await
}

pub fn search_body(repos: &[(&str, &str)]) -> Value {
    let items: Vec<Value> = repos
        .iter()
        .map(|(owner, name)| json!({ "name": name, "owner": { "login": owner } }))
        .collect();
    json!({ "total_count": items.len(), "incomplete_results": false, "items": items })
}

pub fn listing_body(entries: &[(&str, &str)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(path, kind)| json!({ "name": path, "path": path, "sha": "entry-sha", "type": kind }))
            .collect(),
    )
}

pub fn file_body(path: &str, sha: &str, base64_content: &str) -> Value {
    json!({
        "name": path,
        "path": path,
        "sha": sha,
        "type": "file",
        "encoding": "base64",
        "content": base64_content
    })
}

pub fn ref_body(sha: &str) -> Value {
    json!({ "ref": "refs/heads/main", "object": { "sha": sha, "type": "commit" } })
}

pub fn error_body(message: &str) -> Value {
    json!({ "message": message, "documentation_url": "https://docs.github.com/rest" })
}
