//! GitHub API client.
//!
//! Provides a bearer-token HTTP client for the GitHub REST API with one
//! typed method per endpoint the pipeline touches.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{
    AuthenticatedUser, BlobRequest, CommitRequest, ContentsResponse, CreatedObject, GitRef,
    RepositorySearch, Tree, TreeRequest, UpdateRefRequest, UserRepository,
};
use reqwest::{header, Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// GitHub API client configuration.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Base URL of the API (e.g., `https://api.github.com`).
    pub base_url: String,

    /// Personal access token for authentication.
    pub token: String,

    /// Request timeout in seconds; `None` disables the timeout.
    pub timeout_secs: Option<u64>,
}

impl From<&AppConfig> for GitHubClientConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            token: config.token.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// GitHub API client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubClientConfig,
}

impl GitHubClient {
    /// Create a new GitHub client.
    pub fn new(config: GitHubClientConfig) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();

        let token_value = header::HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| AppError::invalid_input_field("Invalid token format", "token"))?;
        headers.insert(header::AUTHORIZATION, token_value);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the full URL for an endpoint.
    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Turn a response into `T`, or into `AppError::GitHubApi` on a non-success status.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        method: &Method,
        endpoint: &str,
    ) -> Result<T, AppError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str::<T>(&body).map_err(|e| {
                AppError::unexpected_response(format!("{} {}: {}", method, endpoint, e))
            });
        }

        let status_code = status.as_u16();
        log::warn!("[github] {} {} returned {}", method, endpoint, status_code);

        let body = response.text().await.unwrap_or_default();
        // GitHub returns errors as {"message": "...", "documentation_url": "..."}
        let body_message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message")?.as_str().map(String::from));

        let message = match (status, body_message) {
            (_, Some(msg)) => format!("{} ({})", msg, status_code),
            (StatusCode::UNAUTHORIZED, None) => "Bad credentials (401)".to_string(),
            (StatusCode::FORBIDDEN, None) => "Access denied (403)".to_string(),
            (StatusCode::NOT_FOUND, None) => "Resource not found (404)".to_string(),
            (StatusCode::UNPROCESSABLE_ENTITY, None) => "Validation failed (422)".to_string(),
            _ => format!("Request failed ({})", status_code),
        };

        Err(AppError::github_api_full(message, status_code, endpoint))
    }

    /// Send a request with an optional JSON body.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, AppError> {
        let url = self.api_url(endpoint);
        log::debug!("[github] {} {}", method, endpoint);

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(response, &method, endpoint).await
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        self.send(Method::GET, endpoint, None::<&()>).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<T, AppError> {
        self.send(Method::POST, endpoint, Some(body)).await
    }

    async fn patch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<T, AppError> {
        self.send(Method::PATCH, endpoint, Some(body)).await
    }

    /// Search public repositories by keyword (first page only).
    pub async fn search_repositories(&self, query: &str) -> Result<RepositorySearch, AppError> {
        let endpoint = format!("/search/repositories?q={}", urlencoding::encode(query));
        self.get_json(&endpoint).await
    }

    /// List the root directory of a repository.
    pub async fn list_root(&self, owner: &str, repo: &str) -> Result<ContentsResponse, AppError> {
        let endpoint = format!("{}/contents", repo_path(owner, repo));
        self.get_json(&endpoint).await
    }

    /// Fetch the contents of one path in a repository.
    pub async fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<ContentsResponse, AppError> {
        let endpoint = format!("{}/contents/{}", repo_path(owner, repo), encode_path(path));
        self.get_json(&endpoint).await
    }

    /// Fetch the current content hash of a path, or `None` if it does not exist.
    pub async fn get_file_sha(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<String>, AppError> {
        match self.get_contents(owner, repo, path).await {
            Ok(ContentsResponse::Item(item)) => Ok(Some(item.sha)),
            Ok(ContentsResponse::Listing(_)) => Err(AppError::unexpected_response(format!(
                "{} is a directory",
                path
            ))),
            Err(e) if e.status_code() == Some(404) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Fetch the authenticated user's profile.
    pub async fn get_authenticated_user(&self) -> Result<AuthenticatedUser, AppError> {
        self.get_json("/user").await
    }

    /// List the authenticated user's repositories (first page only).
    pub async fn list_user_repositories(&self) -> Result<Vec<UserRepository>, AppError> {
        self.get_json("/user/repos").await
    }

    /// Create a blob and return its hash.
    pub async fn create_blob(
        &self,
        owner: &str,
        repo: &str,
        blob: &BlobRequest,
    ) -> Result<CreatedObject, AppError> {
        let endpoint = format!("{}/git/blobs", repo_path(owner, repo));
        self.post_json(&endpoint, blob).await
    }

    /// Read a branch reference.
    pub async fn get_branch_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<GitRef, AppError> {
        let endpoint = branch_ref_path(owner, repo, branch);
        self.get_json(&endpoint).await
    }

    /// Read a tree. A commit hash resolves to that commit's root tree.
    pub async fn get_tree(&self, owner: &str, repo: &str, sha: &str) -> Result<Tree, AppError> {
        let endpoint = format!("{}/git/trees/{}", repo_path(owner, repo), sha);
        self.get_json(&endpoint).await
    }

    /// Create a tree.
    pub async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        tree: &TreeRequest,
    ) -> Result<CreatedObject, AppError> {
        let endpoint = format!("{}/git/trees", repo_path(owner, repo));
        self.post_json(&endpoint, tree).await
    }

    /// Create a commit.
    pub async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        commit: &CommitRequest,
    ) -> Result<CreatedObject, AppError> {
        let endpoint = format!("{}/git/commits", repo_path(owner, repo));
        self.post_json(&endpoint, commit).await
    }

    /// Point a branch at `update.sha`.
    pub async fn update_branch_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        update: &UpdateRefRequest,
    ) -> Result<GitRef, AppError> {
        let endpoint = branch_ref_path(owner, repo, branch);
        self.patch_json(&endpoint, update).await
    }
}

fn repo_path(owner: &str, repo: &str) -> String {
    format!(
        "/repos/{}/{}",
        urlencoding::encode(owner),
        urlencoding::encode(repo)
    )
}

fn branch_ref_path(owner: &str, repo: &str, branch: &str) -> String {
    format!("{}/git/refs/heads/{}", repo_path(owner, repo), encode_path(branch))
}

/// Percent-encode each segment of a slash-separated path.
fn encode_path(path: &str) -> String {
    path.trim_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
