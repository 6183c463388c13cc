//! HTTP client for the blog API.
//!
//! The API is an external collaborator with a fixed contract:
//!
//! ```text
//! GET  /?page={p}   → 200 { posts, pagination }
//! GET  /post/{id}   → 200 { id, title, content }  | non-2xx = not found
//! POST /create      → 2xx on success              | anything else = rejected
//! ```
//!
//! Views talk to it through the `BlogApi` trait so tests can swap in a stub.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use url::Url;

use super::types::{NewPost, PageResult, Post};

/// Default API location, matching the development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// The two fault kinds the views recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    NetworkError,
    NotFound,
}

/// Errors that can occur while talking to the blog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Client misconfigured (bad base URL). Detected at startup.
    Config(String),
    /// Transport-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The API answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body did not match the expected shape.
    Parse(String),
    /// Single-post lookup answered with a non-success status.
    NotFound { id: u64 },
}

impl ApiError {
    pub fn kind(&self) -> FaultKind {
        match self {
            ApiError::NotFound { .. } => FaultKind::NotFound,
            _ => FaultKind::NetworkError,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
            ApiError::NotFound { id } => write!(f, "post {id} not found"),
        }
    }
}

impl std::error::Error for ApiError {}

#[async_trait]
pub trait BlogApi: Send + Sync {
    /// Fetches one page of posts.
    async fn list_posts(&self, page: u32) -> Result<PageResult, ApiError>;

    /// Fetches a single post by id.
    async fn get_post(&self, id: u64) -> Result<Post, ApiError>;

    /// Publishes a new post.
    async fn create_post(&self, post: &NewPost) -> Result<(), ApiError>;
}

/// `BlogApi` backed by reqwest.
pub struct HttpBlogApi {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpBlogApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        // Url::join drops the last path segment unless the base ends in a slash
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| ApiError::Config(format!("invalid API URL {base_url:?}: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Config(format!("invalid endpoint {path:?}: {e}")))
    }

    fn list_url(&self, page: u32) -> Result<Url, ApiError> {
        let mut url = self.endpoint("")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }
}

fn network_error(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    async fn list_posts(&self, page: u32) -> Result<PageResult, ApiError> {
        let url = self.list_url(page)?;
        debug!("GET {url}");

        let response = self.client.get(url).send().await.map_err(network_error)?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Page {page} request failed with HTTP {status}");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let result: PageResult = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        if !result.pagination.is_consistent() {
            warn!(
                "Server pagination flags disagree with page numbers: {:?}",
                result.pagination
            );
        }
        debug!(
            "Page {} loaded: {} posts of {} pages",
            result.pagination.current_page,
            result.posts.len(),
            result.pagination.total_pages
        );
        Ok(result)
    }

    async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        let url = self.endpoint(&format!("post/{id}"))?;
        debug!("GET {url}");

        let response = self.client.get(url).send().await.map_err(network_error)?;
        let status = response.status();
        if !status.is_success() {
            debug!("Post {id} lookup returned HTTP {status}");
            return Err(ApiError::NotFound { id });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn create_post(&self, post: &NewPost) -> Result<(), ApiError> {
        let url = self.endpoint("create")?;
        debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .json(post)
            .send()
            .await
            .map_err(network_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpBlogApi {
        HttpBlogApi::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_list_url_carries_page_query() {
        let url = api("http://localhost:5000").list_url(3).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/?page=3");
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let api = api("http://example.com/blog");
        assert_eq!(
            api.endpoint("post/7").unwrap().as_str(),
            "http://example.com/blog/post/7"
        );
        assert_eq!(
            api.list_url(1).unwrap().as_str(),
            "http://example.com/blog/?page=1"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let result = HttpBlogApi::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_fault_kinds() {
        assert_eq!(ApiError::NotFound { id: 1 }.kind(), FaultKind::NotFound);
        assert_eq!(
            ApiError::Network("refused".into()).kind(),
            FaultKind::NetworkError
        );
        assert_eq!(
            ApiError::Api {
                status: 500,
                message: String::new()
            }
            .kind(),
            FaultKind::NetworkError
        );
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Api {
            status: 503,
            message: "down".into(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 503): down");
        assert_eq!(ApiError::NotFound { id: 9 }.to_string(), "post 9 not found");
    }
}
