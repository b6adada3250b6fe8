//! HTTP client for the search backend
//!
//! Two fire-and-forget calls: no timeout, no retry, no cancellation.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::error::{ClientError, RequestFailure};
use super::models::{IndexRequest, SearchRequest};

/// Default backend address
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Client for the `/index` and `/search` endpoints.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    /// Create a client for the given base address
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("site-search/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the backend to crawl and index a website.
    ///
    /// Resolves with the backend's JSON answer, untouched.
    pub async fn submit_for_indexing(&self, url: &str) -> Result<Value, ClientError> {
        self.post_json("/index", &IndexRequest { url })
            .await
            .map_err(ClientError::Indexing)
    }

    /// Run a semantic search against everything indexed so far.
    ///
    /// Resolves with the backend's JSON answer, untouched.
    pub async fn submit_query(&self, query: &str) -> Result<Value, ClientError> {
        self.post_json("/search", &SearchRequest { query })
            .await
            .map_err(ClientError::Search)
    }

    async fn post_json<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<Value, RequestFailure> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestFailure::Status(status));
        }

        let value = response.json::<Value>().await?;
        info!("POST {} -> {}", url, status);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = BackendClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BACKEND_URL);
    }

    #[tokio::test]
    async fn test_submit_for_indexing_returns_body_verbatim() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/index")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "url": "https://example.com" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Indexing completed.","chunks_indexed":7}"#)
            .create_async()
            .await;

        let client = BackendClient::new(&server.url()).unwrap();
        let body = client.submit_for_indexing("https://example.com").await.unwrap();

        assert_eq!(body, json!({ "message": "Indexing completed.", "chunks_indexed": 7 }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_submit_for_indexing_non_success_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/index")
            .with_status(500)
            .with_body(r#"{"detail":"boom"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = BackendClient::new(&server.url()).unwrap();
        let err = client.submit_for_indexing("https://example.com").await.unwrap_err();

        assert!(matches!(
            err,
            ClientError::Indexing(RequestFailure::Status(status)) if status.as_u16() == 500
        ));
        assert_eq!(err.to_string(), "Failed to index URL content.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_submit_query_returns_body_verbatim() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/search")
            .match_body(Matcher::Json(json!({ "query": "pricing" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"query":"pricing","results":[]}"#)
            .create_async()
            .await;

        let client = BackendClient::new(&server.url()).unwrap();
        let body = client.submit_query("pricing").await.unwrap();

        assert_eq!(body, json!({ "query": "pricing", "results": [] }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_submit_query_client_error_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(422)
            .create_async()
            .await;

        let client = BackendClient::new(&server.url()).unwrap();
        let err = client.submit_query("pricing").await.unwrap_err();

        assert!(matches!(err, ClientError::Search(RequestFailure::Status(_))));
        assert_eq!(err.to_string(), "Failed to perform semantic search.");
    }

    #[tokio::test]
    async fn test_undecodable_body_is_a_search_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = BackendClient::new(&server.url()).unwrap();
        let err = client.submit_query("pricing").await.unwrap_err();

        assert!(matches!(err, ClientError::Search(RequestFailure::Transport(_))));
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        // Nothing listens on port 1
        let client = BackendClient::new("http://127.0.0.1:1").unwrap();
        let err = client.submit_for_indexing("https://example.com").await.unwrap_err();

        assert!(matches!(err, ClientError::Indexing(RequestFailure::Transport(_))));
    }
}
