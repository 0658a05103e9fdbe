//! HTTP client for the remote content API.
//!
//! Exposes the two reads the aggregator needs: the full post list and the
//! comment list of a single post.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::models::{Comment, Post};

/// Client for the posts/comments content API.
#[derive(Clone)]
pub struct ContentClient {
    client: Client,
    base_url: String,
}

impl ContentClient {
    /// Create a client rooted at `base_url`, e.g. `https://jsonplaceholder.typicode.com`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET /posts
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, AppError> {
        self.get_json(&format!("{}/posts", self.base_url)).await
    }

    /// GET /posts/{id}/comments
    pub async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>, AppError> {
        self.get_json(&format!("{}/posts/{}/comments", self.base_url, post_id))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "GET {} returned {}",
                url, status
            )));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ContentClient::new("http://localhost:1/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url, "http://localhost:1");
    }

    #[test]
    fn test_post_payload_decodes() {
        let posts: Vec<Post> = serde_json::from_str(
            r#"[{"userId": 1, "id": 1, "title": "sunt aut", "body": "quia et suscipit"}]"#,
        )
        .unwrap();
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].user_id, 1);
    }

    #[test]
    fn test_comment_payload_decodes() {
        let comments: Vec<Comment> = serde_json::from_str(
            r#"[{"postId": 3, "id": 11, "name": "fugit", "email": "a@b.c", "body": "x y"}]"#,
        )
        .unwrap();
        assert_eq!(comments[0].post_id, 3);
        assert_eq!(comments[0].body, "x y");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_an_error() {
        // Port 1 is reserved and refuses connections.
        let client = ContentClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        assert!(matches!(
            client.fetch_posts().await,
            Err(AppError::Upstream(_))
        ));
    }
}
