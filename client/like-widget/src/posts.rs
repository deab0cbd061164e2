//! Client for the external content source.
//!
//! Posts are externally owned and read-only; this system only displays them
//! and keys like counts by their `id`.

use like_types::Post;

use crate::error::{Result, WidgetError};

#[derive(Debug, Clone)]
pub struct PostsClient {
    http: reqwest::Client,
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let response = self
            .http
            .get(format!("{}/posts", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WidgetError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}
