//! Remote counter store (server mode): a thin client for the likes-service
//! HTTP surface.

use async_trait::async_trait;

use like_types::{IncrementLike, LikeCount};

use crate::error::{Result, WidgetError};

use super::CounterBackend;

#[derive(Debug, Clone)]
pub struct RemoteCounter {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteCounter {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn likes_url(&self) -> String {
        format!("{}/api/likes", self.base_url)
    }
}

fn validate(post_id: &str) -> Result<()> {
    if post_id.is_empty() {
        return Err(WidgetError::InvalidArgument(
            "postId is required".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl CounterBackend for RemoteCounter {
    async fn fetch(&self, post_id: &str) -> Result<u64> {
        validate(post_id)?;

        let response = self
            .http
            .get(self.likes_url())
            .query(&[("postId", post_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WidgetError::Status(response.status().as_u16()));
        }

        let body: LikeCount = response.json().await?;
        Ok(body.likes)
    }

    async fn increment(&self, post_id: &str) -> Result<u64> {
        validate(post_id)?;

        let response = self
            .http
            .post(self.likes_url())
            .json(&IncrementLike {
                post_id: post_id.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WidgetError::Status(response.status().as_u16()));
        }

        let body: LikeCount = response.json().await?;
        Ok(body.likes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let counter = RemoteCounter::new("http://localhost:8080/");
        assert_eq!(counter.likes_url(), "http://localhost:8080/api/likes");
    }

    #[tokio::test]
    async fn empty_identifier_fails_before_any_network_call() {
        let counter = RemoteCounter::new("http://localhost:1");
        assert!(matches!(
            counter.fetch("").await,
            Err(WidgetError::InvalidArgument(_))
        ));
    }
}
