//! In-memory counter store.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::{AppError, Result};

use super::LikeStore;

/// Process-lifetime counter map.
///
/// Counts are created lazily on first read or write and never deleted; a
/// process restart resets everything to zero, which is the documented
/// contract of server mode. The map grows with the number of distinct
/// identifiers seen, which is acceptable at demo scale.
#[derive(Debug, Default)]
pub struct MemoryLikeStore {
    counts: DashMap<String, u64>,
}

impl MemoryLikeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn validate(post_id: &str) -> Result<()> {
    if post_id.is_empty() {
        return Err(AppError::InvalidArgument("postId is required".to_string()));
    }
    Ok(())
}

#[async_trait]
impl LikeStore for MemoryLikeStore {
    async fn count(&self, post_id: &str) -> Result<u64> {
        validate(post_id)?;
        Ok(self.counts.get(post_id).map(|c| *c).unwrap_or(0))
    }

    async fn increment(&self, post_id: &str) -> Result<u64> {
        validate(post_id)?;
        // The entry guard holds the shard lock across the read-modify-write,
        // so concurrent increments for the same identifier cannot lose
        // updates.
        let mut entry = self.counts.entry(post_id.to_string()).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }
}
