//! Counter storage interface.
//!
//! Handlers only ever see this trait; the in-memory map behind it is a
//! stand-in for a real datastore and can be swapped without touching the
//! HTTP layer.

use async_trait::async_trait;

use crate::error::Result;

mod memory;

pub use memory::MemoryLikeStore;

/// Narrow storage seam for like counts.
///
/// Identifier validation lives here: both operations reject an empty
/// identifier with `InvalidArgument` and mutate nothing.
#[async_trait]
pub trait LikeStore: Send + Sync {
    /// Current count for `post_id`; an unseen identifier reads as 0.
    async fn count(&self, post_id: &str) -> Result<u64>;

    /// Add exactly 1 to the count for `post_id` and return the new value.
    ///
    /// Explicitly not idempotent: every accepted call moves the count.
    async fn increment(&self, post_id: &str) -> Result<u64>;
}
