//! Wire types shared between likes-service and its clients.
//!
//! Everything here is serialized as camelCase JSON (`postId`, `userId`) to
//! match the HTTP surface.

use serde::{Deserialize, Serialize};

/// Success payload for both likes operations (read and increment).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCount {
    pub post_id: String,
    pub likes: u64,
    pub message: String,
}

/// Request body for `POST /api/likes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementLike {
    pub post_id: String,
}

/// Error payload for client and server errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A post record from the external content source.
///
/// Read-only and externally owned; this system never mutates posts, it only
/// attaches a like count keyed by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}
