//! Request/response structures for the likes surface.

use serde::Deserialize;

pub use like_types::{ErrorBody, IncrementLike, LikeCount};

/// Query parameters for `GET /api/likes`.
#[derive(Debug, Deserialize)]
pub struct LikesQuery {
    #[serde(rename = "postId")]
    pub post_id: Option<String>,
}
