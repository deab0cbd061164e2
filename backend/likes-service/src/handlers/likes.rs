use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::{IncrementLike, LikeCount, LikesQuery};
use crate::state::AppState;

fn require_post_id(post_id: Option<String>) -> Result<String> {
    match post_id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(AppError::InvalidArgument("postId is required".to_string())),
    }
}

/// Read the like count for a post
/// GET /api/likes?postId=1
pub async fn get_likes(
    state: web::Data<AppState>,
    query: web::Query<LikesQuery>,
) -> Result<HttpResponse> {
    let post_id = require_post_id(query.into_inner().post_id)?;
    let likes = state.store.count(&post_id).await?;

    debug!(post_id = %post_id, likes, "read like count");

    Ok(HttpResponse::Ok().json(LikeCount {
        post_id,
        likes,
        message: "Like count fetched from server".to_string(),
    }))
}

/// Increment the like count for a post
/// POST /api/likes with body `{"postId":"1"}`
///
/// The body is parsed by hand so a malformed payload comes back as the same
/// `{error}` 400 the missing-identifier case produces, instead of the
/// extractor's default response.
pub async fn increment_likes(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let request: IncrementLike = serde_json::from_slice(&body)?;
    let post_id = require_post_id(Some(request.post_id))?;
    let likes = state.store.increment(&post_id).await?;

    debug!(post_id = %post_id, likes, "incremented like count");

    Ok(HttpResponse::Ok().json(LikeCount {
        post_id,
        likes,
        message: "Like count incremented".to_string(),
    }))
}
