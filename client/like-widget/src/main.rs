use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use like_widget::posts::PostsClient;
use like_widget::{backend_for, ClientConfig, LikeButton};

/// Demo: list posts from the content source with their like counts, then
/// press the first button once and show the updated label.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,like_widget=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    info!(mode = ?config.mode, "starting like-widget demo");

    let backend = backend_for(&config)?;

    let posts = match PostsClient::new(&config.posts_url).fetch_posts().await {
        Ok(posts) => posts,
        Err(e) => {
            warn!(error = %e, "content source unavailable, continuing without posts");
            Vec::new()
        }
    };

    for post in posts.iter().take(10) {
        let mut button = LikeButton::new(post.id.to_string(), Arc::clone(&backend));
        button.mount().await;
        println!("{:>3}  {:<12} {}", post.id, button.label(), post.title);
    }

    if let Some(post) = posts.first() {
        let mut button = LikeButton::new(post.id.to_string(), Arc::clone(&backend));
        button.mount().await;
        button.press().await;
        println!("\npressed post {}: {}", post.id, button.label());
    }

    Ok(())
}
