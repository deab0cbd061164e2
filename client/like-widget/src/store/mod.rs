//! Backing stores for the like widget.
//!
//! The widget only ever sees `CounterBackend`; the mode branch happens once,
//! in `backend_for`, and nowhere else.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{ClientConfig, Mode};
use crate::error::Result;

mod local;
mod remote;

pub use local::LocalCounter;
pub use remote::RemoteCounter;

/// The two logical counter operations, same contract in both modes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterBackend: Send + Sync {
    /// Current count for `post_id`; an unseen identifier reads as 0.
    async fn fetch(&self, post_id: &str) -> Result<u64>;

    /// Add 1 to the count for `post_id` and return the new value.
    async fn increment(&self, post_id: &str) -> Result<u64>;
}

/// Build the single backend the configured mode calls for.
pub fn backend_for(config: &ClientConfig) -> Result<Arc<dyn CounterBackend>> {
    Ok(match config.mode {
        Mode::Server => Arc::new(RemoteCounter::new(&config.api_url)),
        Mode::Local => match &config.data_dir {
            Some(dir) => Arc::new(LocalCounter::with_dir(dir.clone())?),
            None => Arc::new(LocalCounter::new()?),
        },
    })
}
