//! The like button state machine.

use std::sync::Arc;

use tracing::warn;

use crate::store::CounterBackend;

/// Per-instance widget state.
///
/// `Loading` covers the window where an increment is in flight; presses in
/// that window are dropped, the same way the rendered button is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Loading,
}

/// A clickable like control bound to one post and exactly one backing store.
///
/// The backend is injected at construction; the widget itself has no notion
/// of modes. Failures never surface as a blocking state: the displayed count
/// simply stays where it was and a diagnostic is logged.
pub struct LikeButton {
    post_id: String,
    likes: u64,
    state: WidgetState,
    backend: Arc<dyn CounterBackend>,
}

impl LikeButton {
    pub fn new(post_id: impl Into<String>, backend: Arc<dyn CounterBackend>) -> Self {
        Self {
            post_id: post_id.into(),
            likes: 0,
            state: WidgetState::Idle,
            backend,
        }
    }

    /// One-time initial read. On failure the count stays at 0; no retry.
    pub async fn mount(&mut self) {
        match self.backend.fetch(&self.post_id).await {
            Ok(likes) => self.likes = likes,
            Err(e) => {
                warn!(post_id = %self.post_id, error = %e, "initial like count fetch failed");
            }
        }
    }

    /// Handle a click: run one increment against the backing store.
    ///
    /// On success the displayed count becomes the store's returned value. On
    /// failure the pre-click count stays on screen, deliberately: there is no
    /// optimistic update to roll back and no error UI.
    pub async fn press(&mut self) {
        if self.state == WidgetState::Loading {
            return;
        }
        self.state = WidgetState::Loading;

        match self.backend.increment(&self.post_id).await {
            Ok(likes) => self.likes = likes,
            Err(e) => {
                warn!(post_id = %self.post_id, error = %e, "like increment failed, keeping displayed count");
            }
        }

        self.state = WidgetState::Idle;
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn is_busy(&self) -> bool {
        self.state == WidgetState::Loading
    }

    /// Rendered button text: the count, or a busy indicator mid-increment.
    pub fn label(&self) -> String {
        if self.is_busy() {
            "Like (...)".to_string()
        } else {
            format!("Like ({})", self.likes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WidgetError;
    use crate::store::MockCounterBackend;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn mount_initializes_count_from_backend() {
        let mut backend = MockCounterBackend::new();
        backend
            .expect_fetch()
            .with(eq("42"))
            .times(1)
            .returning(|_| Ok(7));

        let mut button = LikeButton::new("42", Arc::new(backend));
        button.mount().await;

        assert_eq!(button.likes(), 7);
        assert_eq!(button.label(), "Like (7)");
    }

    #[tokio::test]
    async fn mount_failure_keeps_default_zero_and_does_not_retry() {
        let mut backend = MockCounterBackend::new();
        backend
            .expect_fetch()
            .times(1)
            .returning(|_| Err(WidgetError::Status(500)));

        let mut button = LikeButton::new("42", Arc::new(backend));
        button.mount().await;

        assert_eq!(button.likes(), 0);
        assert!(!button.is_busy());
    }

    #[tokio::test]
    async fn press_updates_count_from_backend_value() {
        let mut backend = MockCounterBackend::new();
        backend
            .expect_increment()
            .with(eq("42"))
            .times(1)
            .returning(|_| Ok(1));

        let mut button = LikeButton::new("42", Arc::new(backend));
        button.press().await;

        assert_eq!(button.likes(), 1);
        assert!(!button.is_busy());
    }

    #[tokio::test]
    async fn failed_press_keeps_the_preclick_count() {
        let mut backend = MockCounterBackend::new();
        backend.expect_fetch().returning(|_| Ok(3));
        backend
            .expect_increment()
            .times(1)
            .returning(|_| Err(WidgetError::Status(503)));

        let mut button = LikeButton::new("42", Arc::new(backend));
        button.mount().await;
        button.press().await;

        // No rollback and no error state, just the stale count.
        assert_eq!(button.likes(), 3);
        assert!(!button.is_busy());
    }

    #[tokio::test]
    async fn press_is_dropped_while_loading() {
        let mut backend = MockCounterBackend::new();
        backend.expect_increment().times(0);

        let mut button = LikeButton::new("42", Arc::new(backend));
        button.state = WidgetState::Loading;
        button.press().await;

        assert!(button.is_busy());
    }

    #[tokio::test]
    async fn widget_routes_every_operation_to_its_injected_backend() {
        // Mode isolation: one mount and two presses must account for every
        // backend call the widget makes.
        let mut backend = MockCounterBackend::new();
        backend.expect_fetch().times(1).returning(|_| Ok(0));
        let mut count = 0u64;
        backend.expect_increment().times(2).returning(move |_| {
            count += 1;
            Ok(count)
        });

        let mut button = LikeButton::new("42", Arc::new(backend));
        button.mount().await;
        button.press().await;
        button.press().await;

        assert_eq!(button.likes(), 2);
    }
}
