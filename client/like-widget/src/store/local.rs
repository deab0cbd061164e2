//! Local counter store (the static-mode counter proxy).
//!
//! Renders the browser-localStorage contract as per-user files: one file per
//! key, file name `likes_<identifier>`, content the string-encoded count.
//! Data is private to one user profile and survives restarts, but is never
//! shared across devices or users.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{Result, WidgetError};

use super::CounterBackend;

#[derive(Debug)]
pub struct LocalCounter {
    dir: PathBuf,
}

impl LocalCounter {
    /// Counter files under the platform data directory.
    pub fn new() -> Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| {
            WidgetError::Storage(std::io::Error::new(
                ErrorKind::NotFound,
                "no platform data directory",
            ))
        })?;
        Self::with_dir(base.join("like-widget"))
    }

    /// Counter files under an explicit directory.
    pub fn with_dir(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, post_id: &str) -> PathBuf {
        self.dir.join(format!("likes_{post_id}"))
    }

    fn read_count(&self, post_id: &str) -> Result<u64> {
        match fs::read_to_string(self.key_path(post_id)) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| WidgetError::Parse(raw)),
            // Absent key means the post was never liked here.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn write_count(&self, post_id: &str, count: u64) -> Result<()> {
        fs::write(self.key_path(post_id), count.to_string())?;
        Ok(())
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
impl CounterBackend for LocalCounter {
    async fn fetch(&self, post_id: &str) -> Result<u64> {
        validate(post_id)?;
        self.read_count(post_id)
    }

    async fn increment(&self, post_id: &str) -> Result<u64> {
        validate(post_id)?;
        let next = self.read_count(post_id)? + 1;
        self.write_count(post_id, next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (tempfile::TempDir, LocalCounter) {
        let dir = tempfile::tempdir().expect("tempdir");
        let counter = LocalCounter::with_dir(dir.path().to_path_buf()).expect("counter");
        (dir, counter)
    }

    #[tokio::test]
    async fn absent_key_reads_as_zero() {
        let (_dir, counter) = counter();
        assert_eq!(counter.fetch("7").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn first_increment_persists_string_one_under_likes_key() {
        let (dir, counter) = counter();
        assert_eq!(counter.increment("7").await.unwrap(), 1);

        let stored = std::fs::read_to_string(dir.path().join("likes_7")).unwrap();
        assert_eq!(stored, "1");
    }

    #[tokio::test]
    async fn counts_survive_a_new_instance_over_the_same_directory() {
        let (dir, counter) = counter();
        counter.increment("7").await.unwrap();
        counter.increment("7").await.unwrap();
        drop(counter);

        let reopened = LocalCounter::with_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.fetch("7").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn empty_identifier_is_rejected() {
        let (_dir, counter) = counter();
        assert!(matches!(
            counter.increment("").await,
            Err(WidgetError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn garbage_stored_value_surfaces_as_parse_error() {
        let (dir, counter) = counter();
        std::fs::write(dir.path().join("likes_9"), "not-a-number").unwrap();
        assert!(matches!(
            counter.fetch("9").await,
            Err(WidgetError::Parse(_))
        ));
    }
}
