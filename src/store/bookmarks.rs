//! Saved-article list persisted as a single JSON document.
//!
//! Every mutation reads the whole list, changes it, and writes the whole list
//! back under one key. The read and the write are separate backend calls, so
//! two overlapping mutations can lose one of the updates; the list is small
//! and edited by one user, and no lock is taken here.
//!
//! Reads fail soft: a missing, unreadable or corrupt document is an empty
//! list. Writes fail hard with [`CosmosError::Storage`].

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::app::{CosmosError, Result};
use crate::config::DEFAULT_BOOKMARKS_KEY;
use crate::domain::Article;
use crate::store::KeyValueStore;

pub const SAVE_FAILED: &str = "Failed to save article";
pub const REMOVE_FAILED: &str = "Failed to remove article";

pub struct BookmarkStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl BookmarkStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(backend, DEFAULT_BOOKMARKS_KEY)
    }

    pub fn with_key(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// All saved articles in insertion order; empty on any read failure.
    pub async fn list(&self) -> Vec<Article> {
        match self.read().await {
            Ok(articles) => articles,
            Err(e) => {
                warn!(
                    key = %self.key,
                    error = %e,
                    "Failed to read saved articles, treating as empty"
                );
                Vec::new()
            }
        }
    }

    pub async fn contains(&self, id: i64) -> bool {
        self.list().await.iter().any(|a| a.id == id)
    }

    /// Append `article` unless an entry with its id exists. A duplicate add
    /// performs no write.
    pub async fn add(&self, article: &Article) -> Result<()> {
        let mut articles = self.list().await;

        if articles.iter().any(|a| a.same_entry(article)) {
            debug!(id = article.id, "Article already saved, skipping write");
            return Ok(());
        }

        articles.push(article.clone());
        self.write(&articles).await.map_err(|e| {
            warn!(id = article.id, error = %e, "Failed to persist saved article");
            CosmosError::Storage(SAVE_FAILED.to_string())
        })?;

        info!(id = article.id, total = articles.len(), "Saved article");
        Ok(())
    }

    /// Drop the entry with `id`. The list is written back even when nothing
    /// matched.
    pub async fn remove(&self, id: i64) -> Result<()> {
        let mut articles = self.list().await;
        let before = articles.len();
        articles.retain(|a| a.id != id);

        self.write(&articles).await.map_err(|e| {
            warn!(id, error = %e, "Failed to persist article removal");
            CosmosError::Storage(REMOVE_FAILED.to_string())
        })?;

        info!(id, removed = before - articles.len(), "Removed saved article");
        Ok(())
    }

    async fn read(&self) -> Result<Vec<Article>> {
        match self.backend.get_item(&self.key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn write(&self, articles: &[Article]) -> Result<()> {
        let raw = serde_json::to_string(articles)?;
        self.backend.set_item(&self.key, &raw).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::store::MemoryKeyValueStore;

    /// Memory backend whose reads and writes can be switched to fail.
    #[derive(Default)]
    pub struct FlakyStore {
        pub inner: MemoryKeyValueStore,
        pub fail_reads: AtomicBool,
        pub fail_writes: AtomicBool,
        pub write_attempts: AtomicUsize,
    }

    impl FlakyStore {
        pub fn set_fail_reads(&self, fail: bool) {
            self.fail_reads.store(fail, Ordering::SeqCst);
        }

        pub fn set_fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl KeyValueStore for FlakyStore {
        async fn get_item(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(CosmosError::Storage("read failed".into()));
            }
            self.inner.get_item(key).await
        }

        async fn set_item(&self, key: &str, value: &str) -> Result<()> {
            self.write_attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(CosmosError::Storage("disk full".into()));
            }
            self.inner.set_item(key, value).await
        }
    }
}
