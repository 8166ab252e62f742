use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::app::{CosmosError, Result};
use crate::domain::article::sample_article;
use crate::domain::Article;
use crate::fetcher::{ArticleRepository, FETCH_FAILED};

/// Serves `total` sequential articles sliced by offset/limit.
///
/// With `gated`, each fetch blocks until [`release`](Self::release) is called
/// for its offset.
#[derive(Default)]
pub struct PagedRepository {
    total: AtomicUsize,
    fail: AtomicBool,
    gated: bool,
    calls: Mutex<Vec<(usize, usize)>>,
    gates: Mutex<HashMap<usize, Arc<Notify>>>,
}

impl PagedRepository {
    pub fn with_total(total: usize) -> Self {
        let repo = Self::default();
        repo.set_total(total);
        repo
    }

    pub fn gated(total: usize) -> Self {
        let repo = Self {
            gated: true,
            ..Default::default()
        };
        repo.set_total(total);
        repo
    }

    pub fn set_total(&self, total: usize) {
        self.total.store(total, Ordering::SeqCst);
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// `(limit, offset)` of every fetch, in call order.
    pub fn calls(&self) -> Vec<(usize, usize)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn release(&self, offset: usize) {
        self.gate(offset).notify_one();
    }

    fn gate(&self, offset: usize) -> Arc<Notify> {
        self.gates
            .lock()
            .unwrap()
            .entry(offset)
            .or_insert_with(|| Arc::new(Notify::new()))
            .clone()
    }

    fn page(&self, limit: usize, offset: usize) -> Vec<Article> {
        let total = self.total.load(Ordering::SeqCst);
        let end = (offset + limit).min(total);
        (offset..end).map(|i| sample_article(i as i64 + 1)).collect()
    }
}

#[async_trait]
impl ArticleRepository for PagedRepository {
    async fn fetch_articles(&self, limit: usize, offset: usize) -> Result<Vec<Article>> {
        self.calls.lock().unwrap().push((limit, offset));

        if self.gated {
            let gate = self.gate(offset);
            gate.notified().await;
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(CosmosError::Fetch(FETCH_FAILED.to_string()));
        }
        Ok(self.page(limit, offset))
    }
}
