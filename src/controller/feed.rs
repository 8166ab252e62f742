//! Paginated home feed.
//!
//! Offsets advance by [`PAGE_SIZE`]; a page shorter than that ends the feed.
//! A page of exactly `PAGE_SIZE` keeps `has_more` set even when it is the
//! last one, so the next load-more fetches an empty page and only then stops.
//!
//! Refresh and load-more are not guarded against each other. A load-more
//! that is in flight when a refresh completes still appends its page to the
//! refreshed list.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::domain::Article;
use crate::fetcher::ArticleRepository;

pub const PAGE_SIZE: usize = 20;
pub const LOAD_FAILED: &str = "Failed to load articles. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    pub articles: Vec<Article>,
    /// Start of the next page to request
    pub offset: usize,
    pub has_more: bool,
    /// Only set by the first load and by retry
    pub loading: bool,
    pub refreshing: bool,
    pub loading_more: bool,
    pub error: Option<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            offset: 0,
            has_more: true,
            loading: true,
            refreshing: false,
            loading_more: false,
            error: None,
        }
    }
}

pub struct FeedController {
    repository: Arc<dyn ArticleRepository>,
    state: Mutex<FeedState>,
    disposed: AtomicBool,
}

impl FeedController {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self {
            repository,
            state: Mutex::new(FeedState::default()),
            disposed: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> FeedState {
        self.lock().clone()
    }

    /// First load when the screen appears.
    pub async fn mount(&self) {
        self.load_articles(false).await;
    }

    /// Pull-to-refresh: refetch the first page and replace the list.
    pub async fn handle_refresh(&self) {
        if self.lock().loading {
            debug!("Refresh ignored during initial load");
            return;
        }
        self.load_articles(true).await;
    }

    pub async fn handle_retry(&self) {
        self.load_articles(false).await;
    }

    /// Fetch the page at the current offset and append it.
    ///
    /// No-op while another load-more or the initial load is in flight, or
    /// once the feed is exhausted. Failures are logged and leave the list as
    /// it was; `error` is not touched.
    pub async fn load_more_articles(&self) {
        if self.is_disposed() {
            return;
        }

        let offset = {
            let mut state = self.lock();
            if state.loading_more || state.loading || !state.has_more {
                debug!(
                    loading_more = state.loading_more,
                    loading = state.loading,
                    has_more = state.has_more,
                    "Load more skipped"
                );
                return;
            }
            state.loading_more = true;
            state.offset
        };

        let result = self.repository.fetch_articles(PAGE_SIZE, offset).await;

        if self.is_disposed() {
            debug!(offset, "Discarding load-more result after dispose");
            return;
        }

        let mut state = self.lock();
        state.loading_more = false;
        match result {
            Ok(articles) => {
                state.has_more = articles.len() == PAGE_SIZE;
                state.offset += PAGE_SIZE;
                let fetched = articles.len();
                state.articles.extend(articles);
                info!(
                    offset,
                    fetched,
                    total = state.articles.len(),
                    has_more = state.has_more,
                    "Loaded more articles"
                );
            }
            Err(e) => {
                warn!(offset, error = %e, "Error loading more articles");
            }
        }
    }

    /// Stop applying results; anything still in flight is dropped on arrival.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    async fn load_articles(&self, is_refresh: bool) {
        if self.is_disposed() {
            return;
        }

        {
            let mut state = self.lock();
            if is_refresh {
                state.refreshing = true;
                state.offset = 0;
                state.has_more = true;
            } else {
                state.loading = true;
            }
        }

        let result = self.repository.fetch_articles(PAGE_SIZE, 0).await;

        if self.is_disposed() {
            debug!(is_refresh, "Discarding load result after dispose");
            return;
        }

        let mut state = self.lock();
        match result {
            Ok(articles) => {
                state.has_more = articles.len() == PAGE_SIZE;
                state.offset = PAGE_SIZE;
                state.articles = articles;
                state.error = None;
                info!(
                    count = state.articles.len(),
                    has_more = state.has_more,
                    is_refresh,
                    "Loaded articles"
                );
            }
            Err(e) => {
                warn!(is_refresh, error = %e, "Failed to load articles");
                state.error = Some(LOAD_FAILED.to_string());
            }
        }
        state.loading = false;
        state.refreshing = false;
    }

    fn lock(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
