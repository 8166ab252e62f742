//! Save and share actions for one article, shared by list cards and the
//! detail view.
//!
//! `is_saved` mirrors the bookmark store only as of the last
//! [`mount`](ArticleActionsController::mount) or
//! [`refresh_saved`](ArticleActionsController::refresh_saved); hosts call the
//! latter every time the view regains focus, because the list can be edited
//! from another screen.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, warn};

use crate::controller::{
    Notice, REMOVED_MESSAGE, SAVED_MESSAGE, SAVE_FAILED_MESSAGE, SHARE_FAILED_MESSAGE,
};
use crate::domain::Article;
use crate::share::{share_article, Sharer};
use crate::store::BookmarkStore;

/// Awaited after a save toggle has been persisted.
pub type SaveToggleListener = Box<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

pub struct ArticleActionsController {
    article: Article,
    bookmarks: Arc<BookmarkStore>,
    sharer: Arc<dyn Sharer>,
    is_saved: AtomicBool,
    on_save_toggle: Option<SaveToggleListener>,
    disposed: AtomicBool,
}

impl ArticleActionsController {
    pub fn new(article: Article, bookmarks: Arc<BookmarkStore>, sharer: Arc<dyn Sharer>) -> Self {
        Self {
            article,
            bookmarks,
            sharer,
            is_saved: AtomicBool::new(false),
            on_save_toggle: None,
            disposed: AtomicBool::new(false),
        }
    }

    pub fn with_on_save_toggle<F, Fut>(mut self, listener: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.on_save_toggle = Some(Box::new(move || listener().boxed()));
        self
    }

    /// Check the bookmark store once so `is_saved` is right before first use.
    pub async fn mount(&self) {
        self.refresh_saved().await;
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn is_saved(&self) -> bool {
        self.is_saved.load(Ordering::SeqCst)
    }

    /// Re-read the saved flag from the bookmark store.
    pub async fn refresh_saved(&self) -> bool {
        let saved = self.bookmarks.contains(self.article.id).await;
        if self.is_disposed() {
            return saved;
        }
        self.is_saved.store(saved, Ordering::SeqCst);
        saved
    }

    /// Toggle the bookmark. The flag only flips once the write succeeded.
    pub async fn handle_save(&self) -> Notice {
        let was_saved = self.is_saved();

        let result = if was_saved {
            self.bookmarks.remove(self.article.id).await
        } else {
            self.bookmarks.add(&self.article).await
        };

        if let Err(e) = result {
            warn!(id = self.article.id, error = %e, "Save toggle failed");
            return Notice::error(SAVE_FAILED_MESSAGE);
        }

        if self.is_disposed() {
            debug!(id = self.article.id, "Save toggle finished after dispose");
        } else {
            self.is_saved.store(!was_saved, Ordering::SeqCst);
            if let Some(listener) = &self.on_save_toggle {
                listener().await;
            }
        }

        if was_saved {
            Notice::success(REMOVED_MESSAGE)
        } else {
            Notice::success(SAVED_MESSAGE)
        }
    }

    /// Share through the platform sheet. Returns a notice only on failure.
    pub async fn handle_share(&self) -> Option<Notice> {
        match share_article(self.sharer.as_ref(), &self.article).await {
            Ok(_) => None,
            Err(_) => Some(Notice::error(SHARE_FAILED_MESSAGE)),
        }
    }

    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}
