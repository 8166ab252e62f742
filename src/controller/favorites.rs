use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt};
use tracing::debug;

use crate::domain::Article;
use crate::store::BookmarkStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesState {
    pub saved_articles: Vec<Article>,
    pub refreshing: bool,
}

/// Saved-articles screen. Reloads on every focus so removals made from a
/// card elsewhere show up.
pub struct FavoritesController {
    bookmarks: Arc<BookmarkStore>,
    state: Mutex<FavoritesState>,
    disposed: AtomicBool,
}

impl FavoritesController {
    pub fn new(bookmarks: Arc<BookmarkStore>) -> Self {
        Self {
            bookmarks,
            state: Mutex::new(FavoritesState::default()),
            disposed: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> FavoritesState {
        self.lock().clone()
    }

    pub async fn load_saved_articles(&self) {
        let articles = self.bookmarks.list().await;
        if self.is_disposed() {
            debug!("Discarding saved articles after dispose");
            return;
        }
        self.lock().saved_articles = articles;
    }

    /// Listener for cards shown on this screen: reloads the list once a
    /// toggle has been persisted.
    pub fn reload_on_toggle(
        self: &Arc<Self>,
    ) -> impl Fn() -> BoxFuture<'static, ()> + Send + Sync + 'static {
        let favorites = Arc::clone(self);
        move || {
            let favorites = Arc::clone(&favorites);
            async move { favorites.load_saved_articles().await }.boxed()
        }
    }

    pub async fn on_focus(&self) {
        self.load_saved_articles().await;
    }

    pub async fn handle_refresh(&self) {
        self.lock().refreshing = true;
        self.load_saved_articles().await;
        self.lock().refreshing = false;
    }

    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, FavoritesState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
