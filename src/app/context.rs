use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app::error::{CosmosError, Result};
use crate::config::Config;
use crate::controller::{
    ArticleActionsController, DetailsController, FavoritesController, FeedController,
};
use crate::domain::{Article, DetailsParams};
use crate::fetcher::{ArticleRepository, HttpArticleRepository};
use crate::share::{ConsoleSharer, Sharer};
use crate::store::{BookmarkStore, KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};

/// Process-wide collaborators, built once and handed to each controller.
pub struct AppContext {
    pub config: Config,
    pub repository: Arc<dyn ArticleRepository>,
    pub bookmarks: Arc<BookmarkStore>,
    pub sharer: Arc<dyn Sharer>,
}

impl AppContext {
    /// Load config from `config_path` (or the default location) and build
    /// the SQLite-backed context.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Self::new(config)
    }

    pub fn new(config: Config) -> Result<Self> {
        let db_path = match &config.storage.database_path {
            Some(p) => p.clone(),
            None => Self::default_db_path()?,
        };
        let backend: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new(&db_path)?);
        Self::with_backend(config, backend)
    }

    pub fn in_memory(config: Config) -> Result<Self> {
        Self::with_backend(config, Arc::new(MemoryKeyValueStore::new()))
    }

    fn with_backend(config: Config, backend: Arc<dyn KeyValueStore>) -> Result<Self> {
        let repository: Arc<dyn ArticleRepository> =
            Arc::new(HttpArticleRepository::new(&config.api)?);
        let bookmarks = Arc::new(BookmarkStore::with_key(
            backend,
            config.storage.bookmarks_key.clone(),
        ));
        let sharer: Arc<dyn Sharer> = Arc::new(ConsoleSharer);

        Ok(Self {
            config,
            repository,
            bookmarks,
            sharer,
        })
    }

    pub fn feed_controller(&self) -> FeedController {
        FeedController::new(self.repository.clone())
    }

    pub fn favorites_controller(&self) -> FavoritesController {
        FavoritesController::new(self.bookmarks.clone())
    }

    /// A card controller whose saved flag has already been read.
    pub async fn article_actions(&self, article: Article) -> ArticleActionsController {
        let actions =
            ArticleActionsController::new(article, self.bookmarks.clone(), self.sharer.clone());
        actions.mount().await;
        actions
    }

    /// A card on the favorites screen; toggling it reloads `favorites`.
    pub async fn favorites_card(
        &self,
        article: Article,
        favorites: &Arc<FavoritesController>,
    ) -> ArticleActionsController {
        let actions =
            ArticleActionsController::new(article, self.bookmarks.clone(), self.sharer.clone())
                .with_on_save_toggle(favorites.reload_on_toggle());
        actions.mount().await;
        actions
    }

    pub async fn details_controller(&self, params: DetailsParams) -> DetailsController {
        let details = DetailsController::new(params, self.bookmarks.clone(), self.sharer.clone());
        details.mount().await;
        details
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| CosmosError::Other("Could not find data directory".into()))?;
        let app_dir = data_dir.join("cosmos-feed");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("cosmos_feed.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::domain::article::sample_article;

    #[tokio::test]
    async fn test_controllers_share_one_bookmark_store() {
        let ctx = AppContext::in_memory(Config::default()).unwrap();

        let card = ctx.article_actions(sample_article(1)).await;
        card.handle_save().await;

        let favorites = ctx.favorites_controller();
        favorites.on_focus().await;
        assert_eq!(favorites.state().saved_articles.len(), 1);

        let details = ctx
            .details_controller(DetailsParams::from(&sample_article(1)))
            .await;
        assert!(details.is_saved());
    }

    #[tokio::test]
    async fn test_factories_return_mounted_controllers() {
        let ctx = AppContext::in_memory(Config::default()).unwrap();
        ctx.bookmarks.add(&sample_article(7)).await.unwrap();

        assert!(ctx.article_actions(sample_article(7)).await.is_saved());
        assert!(!ctx.article_actions(sample_article(8)).await.is_saved());
    }

    #[tokio::test]
    async fn test_favorites_card_reloads_screen() {
        let ctx = AppContext::in_memory(Config::default()).unwrap();
        ctx.bookmarks.add(&sample_article(1)).await.unwrap();
        ctx.bookmarks.add(&sample_article(2)).await.unwrap();

        let favorites = Arc::new(ctx.favorites_controller());
        favorites.on_focus().await;

        let card = ctx.favorites_card(sample_article(2), &favorites).await;
        assert!(card.is_saved());
        card.handle_save().await;

        assert_eq!(favorites.state().saved_articles, vec![sample_article(1)]);
    }

    #[tokio::test]
    async fn test_sqlite_backend_at_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            storage: StorageConfig {
                database_path: Some(dir.path().join("bookmarks.db")),
                bookmarks_key: "test_key".into(),
            },
            ..Default::default()
        };

        {
            let ctx = AppContext::new(config.clone()).unwrap();
            ctx.bookmarks.add(&sample_article(2)).await.unwrap();
        }

        let ctx = AppContext::new(config).unwrap();
        assert!(ctx.bookmarks.contains(2).await);
        assert_eq!(ctx.bookmarks.key(), "test_key");
    }

    #[test]
    fn test_load_reports_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = AppContext::load(Some(path.as_path())).err().unwrap();
        assert!(matches!(err, CosmosError::Config(_)));
    }
}
