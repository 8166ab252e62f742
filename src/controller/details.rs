use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::info;

use crate::app::Result;
use crate::controller::{ArticleActionsController, Notice};
use crate::domain::DetailsParams;
use crate::share::Sharer;
use crate::store::BookmarkStore;

/// Detail view built from navigation params alone, without a second fetch.
pub struct DetailsController {
    params: DetailsParams,
    actions: ArticleActionsController,
}

impl DetailsController {
    pub fn new(
        params: DetailsParams,
        bookmarks: Arc<BookmarkStore>,
        sharer: Arc<dyn Sharer>,
    ) -> Self {
        let actions = ArticleActionsController::new(params.to_article(), bookmarks, sharer);
        Self { params, actions }
    }

    pub async fn mount(&self) {
        self.actions.mount().await;
    }

    pub fn is_saved(&self) -> bool {
        self.actions.is_saved()
    }

    pub async fn refresh_saved(&self) -> bool {
        self.actions.refresh_saved().await
    }

    pub async fn handle_save(&self) -> Notice {
        self.actions.handle_save().await
    }

    pub async fn handle_share(&self) -> Option<Notice> {
        self.actions.handle_share().await
    }

    /// Open the full article in the system browser.
    pub fn handle_read_more(&self) -> Result<()> {
        info!(url = %self.params.url, "Opening article");
        open::that(&self.params.url)?;
        Ok(())
    }

    pub fn published_date(&self) -> String {
        Self::format_date(&self.params.published_at)
    }

    /// Render an ISO-8601 timestamp as e.g. `January 5, 2024`, using the date
    /// as written in the timestamp. Unparseable input is returned unchanged.
    pub fn format_date(value: &str) -> String {
        let date = DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.date_naive())
            .or_else(|_| {
                NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
            })
            .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"));

        match date {
            Ok(date) => date.format("%B %-d, %Y").to_string(),
            Err(_) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{REMOVED_MESSAGE, SAVED_MESSAGE};
    use crate::domain::article::sample_article;
    use crate::share::format_share_message;
    use crate::share::testing::RecordingSharer;
    use crate::store::MemoryKeyValueStore;

    fn params() -> DetailsParams {
        DetailsParams::from(&sample_article(9))
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(
            DetailsController::format_date("2024-01-05T10:00:00Z"),
            "January 5, 2024"
        );
        assert_eq!(
            DetailsController::format_date("2023-12-31T23:30:00.123+02:00"),
            "December 31, 2023"
        );
        assert_eq!(
            DetailsController::format_date("2024-03-09T08:15:00"),
            "March 9, 2024"
        );
        assert_eq!(DetailsController::format_date("2024-07-04"), "July 4, 2024");
        assert_eq!(DetailsController::format_date("yesterday"), "yesterday");
    }

    #[tokio::test]
    async fn test_save_persists_reconstructed_article() {
        let store = Arc::new(BookmarkStore::new(Arc::new(MemoryKeyValueStore::new())));
        let details = DetailsController::new(
            params(),
            store.clone(),
            Arc::new(RecordingSharer::default()),
        );
        assert!(!details.refresh_saved().await);

        assert_eq!(details.handle_save().await, Notice::success(SAVED_MESSAGE));
        assert!(details.is_saved());

        let saved = store.list().await;
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, 9);
        assert_eq!(saved[0].news_site, "");
        assert_eq!(saved[0].updated_at, "");

        assert_eq!(details.handle_save().await, Notice::success(REMOVED_MESSAGE));
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_article_saved_from_card_shows_as_saved() {
        let store = Arc::new(BookmarkStore::new(Arc::new(MemoryKeyValueStore::new())));
        store.add(&sample_article(9)).await.unwrap();

        let details = DetailsController::new(
            params(),
            store.clone(),
            Arc::new(RecordingSharer::default()),
        );
        assert!(!details.is_saved());
        details.mount().await;
        assert!(details.is_saved());

        // Unsave removes the full record stored by the card
        details.handle_save().await;
        assert!(!store.contains(9).await);
    }

    #[tokio::test]
    async fn test_share_uses_params() {
        let sharer = Arc::new(RecordingSharer::default());
        let store = Arc::new(BookmarkStore::new(Arc::new(MemoryKeyValueStore::new())));
        let details = DetailsController::new(params(), store, sharer.clone());

        assert!(details.handle_share().await.is_none());
        assert_eq!(
            sharer.shared(),
            vec![format_share_message(&params().to_article())]
        );
    }

    #[test]
    fn test_published_date() {
        let store = Arc::new(BookmarkStore::new(Arc::new(MemoryKeyValueStore::new())));
        let details =
            DetailsController::new(params(), store, Arc::new(RecordingSharer::default()));
        assert_eq!(details.published_date(), "January 5, 2024");
    }
}
