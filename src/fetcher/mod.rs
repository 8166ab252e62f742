pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::Article;

pub use http_fetcher::HttpArticleRepository;

/// Message carried by every feed failure, regardless of cause.
pub const FETCH_FAILED: &str = "Failed to fetch articles";

/// Source of article pages, addressed by offset/limit.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Fetch up to `limit` articles starting at `offset`.
    ///
    /// Any transport, status or decoding failure is reported as
    /// [`CosmosError::Fetch`](crate::app::CosmosError::Fetch).
    async fn fetch_articles(&self, limit: usize, offset: usize) -> Result<Vec<Article>>;
}
