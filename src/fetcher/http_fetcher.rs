use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::app::{CosmosError, Result};
use crate::config::ApiConfig;
use crate::domain::{Article, ArticlePage};
use crate::fetcher::{ArticleRepository, FETCH_FAILED};

pub struct HttpArticleRepository {
    client: Client,
    base_url: String,
}

impl HttpArticleRepository {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn articles_url(&self, limit: usize, offset: usize) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/articles/", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        Ok(url)
    }

    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<ArticlePage> {
        let url = self.articles_url(limit, offset)?;
        debug!(%url, "Requesting article page");

        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ArticleRepository for HttpArticleRepository {
    async fn fetch_articles(&self, limit: usize, offset: usize) -> Result<Vec<Article>> {
        match self.fetch_page(limit, offset).await {
            Ok(page) => Ok(page.results),
            Err(e) => {
                warn!(limit, offset, error = %e, "Article fetch failed");
                Err(CosmosError::Fetch(FETCH_FAILED.to_string()))
            }
        }
    }
}
