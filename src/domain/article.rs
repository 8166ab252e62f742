use serde::{Deserialize, Serialize};

/// An article as returned by the remote feed. Never mutated after fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub image_url: String,
    pub news_site: String,
    pub summary: String,
    pub published_at: String,
    pub updated_at: String,
}

impl Article {
    /// Identity used for deduplication; two articles are the same entry iff ids match.
    pub fn same_entry(&self, other: &Article) -> bool {
        self.id == other.id
    }
}

/// One page of the `/articles/` listing.
///
/// Only `results` drives pagination; the remaining fields are carried for
/// completeness of the wire shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticlePage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Article>,
}

#[cfg(test)]
pub(crate) fn sample_article(id: i64) -> Article {
    Article {
        id,
        title: format!("Article {}", id),
        url: format!("https://example.com/articles/{}", id),
        image_url: format!("https://example.com/images/{}.jpg", id),
        news_site: "Example News".into(),
        summary: format!("Summary of article {}", id),
        published_at: "2024-01-05T10:00:00Z".into(),
        updated_at: "2024-01-05T12:00:00Z".into(),
    }
}
