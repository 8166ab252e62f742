use serde::{Deserialize, Serialize};

use super::Article;

/// Data carried when navigating from a card to the detail view.
///
/// `news_site` and `updated_at` are not part of the payload, so an article
/// rebuilt from it has both set to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsParams {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub image_url: String,
    pub url: String,
    pub published_at: String,
}

impl DetailsParams {
    pub fn to_article(&self) -> Article {
        Article {
            id: self.id,
            title: self.title.clone(),
            url: self.url.clone(),
            image_url: self.image_url.clone(),
            news_site: String::new(),
            summary: self.summary.clone(),
            published_at: self.published_at.clone(),
            updated_at: String::new(),
        }
    }
}

impl From<&Article> for DetailsParams {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            summary: article.summary.clone(),
            image_url: article.image_url.clone(),
            url: article.url.clone(),
            published_at: article.published_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::sample_article;

    #[test]
    fn test_round_trip_drops_site_and_updated_at() {
        let original = sample_article(7);
        let rebuilt = DetailsParams::from(&original).to_article();

        assert_eq!(rebuilt.id, 7);
        assert_eq!(rebuilt.title, original.title);
        assert_eq!(rebuilt.image_url, original.image_url);
        assert_eq!(rebuilt.published_at, original.published_at);
        assert_eq!(rebuilt.news_site, "");
        assert_eq!(rebuilt.updated_at, "");
        assert_ne!(rebuilt, original);
    }

    #[test]
    fn test_params_use_camel_case_keys() {
        let params = DetailsParams::from(&sample_article(3));
        let json = serde_json::to_value(&params).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("publishedAt").is_some());
    }
}
