//! Hand-off of articles to a platform share facility.
//!
//! The host provides a [`Sharer`]; [`share_article`] formats the message,
//! checks availability, and folds every failure into one
//! [`CosmosError::Share`].

use std::io::Write;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::app::{CosmosError, Result};
use crate::domain::Article;

pub const SHARE_FAILED: &str = "Failed to share article";

/// How the user left the share sheet. Both count as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Completed,
    Dismissed,
}

#[async_trait]
pub trait Sharer: Send + Sync {
    async fn is_available(&self) -> bool;
    async fn share(&self, message: &str) -> Result<ShareOutcome>;
}

pub fn format_share_message(article: &Article) -> String {
    format!(
        "{}\n\n{}\n\nRead more: {}",
        article.title, article.summary, article.url
    )
}

pub async fn share_article(sharer: &dyn Sharer, article: &Article) -> Result<ShareOutcome> {
    match try_share(sharer, article).await {
        Ok(outcome) => {
            debug!(id = article.id, ?outcome, "Shared article");
            Ok(outcome)
        }
        Err(e) => {
            warn!(id = article.id, error = %e, "Share failed");
            Err(CosmosError::Share(SHARE_FAILED.to_string()))
        }
    }
}

async fn try_share(sharer: &dyn Sharer, article: &Article) -> Result<ShareOutcome> {
    if !sharer.is_available().await {
        return Err(CosmosError::ShareUnavailable);
    }
    sharer.share(&format_share_message(article)).await
}

/// Writes the share message to stdout; used by the terminal host.
pub struct ConsoleSharer;

#[async_trait]
impl Sharer for ConsoleSharer {
    async fn is_available(&self) -> bool {
        true
    }

    async fn share(&self, message: &str) -> Result<ShareOutcome> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", message)?;
        stdout.flush()?;
        Ok(ShareOutcome::Completed)
    }
}
