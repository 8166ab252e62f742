use futures::future::join_all;

use crate::app::{AppContext, CosmosError, Result};
use crate::controller::{DetailsController, FeedState};
use crate::domain::{Article, DetailsParams};

/// Initial load plus up to `pages - 1` load-mores.
async fn load_feed(ctx: &AppContext, pages: usize) -> Result<FeedState> {
    let controller = ctx.feed_controller();
    controller.mount().await;

    if let Some(error) = controller.state().error {
        return Err(CosmosError::Fetch(error));
    }

    for _ in 1..pages {
        if !controller.state().has_more {
            break;
        }
        controller.load_more_articles().await;
    }

    Ok(controller.state())
}

/// Look the article up among saved ones first, then in the feed.
async fn find_article(ctx: &AppContext, id: i64, pages: usize) -> Result<Article> {
    if let Some(article) = ctx.bookmarks.list().await.into_iter().find(|a| a.id == id) {
        return Ok(article);
    }

    load_feed(ctx, pages)
        .await?
        .articles
        .into_iter()
        .find(|a| a.id == id)
        .ok_or(CosmosError::ArticleNotFound(id))
}

pub async fn show_feed(ctx: &AppContext, pages: usize) -> Result<()> {
    let state = load_feed(ctx, pages).await?;

    if state.articles.is_empty() {
        println!("No articles");
        return Ok(());
    }

    let cards = join_all(
        state
            .articles
            .into_iter()
            .map(|article| ctx.article_actions(article)),
    )
    .await;

    for card in &cards {
        let article = card.article();
        let marker = if card.is_saved() { "*" } else { " " };
        println!(
            "{} [{}] {} - {}\n    {}",
            marker,
            article.id,
            DetailsController::format_date(&article.published_at),
            article.title,
            article.news_site
        );
    }

    if state.has_more {
        println!("\n(more available, use --pages to load further)");
    }

    Ok(())
}

pub async fn list_saved(ctx: &AppContext) -> Result<()> {
    let favorites = ctx.favorites_controller();
    favorites.on_focus().await;
    let saved = favorites.state().saved_articles;

    if saved.is_empty() {
        println!("No saved articles");
        return Ok(());
    }

    for article in saved {
        println!("[{}] {}\n    {}", article.id, article.title, article.url);
    }

    Ok(())
}

pub async fn toggle_saved(ctx: &AppContext, id: i64, pages: usize) -> Result<()> {
    let article = find_article(ctx, id, pages).await?;
    let actions = ctx.article_actions(article).await;

    let notice = actions.handle_save().await;
    if notice.is_error() {
        return Err(CosmosError::Storage(notice.message.to_string()));
    }

    println!("{}", notice);
    Ok(())
}

pub async fn share(ctx: &AppContext, id: i64, pages: usize) -> Result<()> {
    let article = find_article(ctx, id, pages).await?;

    if let Some(notice) = ctx.article_actions(article).await.handle_share().await {
        return Err(CosmosError::Share(notice.message.to_string()));
    }

    Ok(())
}

pub async fn open_article(ctx: &AppContext, id: i64, pages: usize) -> Result<()> {
    let article = find_article(ctx, id, pages).await?;
    ctx.details_controller(DetailsParams::from(&article))
        .await
        .handle_read_more()
}
