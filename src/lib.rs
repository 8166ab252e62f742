//! # Cosmos Feed
//!
//! Browse a paginated spaceflight news feed, bookmark articles locally and
//! share them.
//!
//! ## Architecture
//!
//! ```text
//! ArticleRepository ─┐
//!                    ├─> Controllers ─> presentation
//! BookmarkStore ─────┤
//! Sharer ────────────┘
//! ```
//!
//! - [`fetcher`]: remote article pages by offset/limit
//! - [`store`]: key-value persistence and the saved-article list
//! - [`share`]: platform share hand-off
//! - [`controller`]: view-state machines for the feed, cards, details and
//!   favorites screens
//!
//! ## Quick Start
//!
//! ```bash
//! # First two pages of the feed
//! cosmos-feed feed --pages 2
//!
//! # Bookmark an article, then list bookmarks
//! cosmos-feed toggle 24518
//! cosmos-feed saved
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) builds the repository, bookmark store and
/// sharer once and hands them to controllers.
pub mod app;

/// Command-line host.
pub mod cli;

/// TOML configuration from `~/.config/cosmos-feed/config.toml`.
pub mod config;

/// Feed, card, detail and favorites view-state.
///
/// - [`FeedController`](controller::FeedController): offset pagination with
///   refresh, retry and guarded load-more
/// - [`ArticleActionsController`](controller::ArticleActionsController):
///   saved indicator, save toggle, share
pub mod controller;

/// Core domain models.
pub mod domain;

/// Article API access.
///
/// - [`ArticleRepository`](fetcher::ArticleRepository): async trait
/// - [`HttpArticleRepository`](fetcher::HttpArticleRepository): reqwest-based implementation
pub mod fetcher;

pub mod share;

/// Persistence.
///
/// - [`KeyValueStore`](store::KeyValueStore): async string key-value trait
/// - [`SqliteKeyValueStore`](store::SqliteKeyValueStore): SQLite implementation
/// - [`BookmarkStore`](store::BookmarkStore): saved articles as one JSON document
pub mod store;
