pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cosmos-feed")]
#[command(about = "Browse and bookmark spaceflight news", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/cosmos-feed/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the article feed
    Feed {
        /// Number of pages to load
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },
    /// List saved articles
    Saved,
    /// Save or unsave an article from the feed
    Toggle {
        /// Article id
        id: i64,

        /// Number of feed pages to search
        #[arg(short, long, default_value_t = 3)]
        pages: usize,
    },
    /// Print the share message for an article
    Share {
        id: i64,

        #[arg(short, long, default_value_t = 3)]
        pages: usize,
    },
    /// Open an article in the browser
    Open {
        id: i64,

        #[arg(short, long, default_value_t = 3)]
        pages: usize,
    },
}
