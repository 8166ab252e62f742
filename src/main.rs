use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cosmos_feed::app::AppContext;
use cosmos_feed::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Feed { pages } => {
            commands::show_feed(&ctx, pages).await?;
        }
        Commands::Saved => {
            commands::list_saved(&ctx).await?;
        }
        Commands::Toggle { id, pages } => {
            commands::toggle_saved(&ctx, id, pages).await?;
        }
        Commands::Share { id, pages } => {
            commands::share(&ctx, id, pages).await?;
        }
        Commands::Open { id, pages } => {
            commands::open_article(&ctx, id, pages).await?;
        }
    }

    Ok(())
}
