use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use feed_loader::app::AppContext;
use feed_loader::cli::{commands, Cli, Commands};
use feed_loader::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_config_path()?,
    };
    let ctx = AppContext::new(Config::load_from(&config_path)?)?;

    match cli.command {
        Commands::Load { url, json } => {
            commands::load_feed(&ctx, url.as_deref(), json).await?;
        }
        Commands::Config => {
            commands::show_config(&ctx, &config_path)?;
        }
    }

    Ok(())
}
