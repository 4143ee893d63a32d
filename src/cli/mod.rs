pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feed-loader")]
#[command(about = "Load and validate a remote JSON feed", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the feed once and print its items
    Load {
        /// Feed URL (defaults to `feed_url` from the config file)
        url: Option<String>,

        /// Print items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the config file location and effective values
    Config,
}
