use anyhow::Result;
use clap::Parser;
use gradient_feed::clipboard::{Clipboard, DisabledClipboard, SystemClipboard};
use gradient_feed::config::Config;
use gradient_feed::feed::FeedStore;
use gradient_feed::{logger, ui};
use std::path::PathBuf;

/// A terminal social feed with gradient palette posts
#[derive(Parser, Debug)]
#[command(name = "gradient-feed", version, about)]
struct Cli {
    /// Configuration file to use instead of the default search path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a default configuration file to PATH and exit
    #[arg(long, value_name = "PATH")]
    generate_config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let logger = logger::init(&config.logging)?;

    let store = match &config.feed.seed_file {
        Some(path) => FeedStore::from_seed_file(path)?,
        None => FeedStore::initial(),
    };

    let clipboard: Box<dyn Clipboard> = if config.clipboard.enabled {
        Box::new(SystemClipboard)
    } else {
        log::info!("Clipboard disabled by configuration");
        Box::new(DisabledClipboard)
    };

    ui::run_app(config, store, logger, clipboard).await
}
