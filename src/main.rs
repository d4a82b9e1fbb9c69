use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use prodcat::config::{Config, ConfigStore};
use prodcat::logging;
use prodcat::ui::runtime;

/// Terminal product catalog manager.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the catalog API base URL.
    #[arg(long)]
    api_url: Option<String>,

    /// Override the default rows per page.
    #[arg(long)]
    page_size: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }
    if let Some(page_size) = cli.page_size {
        config.table.page_size = page_size;
    }
    config.validate().context("validating config")?;

    tracing::info!(api_base = %config.api.base_url, "Starting prodcat");
    runtime::run(ConfigStore::new(config))
}
