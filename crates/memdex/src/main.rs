mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Mode};
use memdex_core::Config;
use memdex_store::IndexStore;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries the JSON results, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MEMDEX_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(&Config::default_path());
    if let Some(dir) = &cli.index_dir {
        config.index_dir = dir.clone();
    }

    let store = IndexStore::new(&config.index_dir);
    store.ensure_ready()?;

    let days = cli.days.unwrap_or(config.default_days);
    tracing::debug!(index_dir = %config.index_dir.display(), days, "resolved configuration");

    match cli.mode() {
        Mode::Search(query) => commands::search::run(store, &query, days),
        Mode::Sentiment(tag) => commands::sentiment::run(store, &tag, days),
        Mode::Generate(date) => commands::generate::run(date.as_deref()),
        Mode::Usage => commands::usage::run(),
    }
}
