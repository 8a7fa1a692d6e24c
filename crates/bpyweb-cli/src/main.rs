mod cli;
mod commands;

use anyhow::{Context, Result};
use bpyweb_core::ApiConfig;
use clap::Parser;
use cli::{Args, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise only warnings
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bpyweb=warn,bpyweb_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Search {
            ref query,
            mode,
            status,
            server,
            page,
            page_size,
            json,
        } => {
            let config = load_config(&args)?;
            let query = bpyweb_core::SearchQuery::new(query.as_deref().unwrap_or_default())
                .mode(mode)
                .server(server)
                .page(page)
                .page_size(page_size);
            let query = match status {
                Some(status) => query.status(status),
                None => query,
            };
            commands::search::run(&config, &query, json)
        }
        Command::Mode { mode, relax } => commands::mode::run(mode, relax),
        Command::Mods { ref input } => commands::mods::run(input),
        Command::Grade {
            mode,
            ref mods,
            n300,
            n100,
            n50,
            miss,
            geki,
            katu,
            accuracy,
        } => {
            let hits = bpyweb_core::HitCounts {
                n300,
                n100,
                n50,
                miss,
                geki,
                katu,
            };
            commands::grade::run(mode, mods, hits, accuracy)
        }
        Command::Level { score } => commands::level::run(score),
        Command::Color { ref stars } => commands::color::run(stars),
    }
}

/// Config file (or defaults), then `BPYWEB_*` variables, then flags.
fn load_config(args: &Args) -> Result<ApiConfig> {
    let config = match &args.config {
        Some(path) => ApiConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ApiConfig::default(),
    };

    let mut config = config.with_env_overrides(|key| std::env::var(key).ok());
    if let Some(url) = &args.api_url {
        config.private_api_url = url.trim_end_matches('/').to_string();
    }
    if let Some(url) = &args.mirror_url {
        config.mirror_url = url.trim_end_matches('/').to_string();
    }

    debug!("Using config: {:?}", config);
    Ok(config)
}
