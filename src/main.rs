//! site-search - terminal front end for a website semantic-search backend
//!
//! Submits websites to an external indexing service and renders the ranked
//! results of free-text queries against it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod backend;
mod cli;
mod config;
mod core;
mod ui;

use backend::BackendClient;
use ui::ThemeMode;

/// Index websites and search them semantically
#[derive(Parser)]
#[command(name = "site-search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Index websites and search them semantically", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Search backend address
    #[arg(long, global = true, env = "SITE_SEARCH_BACKEND_URL")]
    backend_url: Option<String>,

    /// Color palette
    #[arg(long, global = true, value_enum)]
    theme: Option<ThemeMode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive search page
    Interactive,

    /// Submit a website for indexing
    Index {
        /// Website URL (prompted for when omitted)
        url: Option<String>,
    },

    /// Search everything indexed so far
    Search {
        /// Search query (prompted for when omitted)
        query: Option<String>,

        /// Print the backend's JSON answer as-is
        #[arg(long)]
        json: bool,

        /// Show the raw HTML of every result
        #[arg(long, conflicts_with = "json")]
        html: bool,
    },

    /// Show configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Initialize configuration file
        #[arg(long)]
        init: bool,
    },

    /// Show version and configuration info
    Info,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with rendered pages
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(url) = cli.backend_url {
        config.backend.base_url = url;
    }
    if let Some(theme) = cli.theme {
        config.general.theme = theme;
    }

    info!("site-search v{}", env!("CARGO_PKG_VERSION"));

    let client = BackendClient::new(&config.backend.base_url)?;
    info!("Using backend at {}", client.base_url());

    match cli.command {
        Some(Commands::Index { url }) => cli::index::run(&config, &client, url).await,
        Some(Commands::Search { query, json, html }) => {
            cli::search::run(&config, &client, query, json, html).await
        }
        Some(Commands::Config { show, init }) => {
            if init {
                config::init_config(cli.config.as_deref())?;
            } else if show {
                config::show_config(&config)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Info) => {
            let config_file = config::resolve_path(cli.config.as_deref())?;
            cli::info::run(&config, &config_file)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Interactive) | None => {
            cli::interactive::run(&config, &client).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
