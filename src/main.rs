mod commands;
mod config;

use std::sync::Arc;

use anyhow::Result;
use checktime_core::{ApiClient, Navigator, TerminalNotifier};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checktime-cli")]
#[command(about = "Administer a CheckTime server: holidays, day overrides and work schedules")]
struct Cli {
    /// Base URL of the CheckTime server (overrides config.toml)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage public holidays
    Holiday {
        #[command(subcommand)]
        action: commands::holiday::HolidayAction,
    },
    /// Manage per-day schedule overrides
    Override {
        #[command(subcommand)]
        action: commands::day_override::OverrideAction,
    },
    /// Manage work schedule periods and their day schedules
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Print the server's translation table
    Translations {
        /// Translation group to fetch (e.g. "holidays"); fetches the whole
        /// language table when omitted
        group: Option<String>,
    },
}

/// Opens redirect targets from successful responses in the system browser.
struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        if let Err(e) = open::that(url) {
            tracing::warn!(error = %e, url, "failed to open redirect target");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(cli.base_url)?;

    let client = ApiClient::new(&cfg.base_url, Arc::new(TerminalNotifier))?
        .with_navigator(Arc::new(BrowserNavigator));

    match cli.command {
        Commands::Holiday { action } => commands::holiday::run(&client, action).await,
        Commands::Override { action } => commands::day_override::run(&client, action).await,
        Commands::Schedule { action } => commands::schedule::run(&client, action).await,
        Commands::Translations { group } => {
            commands::translations::run(&client, &cfg.language, group).await
        }
    }
}
