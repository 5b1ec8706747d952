use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::state::{App, AppConfig};

/// AssetDesk - terminal client for a node's asset transfer API
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// API base URL for this session (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Log file location
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the configuration file location and its values
    Config {
        /// Write the effective configuration (including --api-url) to disk
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let log_path = match cli.log_file.clone() {
        Some(path) => path,
        None => logging::default_log_path()?,
    };
    logging::init(&log_path)?;

    let mut config = AppConfig::load();
    if let Some(url) = cli.api_url.clone() {
        config = config.with_api_base_url(url);
    }

    if let Some(command) = &cli.command {
        return handle_command(command, &config);
    }

    tracing::info!("Using API base {}", config.api_base_url);
    let mut app = App::new(config)?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    if let Err(e) = &result {
        tracing::error!("Application error: {e}");
    }
    result
}

fn handle_command(command: &Commands, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Config { save } => {
            if *save {
                config.save()?;
            }
            println!("{}", AppConfig::config_path()?.display());
            println!("{}", serde_json::to_string_pretty(config)?);
            Ok(())
        }
    }
}
