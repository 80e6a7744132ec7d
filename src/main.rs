//! folio - Entry Point

use clap::Parser;
use folio::config::ResolvedConfig;
use folio::model::{AppError, Portfolio};
use std::path::PathBuf;
use tracing::info;

/// folio - a single-page portfolio in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Browse a personal portfolio and send a message from the terminal")]
pub struct Args {
    /// Path to a portfolio content file (TOML); built-in content if omitted
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Contact form endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Section to scroll to on startup (e.g. projects)
    #[arg(long)]
    pub start_section: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> folio::config::CliOverrides {
        folio::config::CliOverrides {
            content_path: self.content.clone(),
            endpoint: self.endpoint.clone(),
            no_color: self.no_color,
            start_section: self.start_section.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (config, portfolio) = startup(&args)?;

    folio::view::run(&config, portfolio)?;

    Ok(())
}

/// Resolve configuration, start logging and load page content.
fn startup(args: &Args) -> Result<(ResolvedConfig, Portfolio), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = folio::config::resolve(args.config.clone(), args.overrides())?;

    folio::logging::init(&config.log_file_path)?;

    info!(
        content = ?config.content_path,
        endpoint = %config.endpoint.url,
        has_access_key = !config.endpoint.access_key.is_empty(),
        color = config.color,
        "Configuration loaded and resolved"
    );

    let portfolio = folio::model::load_content_or_default(config.content_path.as_deref())?;
    Ok((config, portfolio))
}
