/* src/cli/core/src/main.rs */

mod check;
mod config;
mod logging;
mod search;
mod serve;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{FolioConfig, find_folio_config, load_folio_config};

#[derive(Parser)]
#[command(name = "folio", about = "Localized portfolio server")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the site
  Serve {
    /// Path to folio.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override [server] port
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Query a locale's search data
  Search {
    /// Text to look for
    query: String,
    /// Locale to search (defaults to the configured fallback)
    #[arg(short, long)]
    lang: Option<String>,
    /// Fetch search data from a running server instead of local files
    #[arg(short, long, conflicts_with = "config")]
    url: Option<String>,
    /// Path to folio.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
  },
  /// Validate config, translations, search data and projects
  Check {
    /// Path to folio.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

/// Try to load folio.toml from cwd upward; returns None if not found
fn try_load_config() -> Option<FolioConfig> {
  let cwd = std::env::current_dir().ok()?;
  let path = find_folio_config(&cwd).ok()?;
  load_folio_config(&path).ok()
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, FolioConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_folio_config(&cwd)?
    }
  };
  let config = load_folio_config(&path)?;
  Ok((path, config))
}

fn base_dir(config_path: &Path) -> &Path {
  config_path.parent().unwrap_or_else(|| Path::new("."))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Serve { config, port } => {
      let (config_path, mut folio_config) = resolve_config(config)?;
      logging::init(&folio_config.logging.level);
      if let Some(port) = port {
        folio_config.server.port = port;
      }
      serve::run_serve(&folio_config, base_dir(&config_path)).await?;
    }
    Command::Search { query, lang, url, config, json } => {
      let (source, folio_config) = match url {
        Some(url) => (search::Source::Remote(url), try_load_config()),
        None => {
          let (config_path, folio_config) = resolve_config(config)?;
          let dir = base_dir(&config_path).join(&folio_config.i18n.locales_dir);
          (search::Source::Local(dir), Some(folio_config))
        }
      };
      let level = folio_config.as_ref().map_or("warn", |c| c.logging.level.as_str());
      logging::init(level);
      let locale = lang
        .or_else(|| folio_config.as_ref().map(|c| c.i18n.fallback.clone()))
        .unwrap_or_else(|| "es".to_string());
      search::run_search(&source, &locale, &query, json).await?;
    }
    Command::Check { config } => {
      let (config_path, folio_config) = resolve_config(config)?;
      logging::init(&folio_config.logging.level);
      tracing::debug!(path = %config_path.display(), "config loaded");
      check::run_check(&folio_config, base_dir(&config_path))?;
    }
  }

  Ok(())
}
