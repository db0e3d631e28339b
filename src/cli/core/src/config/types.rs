/* src/cli/core/src/config/types.rs */

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use folio_server::routing::DEFAULT_PASSTHROUGH;
use folio_server::{ContactSettings, Direction, LocaleConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolioConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub i18n: I18nSection,
  #[serde(default)]
  pub content: ContentSection,
  #[serde(default)]
  pub contact: ContactSection,
  #[serde(default)]
  pub logging: LoggingSection,
}

impl FolioConfig {
  pub fn validate(&self) -> Result<()> {
    self.i18n.validate()?;
    self.contact.validate()?;
    Ok(())
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  #[serde(default = "default_site_name")]
  pub name: String,
}

impl Default for SiteSection {
  fn default() -> Self {
    Self { name: default_site_name() }
  }
}

fn default_site_name() -> String {
  "folio".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  pub static_dir: Option<String>,
  /// Path prefixes the locale redirect leaves alone.
  #[serde(default = "default_passthrough")]
  pub passthrough: Vec<String>,
}

impl ServerSection {
  pub fn addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

impl Default for ServerSection {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
      static_dir: None,
      passthrough: default_passthrough(),
    }
  }
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_passthrough() -> Vec<String> {
  DEFAULT_PASSTHROUGH.iter().map(|p| (*p).to_string()).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  #[serde(default = "default_locales")]
  pub locales: Vec<String>,
  #[serde(default = "default_fallback")]
  pub fallback: String,
  #[serde(default = "default_locales_dir")]
  pub locales_dir: String,
  /// Locales written right-to-left; everything else is ltr.
  #[serde(default)]
  pub rtl: Vec<String>,
}

impl Default for I18nSection {
  fn default() -> Self {
    Self {
      locales: default_locales(),
      fallback: default_fallback(),
      locales_dir: default_locales_dir(),
      rtl: Vec::new(),
    }
  }
}

impl I18nSection {
  pub fn validate(&self) -> Result<()> {
    if self.locales.is_empty() {
      bail!("i18n.locales must not be empty");
    }
    if !self.locales.contains(&self.fallback) {
      bail!("i18n.fallback \"{}\" is not in i18n.locales {:?}", self.fallback, self.locales);
    }
    if let Some(unknown) = self.rtl.iter().find(|l| !self.locales.contains(l)) {
      bail!("i18n.rtl entry \"{unknown}\" is not in i18n.locales {:?}", self.locales);
    }
    self.locale_config().map(|_| ())
  }

  pub fn locale_config(&self) -> Result<LocaleConfig> {
    let dirs: HashMap<String, Direction> = self
      .locales
      .iter()
      .map(|l| {
        let dir = if self.rtl.contains(l) { Direction::Rtl } else { Direction::Ltr };
        (l.clone(), dir)
      })
      .collect();
    LocaleConfig::new(self.locales.clone(), self.fallback.clone(), dirs)
      .context("invalid [i18n] section")
  }
}

fn default_locales() -> Vec<String> {
  vec!["es".to_string(), "en".to_string()]
}

fn default_fallback() -> String {
  "es".to_string()
}

fn default_locales_dir() -> String {
  "site/locales".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentSection {
  /// Directory holding `projects.json`.
  #[serde(default = "default_content_dir")]
  pub dir: String,
}

impl Default for ContentSection {
  fn default() -> Self {
    Self { dir: default_content_dir() }
  }
}

fn default_content_dir() -> String {
  "site".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSection {
  #[serde(default = "default_failure_rate")]
  pub failure_rate: f64,
  #[serde(default = "default_delay_ms")]
  pub delay_ms: u64,
  #[serde(default = "default_revert_after_ms")]
  pub revert_after_ms: u64,
}

impl Default for ContactSection {
  fn default() -> Self {
    Self {
      failure_rate: default_failure_rate(),
      delay_ms: default_delay_ms(),
      revert_after_ms: default_revert_after_ms(),
    }
  }
}

impl ContactSection {
  pub fn validate(&self) -> Result<()> {
    if !(0.0..=1.0).contains(&self.failure_rate) {
      bail!("contact.failure_rate must be within 0.0..=1.0, got {}", self.failure_rate);
    }
    Ok(())
  }

  pub fn settings(&self) -> ContactSettings {
    ContactSettings {
      failure_rate: self.failure_rate,
      delay: Duration::from_millis(self.delay_ms),
      revert_after: Duration::from_millis(self.revert_after_ms),
    }
  }
}

fn default_failure_rate() -> f64 {
  0.1
}

fn default_delay_ms() -> u64 {
  1500
}

fn default_revert_after_ms() -> u64 {
  5000
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
  /// `EnvFilter` directive; `RUST_LOG` wins when set.
  #[serde(default = "default_log_level")]
  pub level: String,
}

impl Default for LoggingSection {
  fn default() -> Self {
    Self { level: default_log_level() }
  }
}

fn default_log_level() -> String {
  "info".to_string()
}

/// Config-relative paths resolved against the directory holding `folio.toml`.
#[derive(Debug, Clone)]
pub struct SitePaths {
  pub locales_dir: PathBuf,
  pub content_dir: PathBuf,
  pub static_dir: Option<PathBuf>,
}

impl SitePaths {
  pub fn new(config: &FolioConfig, base_dir: &Path) -> Self {
    Self {
      locales_dir: base_dir.join(&config.i18n.locales_dir),
      content_dir: base_dir.join(&config.content.dir),
      static_dir: config.server.static_dir.as_ref().map(|d| base_dir.join(d)),
    }
  }
}
