/* src/server/core/rust/src/server.rs */

use std::path::PathBuf;

use crate::contact::{ContactSettings, ContactSimulator};
use crate::i18n::Translator;
use crate::locale::LocaleConfig;
use crate::projects::ProjectCatalog;
use crate::resolve::{ResolveStrategy, default_strategies};
use crate::routing::DEFAULT_PASSTHROUGH;
use crate::search::SearchCatalog;

/// Framework-agnostic parts extracted from `FolioServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct FolioParts {
  pub site_name: String,
  pub locales: LocaleConfig,
  pub passthrough: Vec<String>,
  pub strategies: Vec<Box<dyn ResolveStrategy>>,
  pub translator: &'static Translator,
  pub search: SearchCatalog,
  pub projects: ProjectCatalog,
  pub contact: ContactSimulator,
  pub static_dir: Option<PathBuf>,
}

pub struct FolioServer {
  site_name: String,
  locales: LocaleConfig,
  passthrough: Vec<String>,
  strategies: Vec<Box<dyn ResolveStrategy>>,
  translator: &'static Translator,
  search: SearchCatalog,
  projects: ProjectCatalog,
  contact: Option<ContactSimulator>,
  static_dir: Option<PathBuf>,
}

impl FolioServer {
  /// `translator` is normally the one installed with `i18n::init`.
  pub fn new(locales: LocaleConfig, translator: &'static Translator) -> Self {
    Self {
      site_name: "folio".to_string(),
      locales,
      passthrough: DEFAULT_PASSTHROUGH.iter().map(|s| (*s).to_string()).collect(),
      strategies: Vec::new(),
      translator,
      search: SearchCatalog::default(),
      projects: ProjectCatalog::default(),
      contact: None,
      static_dir: None,
    }
  }

  pub fn site_name(mut self, name: impl Into<String>) -> Self {
    self.site_name = name.into();
    self
  }

  pub fn passthrough(mut self, prefixes: Vec<String>) -> Self {
    self.passthrough = prefixes;
    self
  }

  pub fn resolve_strategies(mut self, strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
    self.strategies = strategies;
    self
  }

  pub fn search_catalog(mut self, catalog: SearchCatalog) -> Self {
    self.search = catalog;
    self
  }

  pub fn projects(mut self, catalog: ProjectCatalog) -> Self {
    self.projects = catalog;
    self
  }

  pub fn contact(mut self, simulator: ContactSimulator) -> Self {
    self.contact = Some(simulator);
    self
  }

  pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.static_dir = Some(dir.into());
    self
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  /// Unset strategies and contact settings take their defaults.
  pub fn into_parts(self) -> FolioParts {
    let strategies =
      if self.strategies.is_empty() { default_strategies() } else { self.strategies };
    FolioParts {
      site_name: self.site_name,
      locales: self.locales,
      passthrough: self.passthrough,
      strategies,
      translator: self.translator,
      search: self.search,
      projects: self.projects,
      contact: self
        .contact
        .unwrap_or_else(|| ContactSimulator::new(ContactSettings::default())),
      static_dir: self.static_dir,
    }
  }
}
