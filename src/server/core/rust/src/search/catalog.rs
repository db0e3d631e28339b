/* src/server/core/rust/src/search/catalog.rs */

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use super::{SearchItem, SearchOutcome, filter};
use crate::errors::FolioError;

/// File name of the per-locale search document under `<locales_dir>/<locale>/`.
pub const SEARCH_DATA_FILE: &str = "search-data.json";

pub fn parse_items(content: &str) -> Result<Vec<SearchItem>, FolioError> {
  let items: Vec<SearchItem> =
    serde_json::from_str(content).map_err(|e| FolioError::validation(e.to_string()))?;
  let mut seen = HashSet::new();
  for item in &items {
    if !seen.insert(item.id.as_str()) {
      tracing::warn!(id = %item.id, "duplicate search item id");
    }
  }
  Ok(items)
}

/// Read `<locales_dir>/<locale>/search-data.json`.
/// Any failure is logged and yields an empty list.
pub fn load_items(locales_dir: &Path, locale: &str) -> Vec<SearchItem> {
  let path = locales_dir.join(locale).join(SEARCH_DATA_FILE);
  let content = match std::fs::read_to_string(&path) {
    Ok(c) => c,
    Err(e) => {
      tracing::warn!(path = %path.display(), error = %e, "search data unavailable");
      return Vec::new();
    }
  };
  match parse_items(&content) {
    Ok(items) => items,
    Err(e) => {
      tracing::warn!(path = %path.display(), error = %e, "search data unreadable");
      Vec::new()
    }
  }
}

/// Search documents for every locale, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct SearchCatalog {
  by_locale: HashMap<String, Arc<Vec<SearchItem>>>,
}

impl SearchCatalog {
  pub fn load(locales_dir: &Path, locales: &[String]) -> Self {
    let by_locale = locales
      .iter()
      .map(|l| {
        let items = load_items(locales_dir, l);
        tracing::debug!(locale = %l, count = items.len(), "search data loaded");
        (l.clone(), Arc::new(items))
      })
      .collect();
    Self { by_locale }
  }

  pub fn insert(&mut self, locale: impl Into<String>, items: Vec<SearchItem>) {
    self.by_locale.insert(locale.into(), Arc::new(items));
  }

  /// Items for `locale`; empty when the locale has no document.
  pub fn items(&self, locale: &str) -> Arc<Vec<SearchItem>> {
    self.by_locale.get(locale).cloned().unwrap_or_default()
  }

  pub fn search(&self, locale: &str, query: &str) -> SearchOutcome {
    filter(query, &self.items(locale))
  }
}
