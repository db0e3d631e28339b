/* src/server/core/rust/src/prefs.rs */

use std::collections::HashMap;
use std::fmt;

use crate::resolve::LANGUAGE_COOKIE;

pub const LANGUAGE_KEY: &str = LANGUAGE_COOKIE;
pub const THEME_KEY: &str = "theme";

/// Small string key-value store for client preferences.
pub trait PreferenceStore {
  fn get(&self, key: &str) -> Option<String>;
  fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
  values: HashMap<String, String>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl PreferenceStore for MemoryStore {
  fn get(&self, key: &str) -> Option<String> {
    self.values.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: &str) {
    self.values.insert(key.to_string(), value.to_string());
  }
}

/// Preferences carried by request cookies. Writes are queued as
/// `Set-Cookie` values for the response.
#[derive(Debug, Default)]
pub struct CookieStore {
  values: HashMap<String, String>,
  writes: Vec<(String, String)>,
}

/// One year.
const COOKIE_MAX_AGE: u64 = 60 * 60 * 24 * 365;

impl CookieStore {
  pub fn from_header(header: Option<&str>) -> Self {
    let values = header
      .unwrap_or("")
      .split(';')
      .filter_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        Some((k.trim().to_string(), v.trim().to_string()))
      })
      .collect();
    Self { values, writes: Vec::new() }
  }

  /// `Set-Cookie` header values for every write, in order.
  pub fn set_cookie_headers(&self) -> Vec<String> {
    self
      .writes
      .iter()
      .map(|(k, v)| format!("{k}={v}; Path=/; Max-Age={COOKIE_MAX_AGE}; SameSite=Lax"))
      .collect()
  }
}

impl PreferenceStore for CookieStore {
  fn get(&self, key: &str) -> Option<String> {
    self.values.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: &str) {
    self.values.insert(key.to_string(), value.to_string());
    self.writes.retain(|(k, _)| k != key);
    self.writes.push((key.to_string(), value.to_string()));
  }
}

/// Persist the resolved language when it differs from the stored one.
/// Returns true when a write happened.
pub fn sync_language(store: &mut impl PreferenceStore, resolved: &str) -> bool {
  if store.get(LANGUAGE_KEY).as_deref() == Some(resolved) {
    return false;
  }
  store.set(LANGUAGE_KEY, resolved);
  true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Light,
  Dark,
}

impl Theme {
  pub fn parse(value: &str) -> Option<Self> {
    match value {
      "light" => Some(Self::Light),
      "dark" => Some(Self::Dark),
      _ => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Light => "light",
      Self::Dark => "dark",
    }
  }

  pub fn toggled(self) -> Self {
    match self {
      Self::Light => Self::Dark,
      Self::Dark => Self::Light,
    }
  }
}

impl fmt::Display for Theme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Stored theme first, then the system preference.
pub fn initial_theme(store: &impl PreferenceStore, prefers_dark: bool) -> Theme {
  store
    .get(THEME_KEY)
    .and_then(|v| Theme::parse(&v))
    .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Flip the theme and persist the new choice.
pub fn toggle_theme(store: &mut impl PreferenceStore, prefers_dark: bool) -> Theme {
  let next = initial_theme(store, prefers_dark).toggled();
  store.set(THEME_KEY, next.as_str());
  next
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sync_language_writes_only_on_change() {
    let mut store = MemoryStore::new();
    assert!(sync_language(&mut store, "es"));
    assert!(!sync_language(&mut store, "es"));
    assert!(sync_language(&mut store, "en"));
    assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
  }

  #[test]
  fn cookie_store_reads_header() {
    let store = CookieStore::from_header(Some("theme=dark; i18next=en"));
    assert_eq!(store.get("i18next").as_deref(), Some("en"));
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    assert!(store.set_cookie_headers().is_empty());
  }

  #[test]
  fn cookie_store_queues_writes() {
    let mut store = CookieStore::from_header(Some("i18next=es"));
    assert!(sync_language(&mut store, "en"));
    store.set(LANGUAGE_KEY, "es");
    let headers = store.set_cookie_headers();
    assert_eq!(headers.len(), 1);
    assert!(headers[0].starts_with("i18next=es; Path=/;"));
  }

  #[test]
  fn cookie_store_without_header() {
    let mut store = CookieStore::from_header(None);
    assert!(sync_language(&mut store, "es"));
    assert_eq!(store.set_cookie_headers().len(), 1);
  }

  #[test]
  fn initial_theme_prefers_stored_value() {
    let mut store = MemoryStore::new();
    assert_eq!(initial_theme(&store, true), Theme::Dark);
    assert_eq!(initial_theme(&store, false), Theme::Light);
    store.set(THEME_KEY, "light");
    assert_eq!(initial_theme(&store, true), Theme::Light);
    store.set(THEME_KEY, "sepia");
    assert_eq!(initial_theme(&store, true), Theme::Dark);
  }

  #[test]
  fn toggle_persists() {
    let mut store = MemoryStore::new();
    assert_eq!(toggle_theme(&mut store, false), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(toggle_theme(&mut store, false), Theme::Light);
  }
}
