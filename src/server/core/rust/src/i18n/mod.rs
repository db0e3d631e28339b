/* src/server/core/rust/src/i18n/mod.rs */

// Message catalogs keyed by locale and namespace, read from
// `<locales_dir>/<locale>/<namespace>.json`.

mod interpolate;

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde_json::Value;

use crate::errors::FolioError;
use crate::locale::LocaleConfig;

pub use interpolate::interpolate;

/// Namespace searched when a key is missing from the requested one.
pub const DEFAULT_NAMESPACE: &str = "common";

pub const NAMESPACES: &[&str] = &["common", "aboutMe", "contact", "projects"];

static GLOBAL: OnceLock<Translator> = OnceLock::new();

/// Install the process-wide translator. Call once at startup.
pub fn init(translator: Translator) -> Result<&'static Translator, FolioError> {
  GLOBAL.set(translator).map_err(|_| FolioError::already_initialized("translator"))?;
  GLOBAL.get().ok_or_else(|| FolioError::internal("translator vanished after init"))
}

pub fn global() -> Option<&'static Translator> {
  GLOBAL.get()
}

#[derive(Debug, Clone)]
pub struct Translator {
  fallback: String,
  /// locale -> namespace -> messages
  messages: HashMap<String, HashMap<String, Value>>,
}

impl Translator {
  pub fn new(fallback: impl Into<String>) -> Self {
    Self { fallback: fallback.into(), messages: HashMap::new() }
  }

  /// Read every (locale, namespace) file. Missing or malformed files load as empty.
  pub fn load(locales_dir: &Path, config: &LocaleConfig, namespaces: &[&str]) -> Self {
    let mut translator = Self::new(config.fallback.clone());
    for locale in &config.locales {
      for ns in namespaces {
        let path = locales_dir.join(locale).join(format!("{ns}.json"));
        let parsed = std::fs::read_to_string(&path)
          .map_err(|e| e.to_string())
          .and_then(|c| serde_json::from_str::<Value>(&c).map_err(|e| e.to_string()));
        match parsed {
          Ok(v) => translator.insert(locale, ns, v),
          Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "missing translations");
            translator.insert(locale, ns, Value::Object(serde_json::Map::new()));
          }
        }
      }
    }
    translator
  }

  pub fn insert(&mut self, locale: &str, namespace: &str, messages: Value) {
    self.messages.entry(locale.to_string()).or_default().insert(namespace.to_string(), messages);
  }

  pub fn fallback(&self) -> &str {
    &self.fallback
  }

  /// Raw value for `key`, walking locale -> fallback locale and
  /// namespace -> default namespace.
  pub fn lookup(&self, locale: &str, namespace: &str, key: &str) -> Option<&Value> {
    let locales = [locale, self.fallback.as_str()];
    let namespaces = [namespace, DEFAULT_NAMESPACE];
    for loc in locales {
      for ns in namespaces {
        let found = self.messages.get(loc).and_then(|m| m.get(ns)).and_then(|v| find_key(v, key));
        if found.is_some() {
          return found;
        }
      }
    }
    None
  }

  /// Translated string with `{{name}}` placeholders filled. Unknown keys
  /// render as the key itself.
  pub fn t(&self, locale: &str, namespace: &str, key: &str, args: &[(&str, &str)]) -> String {
    match self.lookup(locale, namespace, key) {
      Some(Value::String(s)) => interpolate(s, args),
      _ => key.to_string(),
    }
  }

  /// Translator bound to one locale and namespace.
  pub fn fixed<'a>(&'a self, locale: &'a str, namespace: &'a str) -> Fixed<'a> {
    Fixed { translator: self, locale, namespace }
  }
}

#[derive(Clone, Copy)]
pub struct Fixed<'a> {
  translator: &'a Translator,
  locale: &'a str,
  namespace: &'a str,
}

impl Fixed<'_> {
  pub fn t(&self, key: &str) -> String {
    self.translator.t(self.locale, self.namespace, key, &[])
  }

  pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
    self.translator.t(self.locale, self.namespace, key, args)
  }

  pub fn value(&self, key: &str) -> Option<&Value> {
    self.translator.lookup(self.locale, self.namespace, key)
  }

  pub fn locale(&self) -> &str {
    self.locale
  }
}

/// Nested lookup on `.`-separated keys, then the literal key.
fn find_key<'a>(messages: &'a Value, key: &str) -> Option<&'a Value> {
  let mut current = messages;
  let mut nested = true;
  for part in key.split('.') {
    match current.get(part) {
      Some(v) => current = v,
      None => {
        nested = false;
        break;
      }
    }
  }
  if nested {
    return Some(current);
  }
  messages.get(key)
}
