/* src/server/core/rust/src/resolve.rs */

use std::collections::HashSet;

use crate::routing::path_locale;

/// Cookie holding the last resolved language.
pub const LANGUAGE_COOKIE: &str = "i18next";

/// Request facts a strategy may look at.
pub struct ResolveData<'a> {
  pub path: &'a str,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
  pub locales: &'a [String],
  pub fallback: &'a str,
}

/// One step of the locale detection chain.
pub trait ResolveStrategy: Send + Sync {
  fn kind(&self) -> &'static str;
  fn resolve(&self, data: &ResolveData<'_>) -> Option<String>;
}

struct UrlPrefix;

impl ResolveStrategy for UrlPrefix {
  fn kind(&self) -> &'static str {
    "url_prefix"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<String> {
    path_locale(data.path, data.locales).map(String::from)
  }
}

struct Cookie {
  name: String,
}

impl ResolveStrategy for Cookie {
  fn kind(&self) -> &'static str {
    "cookie"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<String> {
    let header = data.cookie_header?;
    let value = parse_cookie(header, &self.name)?;
    data.locales.iter().any(|l| l == value).then(|| value.to_string())
  }
}

struct AcceptLanguage;

impl ResolveStrategy for AcceptLanguage {
  fn kind(&self) -> &'static str {
    "accept_language"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<String> {
    let header = data.accept_language?;
    let locale_set: HashSet<&str> = data.locales.iter().map(String::as_str).collect();
    parse_accept_language(header, &locale_set)
  }
}

pub fn from_url_prefix() -> Box<dyn ResolveStrategy> {
  Box::new(UrlPrefix)
}

pub fn from_cookie(name: impl Into<String>) -> Box<dyn ResolveStrategy> {
  Box::new(Cookie { name: name.into() })
}

pub fn from_accept_language() -> Box<dyn ResolveStrategy> {
  Box::new(AcceptLanguage)
}

/// Detection order: path -> cookie -> Accept-Language.
pub fn default_strategies() -> Vec<Box<dyn ResolveStrategy>> {
  vec![from_url_prefix(), from_cookie(LANGUAGE_COOKIE), from_accept_language()]
}

/// First strategy with an answer wins; otherwise the fallback.
pub fn resolve_chain(strategies: &[Box<dyn ResolveStrategy>], data: &ResolveData<'_>) -> String {
  strategies
    .iter()
    .find_map(|s| s.resolve(data))
    .unwrap_or_else(|| data.fallback.to_string())
}

/// Value of cookie `name` in a `Cookie:` header.
pub fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
  header.split(';').find_map(|pair| {
    let (k, v) = pair.trim().split_once('=')?;
    (k.trim() == name).then(|| v.trim())
  })
}

fn parse_accept_language(header: &str, locale_set: &HashSet<&str>) -> Option<String> {
  if header.is_empty() {
    return None;
  }

  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    let mut q = 1.0_f64;
    for s in segments {
      if let Some(val) = s.trim().strip_prefix("q=") {
        if let Ok(v) = val.parse::<f64>() {
          q = v;
        }
      }
    }
    entries.push((lang, q));
  }

  // stable sort keeps header order among equal weights
  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

  for (lang, _) in &entries {
    if locale_set.contains(lang) {
      return Some((*lang).to_string());
    }
    // es-ES -> es
    if let Some((prefix, _)) = lang.split_once('-') {
      if locale_set.contains(prefix) {
        return Some(prefix.to_string());
      }
    }
  }

  None
}
