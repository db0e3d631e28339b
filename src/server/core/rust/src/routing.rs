/* src/server/core/rust/src/routing.rs */

use crate::locale::LocaleConfig;

/// Prefixes the locale redirect never touches.
pub const DEFAULT_PASSTHROUGH: &[&str] = &["/api", "/_folio/static", "/favicon.ico"];

/// Outcome of checking a request path against the supported locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routing {
  /// Path already carries a supported locale, or is exempt.
  Pass,
  /// Send the client to this location instead.
  Redirect(String),
}

/// Locale segment at the start of `path`, if it is a supported one.
///
/// Anchors on a whole segment: `/es` and `/es/about` match `es`, `/estore` does not.
pub fn path_locale<'a>(path: &str, locales: &'a [String]) -> Option<&'a str> {
  let rest = path.strip_prefix('/')?;
  let segment = rest.split('/').next().unwrap_or("");
  locales.iter().find(|l| l.as_str() == segment).map(String::as_str)
}

/// True when `path` equals a prefix or continues it with a new segment.
pub fn is_passthrough<S: AsRef<str>>(path: &str, prefixes: &[S]) -> bool {
  prefixes.iter().any(|p| {
    let p = p.as_ref();
    match path.strip_prefix(p) {
      Some(rest) => rest.is_empty() || rest.starts_with('/'),
      None => false,
    }
  })
}

/// Decide whether a request passes through or gets redirected.
///
/// Trailing slashes are dropped in the same hop that adds the fallback
/// locale, so `/es/` goes to `/es` and `/about/` to `/es/about`.
pub fn route_path<S: AsRef<str>>(
  path: &str,
  query: Option<&str>,
  config: &LocaleConfig,
  passthrough: &[S],
) -> Routing {
  if is_passthrough(path, passthrough) {
    return Routing::Pass;
  }
  let trimmed = path.trim_end_matches('/');
  let localized = path_locale(trimmed, &config.locales).is_some();
  if localized && trimmed.len() == path.len() {
    return Routing::Pass;
  }
  let target =
    if localized { trimmed.to_string() } else { fallback_path(trimmed, &config.fallback) };
  Routing::Redirect(with_query(target, query))
}

fn fallback_path(path: &str, fallback: &str) -> String {
  match path {
    "" => format!("/{fallback}"),
    p if p.starts_with('/') => format!("/{fallback}{p}"),
    p => format!("/{fallback}/{p}"),
  }
}

fn with_query(mut location: String, query: Option<&str>) -> String {
  if let Some(q) = query.filter(|q| !q.is_empty()) {
    location.push('?');
    location.push_str(q);
  }
  location
}

/// Same page in another language: swap the leading locale segment, or add one.
pub fn switch_locale_path(path: &str, locales: &[String], target: &str) -> String {
  match path_locale(path, locales) {
    Some(current) => {
      let rest = &path[current.len() + 1..];
      format!("/{target}{rest}")
    }
    None if path == "/" || path.is_empty() => format!("/{target}"),
    None => format!("/{target}{path}"),
  }
}
