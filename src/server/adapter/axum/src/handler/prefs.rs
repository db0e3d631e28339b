/* src/server/adapter/axum/src/handler/prefs.rs */

use axum::Json;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use folio_server::CookieStore;
use folio_server::prefs;

/// `Sec-CH-Prefers-Color-Scheme` client hint, when the browser sends it.
pub(super) fn prefers_dark(headers: &HeaderMap) -> bool {
  headers
    .get("sec-ch-prefers-color-scheme")
    .and_then(|v| v.to_str().ok())
    .is_some_and(|v| v.trim_matches('"') == "dark")
}

pub(super) fn cookie_store(headers: &HeaderMap) -> CookieStore {
  CookieStore::from_header(headers.get(COOKIE).and_then(|v| v.to_str().ok()))
}

/// Attach queued preference writes to a response.
pub(super) fn with_cookies(mut response: Response, store: &CookieStore) -> Response {
  for cookie in store.set_cookie_headers() {
    match HeaderValue::from_str(&cookie) {
      Ok(value) => {
        response.headers_mut().append(SET_COOKIE, value);
      }
      Err(e) => tracing::warn!(error = %e, "dropping unencodable cookie"),
    }
  }
  response
}

pub(super) async fn toggle_theme(headers: HeaderMap) -> Response {
  let mut store = cookie_store(&headers);
  let theme = prefs::toggle_theme(&mut store, prefers_dark(&headers));
  with_cookies(Json(serde_json::json!({ "theme": theme.as_str() })).into_response(), &store)
}
