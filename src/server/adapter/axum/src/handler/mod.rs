/* src/server/adapter/axum/src/handler/mod.rs */

mod contact;
mod page;
mod prefs;
mod redirect;
mod search;
mod view;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderMap;
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use axum::routing::{get, post};
use folio_server::contact::ContactSimulator;
use folio_server::{
  FolioError, FolioParts, LocaleConfig, ProjectCatalog, ResolveData, ResolveStrategy,
  SearchCatalog, Translator,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub(crate) struct AppState {
  pub site_name: String,
  pub locales: LocaleConfig,
  pub passthrough: Vec<String>,
  pub strategies: Vec<Box<dyn ResolveStrategy>>,
  pub translator: &'static Translator,
  pub search: SearchCatalog,
  pub projects: ProjectCatalog,
  pub contact: ContactSimulator,
}

impl AppState {
  /// Reject locale path segments that are not configured.
  pub fn ensure_locale(&self, locale: &str) -> Result<(), FolioError> {
    if self.locales.is_supported(locale) {
      Ok(())
    } else {
      Err(FolioError::not_found(format!("Unknown locale '{locale}'")))
    }
  }

  /// Run the resolve chain for a request.
  pub fn resolve_locale(&self, path: &str, headers: &HeaderMap) -> String {
    let data = ResolveData {
      path,
      cookie_header: headers.get(COOKIE).and_then(|v| v.to_str().ok()),
      accept_language: headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
      locales: &self.locales.locales,
      fallback: &self.locales.fallback,
    };
    folio_server::resolve_chain(&self.strategies, &data)
  }
}

async fn not_found(uri: axum::http::Uri) -> crate::error::AxumError {
  FolioError::not_found(format!("No route for {}", uri.path())).into()
}

pub(crate) fn build_router(parts: FolioParts) -> Router {
  let state = Arc::new(AppState {
    site_name: parts.site_name,
    locales: parts.locales,
    passthrough: parts.passthrough,
    strategies: parts.strategies,
    translator: parts.translator,
    search: parts.search,
    projects: parts.projects,
    contact: parts.contact,
  });

  let mut router = Router::new()
    .route("/{locale}", get(page::home))
    .route("/{locale}/about", get(page::about))
    .route("/{locale}/contact", get(page::contact).post(page::contact_submit))
    .route("/{locale}/professional", get(page::professional))
    .route("/{locale}/professional/{project_id}", get(page::project_detail))
    .route("/{locale}/search", get(page::search))
    .route("/{locale}/search-data.json", get(search::search_data))
    .route("/api/search", get(search::api_search))
    .route("/api/contact", post(contact::submit))
    .route("/api/theme", post(prefs::toggle_theme));

  if let Some(dir) = parts.static_dir {
    router = router.nest_service("/_folio/static", ServeDir::new(dir));
  }

  // The redirect layer only wraps routes that exist, so a fallback is needed
  // for unlocalized paths like `/` or `/a/b/c` to reach it.
  router
    .fallback(not_found)
    .layer(axum::middleware::from_fn_with_state(state.clone(), redirect::locale_redirect))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
