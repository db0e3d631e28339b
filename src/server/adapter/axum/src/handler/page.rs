/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;
use std::time::Instant;

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use folio_server::contact::FieldErrors;
use folio_server::render::inject;
use folio_server::{ContactForm, CookieStore, FormStatus, StatusTracker, Theme, prefs as core_prefs};
use serde::Deserialize;

use super::prefs::{cookie_store, prefers_dark, with_cookies};
use super::search::outcome_message;
use super::{AppState, view};
use crate::error::AxumError;

const LAYOUT: &str = include_str!("../../templates/layout.html");

/// Per-request page state: the resolved locale plus pending cookie writes.
struct PageCtx {
  locale: String,
  path: String,
  store: CookieStore,
  theme: Theme,
}

fn open_page(
  state: &AppState,
  locale: &str,
  uri: &Uri,
  headers: &HeaderMap,
) -> Result<PageCtx, AxumError> {
  state.ensure_locale(locale)?;
  let resolved = state.resolve_locale(uri.path(), headers);
  let mut store = cookie_store(headers);
  if core_prefs::sync_language(&mut store, &resolved) {
    tracing::debug!(locale = %resolved, "persisting language preference");
  }
  let theme = core_prefs::initial_theme(&store, prefers_dark(headers));
  Ok(PageCtx { locale: resolved, path: uri.path().to_string(), store, theme })
}

fn render_page(
  state: &AppState,
  ctx: &PageCtx,
  status: StatusCode,
  title: &str,
  query: &str,
  body: String,
) -> Response {
  let t = state.translator.fixed(&ctx.locale, "common");
  let data = serde_json::json!({
    "lang": ctx.locale,
    "dir": state.locales.dir(Some(&ctx.locale)).as_str(),
    "theme": ctx.theme.as_str(),
    "title": title,
    "site": state.site_name,
    "nav_label": t.t("menu.navigation_title"),
    "nav": view::nav(&t, &ctx.locale, &ctx.path),
    "query": query,
    "search_placeholder": t.t("search.placeholder"),
    "switcher": view::language_switcher(&state.locales.locales, &ctx.path, &ctx.locale),
    "body": body,
    "footer_nav": view::footer_nav(&t, &ctx.locale),
    "footer_owner": t.t("footer.copyright_owner"),
    "footer_rights": t.t("footer.all_rights_reserved"),
  });
  with_cookies((status, Html(inject(LAYOUT, &data))).into_response(), &ctx.store)
}

pub(super) async fn home(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
  uri: Uri,
  headers: HeaderMap,
) -> Result<Response, AxumError> {
  let ctx = open_page(&state, &locale, &uri, &headers)?;
  let t = state.translator.fixed(&ctx.locale, "common");
  let body = view::home(&t, &ctx.locale);
  Ok(render_page(&state, &ctx, StatusCode::OK, &t.t("header.home"), "", body))
}

pub(super) async fn about(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
  uri: Uri,
  headers: HeaderMap,
) -> Result<Response, AxumError> {
  let ctx = open_page(&state, &locale, &uri, &headers)?;
  let t = state.translator.fixed(&ctx.locale, "aboutMe");
  let body = view::about(&t);
  Ok(render_page(&state, &ctx, StatusCode::OK, &t.t("aboutMe.title"), "", body))
}

fn revert_after_ms(state: &AppState) -> u64 {
  u64::try_from(state.contact.settings().revert_after.as_millis()).unwrap_or(u64::MAX)
}

fn render_contact(
  state: &AppState,
  ctx: &PageCtx,
  status: StatusCode,
  contact_view: &view::ContactView<'_>,
) -> Response {
  let t = state.translator.fixed(&ctx.locale, "contact");
  let body = view::contact(&t, &ctx.locale, contact_view);
  render_page(state, ctx, status, &t.t("contact.title"), "", body)
}

pub(super) async fn contact(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
  uri: Uri,
  headers: HeaderMap,
) -> Result<Response, AxumError> {
  let ctx = open_page(&state, &locale, &uri, &headers)?;
  let form = ContactForm::default();
  let errors = FieldErrors::default();
  let contact_view = view::ContactView {
    form: &form,
    errors: &errors,
    status: FormStatus::Idle,
    revert_after_ms: revert_after_ms(&state),
  };
  Ok(render_contact(&state, &ctx, StatusCode::OK, &contact_view))
}

/// Form post without client scripting. Invalid fields re-render with their
/// messages and never reach the simulator.
pub(super) async fn contact_submit(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
  uri: Uri,
  headers: HeaderMap,
  Form(form): Form<ContactForm>,
) -> Result<Response, AxumError> {
  let ctx = open_page(&state, &locale, &uri, &headers)?;
  let revert_after_ms = revert_after_ms(&state);

  if let Err(errors) = form.validate() {
    let contact_view = view::ContactView {
      form: &form,
      errors: &errors,
      status: FormStatus::Idle,
      revert_after_ms,
    };
    return Ok(render_contact(&state, &ctx, StatusCode::BAD_REQUEST, &contact_view));
  }

  let mut tracker = StatusTracker::new(state.contact.settings().revert_after);
  tracker.begin();
  let result = state.contact.send(&form).await;
  tracker.settle(&result, Instant::now());

  let status = tracker.status_at(Instant::now());
  // Keep what the visitor typed when delivery failed so they can retry.
  let shown = if result.is_ok() { ContactForm::default() } else { form };
  let errors = FieldErrors::default();
  let contact_view = view::ContactView { form: &shown, errors: &errors, status, revert_after_ms };
  Ok(render_contact(&state, &ctx, StatusCode::OK, &contact_view))
}

pub(super) async fn professional(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
  uri: Uri,
  headers: HeaderMap,
) -> Result<Response, AxumError> {
  let ctx = open_page(&state, &locale, &uri, &headers)?;
  let t = state.translator.fixed(&ctx.locale, "projects");
  let body = view::projects(&t, &ctx.locale, state.projects.all());
  let title = t.t("projects.professional_projects_title");
  Ok(render_page(&state, &ctx, StatusCode::OK, &title, "", body))
}

pub(super) async fn project_detail(
  State(state): State<Arc<AppState>>,
  Path((locale, project_id)): Path<(String, String)>,
  uri: Uri,
  headers: HeaderMap,
) -> Result<Response, AxumError> {
  let ctx = open_page(&state, &locale, &uri, &headers)?;
  let Some(project) = state.projects.find(&project_id) else {
    tracing::debug!(project = %project_id, "unknown project, back to listing");
    let listing = format!("/{}/professional", ctx.locale);
    return Ok(with_cookies(Redirect::temporary(&listing).into_response(), &ctx.store));
  };
  let t = state.translator.fixed(&ctx.locale, "projects");
  let body = view::project_detail(&t, &ctx.locale, project);
  Ok(render_page(&state, &ctx, StatusCode::OK, &project.title, "", body))
}

#[derive(Deserialize)]
pub(super) struct SearchPageParams {
  #[serde(default)]
  q: String,
}

pub(super) async fn search(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
  uri: Uri,
  headers: HeaderMap,
  Query(params): Query<SearchPageParams>,
) -> Result<Response, AxumError> {
  let ctx = open_page(&state, &locale, &uri, &headers)?;
  let outcome = state.search.search(&ctx.locale, &params.q);
  let t = state.translator.fixed(&ctx.locale, "common");
  let message = outcome_message(&t, &outcome);
  let body = view::search(&outcome, message.as_deref());
  Ok(render_page(&state, &ctx, StatusCode::OK, &t.t("header.open_search"), &params.q, body))
}
