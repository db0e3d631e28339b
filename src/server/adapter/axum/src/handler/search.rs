/* src/server/adapter/axum/src/handler/search.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use folio_server::i18n::Fixed;
use folio_server::{SearchItem, SearchOutcome};
use serde::Deserialize;

use super::AppState;
use crate::error::AxumError;

#[derive(Deserialize)]
pub(super) struct SearchParams {
  lang: Option<String>,
  #[serde(default)]
  q: String,
}

/// Prompt text for the non-result states.
pub(super) fn outcome_message(t: &Fixed<'_>, outcome: &SearchOutcome) -> Option<String> {
  match outcome {
    SearchOutcome::TypeToSearch => Some(t.t("search.type_to_search")),
    SearchOutcome::NoResults { query } => Some(t.t_with("search.no_results", &[("query", query)])),
    SearchOutcome::Results { .. } => None,
  }
}

/// The raw per-locale search document.
pub(super) async fn search_data(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
) -> Result<Json<Vec<SearchItem>>, AxumError> {
  state.ensure_locale(&locale)?;
  Ok(Json(state.search.items(&locale).to_vec()))
}

pub(super) async fn api_search(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, AxumError> {
  let locale = match params.lang {
    Some(lang) => {
      state.ensure_locale(&lang)?;
      lang
    }
    None => state.resolve_locale("/api/search", &headers),
  };

  let outcome = state.search.search(&locale, &params.q);
  let t = state.translator.fixed(&locale, "common");
  let message = outcome_message(&t, &outcome);

  Ok(Json(serde_json::json!({
    "state": outcome.state(),
    "locale": locale,
    "query": params.q,
    "message": message,
    "results": outcome.hits(),
  })))
}
