/* src/server/adapter/axum/src/handler/contact.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use folio_server::{ContactForm, FolioError};

use super::AppState;
use crate::error::AxumError;

pub(super) async fn submit(
  State(state): State<Arc<AppState>>,
  body: axum::body::Bytes,
) -> Result<Json<serde_json::Value>, AxumError> {
  let form: ContactForm =
    serde_json::from_slice(&body).map_err(|e| FolioError::validation(e.to_string()))?;

  state.contact.send(&form).await?;

  let revert_after_ms =
    u64::try_from(state.contact.settings().revert_after.as_millis()).unwrap_or(u64::MAX);
  Ok(Json(serde_json::json!({
    "ok": true,
    "status": "success",
    "revert_after_ms": revert_after_ms,
  })))
}
