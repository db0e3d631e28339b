/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_server::FolioError;

/// Newtype wrapper to implement `IntoResponse` for `FolioError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for FolioError`
/// when both types are foreign to this crate.
#[derive(Debug)]
pub(crate) struct AxumError(pub FolioError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.message(),
        "transient": err.is_transient(),
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<FolioError> for AxumError {
  fn from(err: FolioError) -> Self {
    Self(err)
  }
}
