/* src/server/adapter/axum/src/handler/redirect.rs */

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use folio_server::{Routing, route_path};

use super::AppState;

/// Send paths without a supported locale segment to the fallback locale.
pub(super) async fn locale_redirect(
  State(state): State<Arc<AppState>>,
  req: Request,
  next: Next,
) -> Response {
  let uri = req.uri();
  match route_path(uri.path(), uri.query(), &state.locales, &state.passthrough) {
    Routing::Pass => next.run(req).await,
    Routing::Redirect(location) => {
      tracing::debug!(from = %uri.path(), to = %location, "locale redirect");
      Redirect::temporary(&location).into_response()
    }
  }
}
