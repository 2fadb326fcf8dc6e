//! Key lookup endpoint: `/{token}/{key}`.

use axum::extract::State;
use axum::http::{HeaderMap, Uri};
use axum::response::{IntoResponse, Response};

use crate::request::handle_request;
use crate::state::AppState;
use crate::utils::http_helpers::request_host;

/// Serves the value stored under the key in the path, or the config page.
///
/// Registered as the router fallback so that malformed paths still get the
/// lookup pipeline's 403 rather than a bare 404.
pub(crate) async fn serve_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let host = request_host(&headers, &uri);
    handle_request(&state, &host, uri.path())
        .await
        .into_response()
}
