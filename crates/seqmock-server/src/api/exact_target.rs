use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::not_found;

/// Only exact request targets reach the handlers
///
/// Routes match on the path alone and `get` also answers `HEAD`, so both
/// are cut off here: `HEAD` requests and targets with a query string (even
/// an empty one) get the standard 404.
pub(super) async fn require_exact_target(request: Request, next: Next) -> Response {
    if request.method() == Method::HEAD || request.uri().query().is_some() {
        let method = request.method().clone();
        let uri = request.uri().clone();
        return not_found(method, uri).await.into_response();
    }
    next.run(request).await
}
