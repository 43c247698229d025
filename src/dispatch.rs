//! Request dispatch: registered handler or static-file fallback.

use crate::query;
use crate::registry::Registry;
use crate::request::ParsedRequest;
use crate::response::Response;
use crate::static_files;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, error};

/// Answer one parsed request.
///
/// A path found in the registry is answered by its handler with arguments
/// bound from the query string; anything else falls through to the static
/// file root. A handler failure (an `Err` or a panic) becomes a 500 with a
/// generic body and ends only this request; the connection is still answered
/// and closed normally.
pub async fn dispatch(request: &ParsedRequest, registry: &Registry, static_root: &Path) -> Response {
    let Some(route) = registry.resolve(&request.path) else {
        debug!(path = %request.path, "no route matched, trying static files");
        return static_files::serve(static_root, &request.path).await;
    };

    let args = query::bind_args(&request.query_params, &route.params);
    debug!(handler = route.name, args = args.len(), "invoking handler");

    let handler = route.handler;
    match panic::catch_unwind(AssertUnwindSafe(|| handler(&args))) {
        Ok(Ok(body)) => Response::ok("text/plain", body),
        Ok(Err(err)) => {
            error!(handler = route.name, %err, "handler failed");
            Response::internal_error()
        }
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_default();
            error!(handler = route.name, %detail, "handler panicked");
            Response::internal_error()
        }
    }
}
