//! Raw request parsing.
//!
//! One bounded read per connection; the request line is tokenized on
//! whitespace and only the method and target are consumed. Headers and any
//! body are ignored entirely.

use crate::query;
use rustc_hash::FxHashMap;

/// Upper bound on the bytes read for a single request. Longer requests are
/// truncated, which is accepted: the request line always fits for the routes
/// this server hosts.
pub const MAX_REQUEST_BYTES: usize = 1024;

/// Target substituted when the request line is missing or unreadable, and
/// the rewrite target for `/`.
pub const FALLBACK_PATH: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    pub method: String,
    pub path: String,
    pub query_params: FxHashMap<String, String>,
}

/// Parse the raw bytes of one request read.
///
/// The first whitespace token is the method, the second the target; the
/// protocol version and everything after it are ignored. Fewer than two
/// tokens degrades to the `index.html` fallback with no query parameters
/// rather than erroring, so even garbage input gets an answer. A target of
/// exactly `/` is rewritten to `index.html`; the first `?` splits the target
/// into path and query string.
///
/// The method is captured but never consulted for routing.
pub fn parse_request(raw: &[u8]) -> ParsedRequest {
    let text = String::from_utf8_lossy(raw);
    let mut tokens = text.split_whitespace();

    let method = tokens.next().unwrap_or("").to_string();
    let Some(target) = tokens.next() else {
        return ParsedRequest {
            method,
            path: FALLBACK_PATH.to_string(),
            query_params: FxHashMap::default(),
        };
    };

    let target = if target == "/" { FALLBACK_PATH } else { target };

    let (path, query_params) = match target.split_once('?') {
        Some((path, query)) => (path, query::parse_query(query)),
        None => (target, FxHashMap::default()),
    };

    ParsedRequest {
        method,
        path: path.to_string(),
        query_params,
    }
}
