//! Query-string parsing and handler parameter binding.

use crate::registry::ParamSpec;
use rustc_hash::FxHashMap;

/// Split a query string into a parameter map.
///
/// Lenient on purpose: pairs are split on `&`, then on `=`, and a pair is
/// kept only when it has exactly one `=` between two non-empty tokens.
/// Everything else is dropped silently. Values stay raw strings; there is no
/// percent-decoding. A key that appears more than once keeps its last value.
///
/// ```
/// let params = sprig::query::parse_query("name=Nicolas&x=1");
/// assert_eq!(params.get("name").map(String::as_str), Some("Nicolas"));
/// assert_eq!(params.len(), 2);
/// ```
pub fn parse_query(query: &str) -> FxHashMap<String, String> {
    let mut params = FxHashMap::default();
    for pair in query.split('&') {
        let mut parts = pair.split('=');
        if let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) {
            if !key.is_empty() && !value.is_empty() {
                params.insert(key.to_string(), value.to_string());
            }
        }
    }
    params
}

/// Resolve a route's declared parameters against a parsed query map.
///
/// Output is positional: one argument per spec, in declaration order, with
/// the spec's default substituted for anything the query did not supply. A
/// handler therefore always receives exactly as many arguments as it
/// declared, and never an absent value.
pub fn bind_args(params: &FxHashMap<String, String>, specs: &[ParamSpec]) -> Vec<String> {
    specs
        .iter()
        .map(|spec| {
            params
                .get(spec.name)
                .cloned()
                .unwrap_or_else(|| spec.default_value.to_string())
        })
        .collect()
}
