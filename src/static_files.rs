//! Static file fallback.
//!
//! Unmatched request paths resolve to files under a fixed root directory.
//! Images are answered as an HTML document embedding the file as a base64
//! data URI; everything else is served as text with its detected content
//! type.

use crate::response::Response;
use base64::{engine::general_purpose, Engine as _};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::io;
use std::path::{Component, Path};
use tracing::{debug, error};

static CONTENT_TYPES: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("html", "text/html"),
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
    ]
    .iter()
    .copied()
    .collect()
});

/// Content type by file extension, case-insensitive. Anything not in the
/// table is served as an opaque octet stream.
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => CONTENT_TYPES
            .get(ext.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or("application/octet-stream"),
        None => "application/octet-stream",
    }
}

/// Request paths key straight into the filesystem, so parent components are
/// refused outright instead of being resolved.
fn has_parent_component(path: &str) -> bool {
    Path::new(path)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
}

/// Serve `path` from under `root`.
///
/// Missing entries and directories answer 404; a file that exists but cannot
/// be read answers 500. Both stay on the request path, logged, never raised.
pub async fn serve(root: &Path, path: &str) -> Response {
    if has_parent_component(path) {
        debug!(path, "refusing path with parent components");
        return Response::not_found();
    }

    let file_path = root.join(path.trim_start_matches('/'));

    let meta = match tokio::fs::metadata(&file_path).await {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %file_path.display(), "static file not found");
            return Response::not_found();
        }
        Err(err) => {
            error!(path = %file_path.display(), %err, "failed to stat static file");
            return Response::internal_error();
        }
    };
    if !meta.is_file() {
        debug!(path = %file_path.display(), "not a regular file");
        return Response::not_found();
    }

    let bytes = match tokio::fs::read(&file_path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(path = %file_path.display(), %err, "failed to read static file");
            return Response::internal_error();
        }
    };

    let content_type = content_type_for(&file_path);
    if content_type.starts_with("image/") {
        debug!(path = %file_path.display(), content_type, "serving image as embedded document");
        return Response::ok("text/html", embed_image(content_type, &bytes));
    }

    Response::ok(content_type, String::from_utf8_lossy(&bytes).into_owned())
}

/// Minimal HTML document carrying the image as a data URI.
fn embed_image(content_type: &'static str, bytes: &[u8]) -> String {
    let encoded = general_purpose::STANDARD.encode(bytes);
    format!("<html><body><img src=\"data:{content_type};base64,{encoded}\" /></body></html>")
}
