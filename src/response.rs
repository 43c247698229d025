//! Response model and wire rendering.
//!
//! The wire format is exactly one status line, a Content-Type header, a
//! Content-Length header, a blank line and the body. The connection close is
//! the end-of-response signal, so no other framing is needed.

/// Status lines this server can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
    InternalServerError,
}

impl Status {
    pub fn line(self) -> &'static str {
        match self {
            Status::Ok => "HTTP/1.1 200 OK",
            Status::NotFound => "HTTP/1.1 404 Not Found",
            Status::InternalServerError => "HTTP/1.1 500 Internal Server Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    pub fn ok(content_type: &'static str, body: String) -> Self {
        Response {
            status: Status::Ok,
            content_type,
            body,
        }
    }

    pub fn not_found() -> Self {
        Response {
            status: Status::NotFound,
            content_type: "text/plain",
            body: "File not found".to_string(),
        }
    }

    pub fn internal_error() -> Self {
        Response {
            status: Status::InternalServerError,
            content_type: "text/plain",
            body: "Internal Server Error".to_string(),
        }
    }

    /// Render to wire bytes. Content-Length is the byte length of the body as
    /// written, not its character count.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.body.len() + 96);
        out.extend_from_slice(self.status.line().as_bytes());
        out.extend_from_slice(b"\r\nContent-Type: ");
        out.extend_from_slice(self.content_type.as_bytes());
        out.extend_from_slice(b"\r\nContent-Length: ");
        out.extend_from_slice(self.body.len().to_string().as_bytes());
        out.extend_from_slice(b"\r\n\r\n");
        out.extend_from_slice(self.body.as_bytes());
        out
    }
}
