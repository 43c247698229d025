//! sprig is a minimal HTTP/1.x server: routed handlers with query-string
//! argument binding, and a static-file fallback for everything else.
//!
//! Each connection carries exactly one request. The raw bytes are read in a
//! single bounded pass, tokenized into a method and target, matched against
//! the route registry, and answered with a plain-text handler body or the
//! contents of a file under the static root. The connection is then closed.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod query;
pub mod registry;
pub mod request;
pub mod response;
pub mod server;
pub mod services;
pub mod static_files;

pub use config::Config;
pub use error::ServerError;
pub use registry::{Handler, HandlerError, ParamSpec, Registry, Route};
pub use request::{parse_request, ParsedRequest};
pub use response::{Response, Status};
