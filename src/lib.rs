//! Webkernel - Embeddable HTTP/1.x server kernel
//!
//! Connection handling, request parsing, routing helpers and response
//! formatting for small GET/POST services.

pub mod config;
pub mod http;
pub mod server;

pub use http::dispatch::{ServerContext, ServerContextBuilder};
pub use http::handler::{Handler, Reply};
pub use http::response::{error_page, format_response, response};
pub use http::request::header_value;
pub use http::route::{matches, path_segment};
