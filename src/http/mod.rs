//! HTTP protocol implementation.
//!
//! This module implements a one-request-per-connection HTTP/1.1 kernel with
//! two pluggable handlers (GET and POST) and optional static file serving.
//!
//! # Architecture
//!
//! - **`buffer`**: Growable per-connection byte buffer
//! - **`parser`**: Detects the end of the head and extracts method, path, query or payload
//! - **`request`**: Parsed request and the header accessor
//! - **`dispatch`**: Server context and routing to the static files or the handlers
//! - **`handler`**: Handler trait and the reply it returns
//! - **`static_files`**: Reads files below the static root
//! - **`response`**: Response formatting and error pages
//! - **`status`** / **`mime`**: Status and content type tables
//! - **`route`**: Wildcard route matching and path segments for handlers
//! - **`writer`**: Writes serialized responses to the client
//! - **`connection`**: The per-connection state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Buffer bytes until "\r\n\r\n"
//!        └──────┬──────┘
//!               │ Request head complete (GET / POST)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Static fast path or handler
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!             Closed
//! ```
//!
//! Reading goes straight to Closed on EOF, read errors, the optional idle
//! timeout, or a method other than GET/POST.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use webkernel::http::connection::Connection;
//! use webkernel::{response, Reply, ServerContext};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let ctx = Arc::new(
//!         ServerContext::builder()
//!             .get(|_: &str, _: &str, query: &[u8]| {
//!                 Reply::Inline(response(200, "text/plain", None, query))
//!             })
//!             .build(),
//!     );
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let ctx = ctx.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, ctx);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod buffer;
pub mod connection;
pub mod dispatch;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod route;
pub mod static_files;
pub mod status;
pub mod writer;
