//! Request dispatch: static fast path, handler call, reply interpretation.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::http::handler::{Handler, Reply};
use crate::http::mime::extension;
use crate::http::request::{Method, Request};
use crate::http::response::error_page;
use crate::http::static_files;

/// Server-wide settings shared read-only by every connection.
#[derive(Clone, Default)]
pub struct ServerContext {
    get: Option<Arc<dyn Handler>>,
    post: Option<Arc<dyn Handler>>,
    static_root: Option<PathBuf>,
    idle_timeout: Option<Duration>,
}

/// Builder for [`ServerContext`]. Setting a slot twice keeps the last value.
#[derive(Default)]
pub struct ServerContextBuilder {
    ctx: ServerContext,
}

impl ServerContextBuilder {
    pub fn get(mut self, handler: impl Handler + 'static) -> Self {
        self.ctx.get = Some(Arc::new(handler));
        self
    }

    pub fn post(mut self, handler: impl Handler + 'static) -> Self {
        self.ctx.post = Some(Arc::new(handler));
        self
    }

    /// Enables static serving from `root`.
    pub fn static_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.ctx.static_root = Some(root.into());
        self
    }

    /// Closes connections that stay silent this long while the head is
    /// incomplete. Unset means wait forever.
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.ctx.idle_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> ServerContext {
        self.ctx
    }
}

impl ServerContext {
    pub fn builder() -> ServerContextBuilder {
        ServerContextBuilder::default()
    }

    pub fn static_root(&self) -> Option<&Path> {
        self.static_root.as_deref()
    }

    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout
    }

    fn handler(&self, method: Method) -> Option<&Arc<dyn Handler>> {
        match method {
            Method::GET => self.get.as_ref(),
            Method::POST => self.post.as_ref(),
        }
    }
}

/// Produces the bytes to write back for `request`.
///
/// Paths whose last segment has an extension are served from the static root
/// without calling a handler. Otherwise the method's handler is called and
/// its reply is either returned as is or turned into a static file response.
pub async fn dispatch(ctx: &ServerContext, request: &Request) -> Vec<u8> {
    if extension(&request.path).is_some() {
        debug!(
            method = %request.method,
            path = %request.path,
            "Static fast path"
        );
        return static_files::respond(ctx.static_root(), &request.path, &request.path).await;
    }

    let Some(handler) = ctx.handler(request.method) else {
        debug!(method = %request.method, "No handler registered");
        return error_page(404, &request.path);
    };

    match handler.call(&request.header, &request.path, request.data()) {
        Reply::Inline(bytes) => bytes,
        Reply::StaticFile(file) => {
            debug!(
                method = %request.method,
                path = %request.path,
                file = %file,
                "Handler delegated to static file"
            );
            static_files::respond(ctx.static_root(), &file, &request.path).await
        }
    }
}
