use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::http::buffer::RequestBuffer;
use crate::http::dispatch::{ServerContext, dispatch};
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

const READ_CHUNK: usize = 1024;

/// One accepted client. Serves a single request, then closes.
pub struct Connection<S> {
    stream: S,
    buffer: RequestBuffer,
    ctx: Arc<ServerContext>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, ctx: Arc<ServerContext>) -> Self {
        Self {
            stream,
            buffer: RequestBuffer::new(),
            ctx,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(req) => ConnectionState::Processing(req),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    let bytes = dispatch(&self.ctx, req).await;
                    debug!(
                        method = %req.method,
                        path = %req.path,
                        bytes = bytes.len(),
                        "Response ready"
                    );
                    self.state = ConnectionState::Writing(ResponseWriter::new(bytes));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    // No keep-alive: every response ends the connection.
                    let _ = self.stream.shutdown().await;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until a full request head is buffered.
    ///
    /// Returns `None` when the connection should close without a response:
    /// the peer hung up, the idle timeout expired, or the request line was
    /// not a GET/POST request.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            match parse_request(self.buffer.as_slice()) {
                Ok(request) => return Ok(Some(request)),

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    debug!(error = %e, "Closing connection without response");
                    return Ok(None);
                }
            }

            let mut temp = [0u8; READ_CHUNK];
            let n = match self.ctx.idle_timeout() {
                Some(limit) => {
                    match tokio::time::timeout(limit, self.stream.read(&mut temp)).await {
                        Ok(res) => res?,
                        Err(_) => {
                            debug!(
                                buffered = self.buffer.len(),
                                "Idle timeout waiting for request head"
                            );
                            return Ok(None);
                        }
                    }
                }
                None => self.stream.read(&mut temp).await?,
            };

            if n == 0 {
                if !self.buffer.is_empty() {
                    debug!(
                        buffered = self.buffer.len(),
                        "Client closed connection mid-request"
                    );
                }
                return Ok(None);
            }

            self.buffer.append(&temp[..n]);
        }
    }
}
