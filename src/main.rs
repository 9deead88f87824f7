use webkernel::config::Config;
use webkernel::{Reply, response, server};

/// Echoes the query string back as an HTML page.
fn echo_get(_header: &str, _path: &str, query: &[u8]) -> Reply {
    Reply::Inline(response(200, "text/html", None, query))
}

/// Echoes the payload back as an HTML page.
fn echo_post(_header: &str, _path: &str, payload: &[u8]) -> Reply {
    Reply::Inline(response(200, "text/html", None, payload))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let ctx = cfg.context_builder().get(echo_get).post(echo_post).build();

    tokio::select! {
        res = server::run(&cfg.server.listen_addr, ctx) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
