//! Configuration for the `webkernel` binary.
//!
//! The kernel itself takes a [`ServerContext`]; this module only turns a
//! YAML file and environment overrides into one.
//!
//! ```yaml
//! server:
//!   listen_addr: "0.0.0.0:8081"
//! static_files:
//!   root: "./dist"
//! idle_timeout_secs: 30
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use crate::http::dispatch::{ServerContext, ServerContextBuilder};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8081";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: Option<StaticFilesConfig>,
    #[serde(default)]
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    pub root: PathBuf,
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Config {
    /// Loads the file named by `WEBKERNEL_CONFIG` (if set), then applies the
    /// `LISTEN` and `STATIC_ROOT` overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("WEBKERNEL_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("STATIC_ROOT") {
            cfg.static_files = Some(StaticFilesConfig { root: root.into() });
        }

        Ok(cfg)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        Self::from_yaml(&text).with_context(|| format!("Invalid config file {}", path))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout_secs.map(Duration::from_secs)
    }

    /// Starts a [`ServerContext`] builder carrying the static root and idle
    /// timeout; handlers are added by the caller.
    pub fn context_builder(&self) -> ServerContextBuilder {
        let mut builder = ServerContext::builder();
        if let Some(static_files) = &self.static_files {
            builder = builder.static_root(static_files.root.clone());
        }
        if let Some(timeout) = self.idle_timeout() {
            builder = builder.idle_timeout(timeout);
        }
        builder
    }
}
