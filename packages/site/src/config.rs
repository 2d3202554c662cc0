use std::net::SocketAddr;
use std::path::PathBuf;

use garage_cowboy_content::ContentRegistry;

use crate::error::{Result, SiteError};

/// Address the server binds to when `SITE_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Directory served as the static fallback when `STATIC_DIR` is unset.
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    /// Directory with the content documents. Builtin content when `None`.
    pub content_dir: Option<PathBuf>,
    pub static_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr = match lookup("SITE_ADDR") {
            Some(value) => parse_addr(&value)?,
            None => parse_addr(DEFAULT_ADDR)?,
        };

        let content_dir = lookup("CONTENT_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let static_dir = lookup("STATIC_DIR")
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.into())
            .into();

        Ok(Self {
            addr,
            content_dir,
            static_dir,
        })
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_content_dir(mut self, content_dir: impl Into<PathBuf>) -> Self {
        self.content_dir = Some(content_dir.into());
        self
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    /// Build the content registry this configuration points at.
    pub fn load_registry(&self) -> Result<ContentRegistry> {
        let registry = match &self.content_dir {
            Some(dir) => ContentRegistry::from_dir(dir)?,
            None => ContentRegistry::builtin()?,
        };
        tracing::info!(origin = registry.origin(), "content loaded");
        Ok(registry)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            content_dir: None,
            static_dir: DEFAULT_STATIC_DIR.into(),
        }
    }
}

fn parse_addr(value: &str) -> Result<SocketAddr> {
    value
        .parse()
        .map_err(|_| SiteError::Config(format!("SITE_ADDR is not a socket address: '{value}'")))
}
