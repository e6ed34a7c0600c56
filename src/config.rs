//! Host configuration parsed from environment variables.

use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Directory served for paths no route claims (photo, thumbnails, CV).
    pub static_dir: PathBuf,
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `<crate>/public`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port("PORT", std::env::var("PORT").ok().as_deref())?;
        let static_dir = std::env::var("STATIC_DIR").map_or_else(|_| default_static_dir(), PathBuf::from);
        Ok(Self { port, static_dir })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

fn parse_port(var: &'static str, raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    raw.parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort { var, value: raw.to_owned() })
}
