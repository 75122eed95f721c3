//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (if present) through `dotenvy`, then builds a typed
//! `Config` once at startup. Everything downstream receives plain values and
//! never reads the environment itself.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_SITE_BASE_URL: &str = "https://consumesafe.tn";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    /// Directory holding `boycott-list.json` and `alternatives.json`.
    pub data_dir: PathBuf,
    /// Directory served as the static site fallback.
    pub static_dir: PathBuf,
    /// Absolute site origin used in the sitemap and robots documents.
    pub site_base_url: String,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `DATA_DIR`: default `<crate>/data`
    /// - `STATIC_DIR`: default `<crate>/static`
    /// - `SITE_BASE_URL`: default `https://consumesafe.tn`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is present but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let data_dir = lookup("DATA_DIR").map_or_else(|| manifest_dir().join("data"), PathBuf::from);
        let static_dir = lookup("STATIC_DIR").map_or_else(|| manifest_dir().join("static"), PathBuf::from);
        let site_base_url = lookup("SITE_BASE_URL")
            .unwrap_or_else(|| DEFAULT_SITE_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        Ok(Self { bind_addr, port, data_dir, static_dir, site_base_url })
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
