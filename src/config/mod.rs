#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_socket_addr, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_COLLECTION: &str = "people";

/// Fully resolved settings for the `serve` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub bind: String,
    pub upstream_base_url: String,
    pub collection: String,
    pub max_pages: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

/// Values given on the command line; `None` leaves the layer below in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind: Option<String>,
    pub upstream_base_url: Option<String>,
    pub collection: Option<String>,
    pub max_pages: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            max_pages: None,
            timeout_seconds: None,
        }
    }
}

impl ServiceConfig {
    /// Defaults, then the TOML file, then command-line overrides.
    pub fn resolve(file: Option<&TomlConfig>, overrides: &ConfigOverrides) -> Self {
        let mut config = Self::default();

        if let Some(file) = file {
            if let Some(bind) = file.server.bind.clone() {
                config.bind = bind;
            }
            if let Some(base_url) = file.upstream.base_url.clone() {
                config.upstream_base_url = base_url;
            }
            if let Some(collection) = file.upstream.collection.clone() {
                config.collection = collection;
            }
            config.max_pages = file.upstream.max_pages.or(config.max_pages);
            config.timeout_seconds = file.upstream.timeout_seconds.or(config.timeout_seconds);
        }

        if let Some(bind) = overrides.bind.clone() {
            config.bind = bind;
        }
        if let Some(base_url) = overrides.upstream_base_url.clone() {
            config.upstream_base_url = base_url;
        }
        if let Some(collection) = overrides.collection.clone() {
            config.collection = collection;
        }
        config.max_pages = overrides.max_pages.or(config.max_pages);
        config.timeout_seconds = overrides.timeout_seconds.or(config.timeout_seconds);

        config
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validate_socket_addr("server.bind", self.bind_address())
    }
}

impl ConfigProvider for ServiceConfig {
    fn upstream_base_url(&self) -> &str {
        &self.upstream_base_url
    }

    fn collection(&self) -> &str {
        &self.collection
    }

    fn bind_address(&self) -> &str {
        &self.bind
    }

    fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("server.bind", &self.bind)?;
        validate_url("upstream.base_url", &self.upstream_base_url)?;
        validate_non_empty_string("upstream.collection", &self.collection)?;
        if let Some(max_pages) = self.max_pages {
            validate_positive_number("upstream.max_pages", max_pages, 1)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("upstream.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
