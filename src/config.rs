//! # Runtime Configuration
//!
//! Settings read from the environment at startup. The broker connection
//! string is not part of it: [`DirectPublisher`](crate::services::publisher::DirectPublisher)
//! reads `RABBITMQ_CONN` on every publish.

use std::env;
use std::str::FromStr;

use thiserror::Error;
use tracing::info;

use crate::utils::constant::{DEFAULT_LISTEN_ADDR, LISTEN_ADDR_VAR, PUBLISHER_MODE_VAR};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown publisher mode `{0}`, expected `direct` or `pooled`")]
    UnknownPublisherMode(String),
}

/// Which [`Publisher`](crate::services::publisher::Publisher) backs the ping handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PublisherMode {
    /// New connection per publish.
    #[default]
    Direct,
    /// One connection reused across publishes.
    Pooled,
}

impl FromStr for PublisherMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "direct" => Ok(PublisherMode::Direct),
            "pooled" => Ok(PublisherMode::Pooled),
            other => Err(ConfigError::UnknownPublisherMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub listen_addr: String,
    pub publisher_mode: PublisherMode,
}

impl Settings {
    /// Reads `LISTEN_ADDR` and `PUBLISHER_MODE`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var(LISTEN_ADDR_VAR).ok(),
            env::var(PUBLISHER_MODE_VAR).ok(),
        )
    }

    fn from_vars(
        listen_addr: Option<String>,
        publisher_mode: Option<String>,
    ) -> Result<Self, ConfigError> {
        let settings = Self {
            listen_addr: listen_addr.unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            publisher_mode: publisher_mode
                .as_deref()
                .map(str::parse::<PublisherMode>)
                .transpose()?
                .unwrap_or_default(),
        };
        info!(?settings, "Loaded settings");
        Ok(settings)
    }
}
