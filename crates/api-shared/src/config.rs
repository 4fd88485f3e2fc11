//! Server runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the server. Request
//! handlers never read environment variables.

use std::net::SocketAddr;

/// Default listen address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_DIRECTIVE: &str = "shortuid=info";

/// Environment variable holding the REST listen address.
pub const REST_ADDR_ENV: &str = "SHORTUID_REST_ADDR";

/// Environment variable holding an extra `tracing` filter directive.
pub const LOG_DIRECTIVE_ENV: &str = "SHORTUID_LOG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SHORTUID_REST_ADDR '{value}': {source}")]
    InvalidRestAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Server configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    rest_addr: SocketAddr,
    log_directive: String,
}

impl ServerConfig {
    /// Build a `ServerConfig` from optional raw values.
    ///
    /// `None` or empty/whitespace values fall back to the defaults.
    pub fn from_env_values(
        rest_addr: Option<String>,
        log_directive: Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_empty =
            |v: Option<String>| v.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let addr_value = non_empty(rest_addr).unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());
        let rest_addr: SocketAddr = addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidRestAddr {
                value: addr_value.clone(),
                source,
            })?;

        Ok(Self {
            rest_addr,
            log_directive: non_empty(log_directive)
                .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string()),
        })
    }

    /// Read the process environment once.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_values(
            std::env::var(REST_ADDR_ENV).ok(),
            std::env::var(LOG_DIRECTIVE_ENV).ok(),
        )
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }

    pub fn log_directive(&self) -> &str {
        &self.log_directive
    }
}
