//! REST server configuration.
//!
//! Resolved once at startup and handed to the server, so request handling never reads
//! the process environment.

use std::net::{Ipv4Addr, SocketAddr};

/// Default port for the REST server, bound on all interfaces.
pub const DEFAULT_REST_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CLINIC_REST_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid CLINIC_ENABLE_SWAGGER {0:?} (expected true or false)")]
    InvalidSwaggerFlag(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestConfig {
    addr: SocketAddr,
    swagger: bool,
}

impl RestConfig {
    /// Builds the configuration from optional raw values.
    ///
    /// Missing or blank values fall back to the defaults: `0.0.0.0:3000` and Swagger UI
    /// enabled.
    pub fn from_env_values(
        addr: Option<String>,
        swagger: Option<String>,
    ) -> Result<Self, ConfigError> {
        let addr = match non_blank(addr) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?,
            None => SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_REST_PORT)),
        };

        let swagger = match non_blank(swagger) {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(ConfigError::InvalidSwaggerFlag(value)),
            },
            None => true,
        };

        Ok(Self { addr, swagger })
    }

    /// Reads `CLINIC_REST_ADDR` and `CLINIC_ENABLE_SWAGGER`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_values(
            std::env::var("CLINIC_REST_ADDR").ok(),
            std::env::var("CLINIC_ENABLE_SWAGGER").ok(),
        )
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn swagger_enabled(&self) -> bool {
        self.swagger
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
