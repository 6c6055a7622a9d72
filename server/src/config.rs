//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: listen address (default `0.0.0.0`)
    /// - `PORT`: default 3000
    /// - `BODY_LIMIT_BYTES`: request body limit, default 1 MiB
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let body_limit_bytes = parse_var(&lookup, "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?;
        if body_limit_bytes == 0 {
            return Err(ConfigError::Invalid {
                var: "BODY_LIMIT_BYTES",
                value: "0".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(Self {
            host: parse_var(&lookup, "HOST", defaults.host)?,
            port: parse_var(&lookup, "PORT", defaults.port)?,
            body_limit_bytes,
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::Invalid { var, value: raw.clone(), reason: e.to_string() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
