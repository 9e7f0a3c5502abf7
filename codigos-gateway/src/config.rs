//! Process configuration for the gateway binary.

use std::num::ParseIntError;

/// Environment variable selecting the listening port.
pub const PORT_VAR: &str = "PORT";

/// Port used when [`PORT_VAR`] is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading the gateway configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// `PORT` was set but is not a valid TCP port number.
    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Settings for the HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// TCP port to listen on, on all interfaces.
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl GatewayConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set to something that
    /// does not parse as a `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// An unset or empty `PORT` selects [`DEFAULT_PORT`].
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPort`] if `PORT` does not parse as a `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup(PORT_VAR) {
            Some(value) if !value.trim().is_empty() => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            _ => DEFAULT_PORT,
        };
        Ok(Self { port })
    }

    /// Socket address string to bind, e.g. `0.0.0.0:3000`.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_defaults_to_3000() {
        let config = match GatewayConfig::from_lookup(|_| None) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn port_variable_overrides_default() {
        let config = match GatewayConfig::from_lookup(|k| (k == PORT_VAR).then(|| "8080".to_owned())) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        let config = match GatewayConfig::from_lookup(|_| Some(String::new())) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn garbage_port_is_rejected() {
        match GatewayConfig::from_lookup(|_| Some("tres mil".to_owned())) {
            Err(ConfigError::InvalidPort { value, .. }) => assert_eq!(value, "tres mil"),
            other => panic!("expected InvalidPort, got {other:?}"),
        }
        assert!(GatewayConfig::from_lookup(|_| Some("70000".to_owned())).is_err());
    }
}
