//! Environment-driven configuration
//!
//! All knobs are optional; the defaults match local development. Values come
//! from the process environment (a `.env` file is honored by `main`).

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime configuration for the storefront server
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,

    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,

    /// Explicit assets directory; discovered relative to the working
    /// directory when absent
    pub assets_dir: Option<PathBuf>,
}

/// Loads the configuration from the process environment.
///
/// Recognized variables:
/// - `STOREFRONT_BIND_ADDR` (default `0.0.0.0:8000`)
/// - `STOREFRONT_LOG` (default `info`)
/// - `STOREFRONT_ASSETS_DIR` (no default)
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    let bind_addr = match std::env::var("STOREFRONT_BIND_ADDR") {
        Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
            name: "STOREFRONT_BIND_ADDR",
            value,
        })?,
        Err(_) => SocketAddr::from(([0, 0, 0, 0], 8000)),
    };

    let log_level = std::env::var("STOREFRONT_LOG").unwrap_or_else(|_| "info".to_string());

    let assets_dir = std::env::var("STOREFRONT_ASSETS_DIR").ok().map(PathBuf::from);

    Ok(AppConfig {
        bind_addr,
        log_level,
        assets_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let config = load_app_config().expect("default config");
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.log_level, "info");
    }
}
