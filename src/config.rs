// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable, falling back to a default.
///
/// The raw string is returned unvalidated; callers that need a specific
/// shape check it themselves and fail fast on bad input.
macro_rules! optional_env {
    // ---
    ($key:literal, $default:expr) => {
        std::env::var($key).unwrap_or_else(|_| $default.to_string())
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails with a message
/// containing the given fragment.
macro_rules! assert_config_error {
    // ---
    ($expr:expr, $fragment:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string().contains($fragment),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: server::ServerConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
        })
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// Listen address used when `HELLO_BIND_ADDR` is unset.
    pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

    /// HTTP listener configuration.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Address handed to the TCP listener, always in `host:port` form.
        pub bind_addr: String,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `HELLO_BIND_ADDR` has no port.
        pub fn from_env() -> Result<Self> {
            // ---
            let raw = optional_env!("HELLO_BIND_ADDR", DEFAULT_BIND_ADDR);

            Ok(Self {
                bind_addr: normalize_bind_addr(&raw)?,
            })
        }
    }

    /// Normalizes a listen address.
    ///
    /// `host:port` passes through unchanged and `:port` binds the IPv6
    /// wildcard `[::]`, which also accepts IPv4 where the host is dual-stack.
    /// A value without a colon (such as a bare `8080`) is rejected: it names
    /// a host, not a port.
    pub fn normalize_bind_addr(raw: &str) -> Result<String> {
        // ---
        let raw = raw.trim();

        match raw.rsplit_once(':') {
            None => anyhow::bail!("Invalid HELLO_BIND_ADDR {raw:?}: missing port in address"),
            Some((_, port)) if port.is_empty() => {
                anyhow::bail!("Invalid HELLO_BIND_ADDR {raw:?}: missing port in address")
            }
            Some(("", port)) => Ok(format!("[::]:{port}")),
            Some(_) => Ok(raw.to_string()),
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Tests
// ============================================================
