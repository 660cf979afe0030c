// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the platform hello service
//!
//! Loads configuration from environment variables with hardcoded defaults.

#[cfg(test)]
mod tests;

/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:5001";
    pub const METRICS_ADDR: &str = "0.0.0.0:9090";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const METRICS_ADDR: &str = "METRICS_ADDR";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address for the application endpoints
    pub server_addr: String,
    /// Listen address for the Prometheus exposition
    pub metrics_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            metrics_addr: defaults::METRICS_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_addr = std::env::var(env_vars::SERVER_ADDR)
            .unwrap_or_else(|_| defaults::SERVER_ADDR.to_string());

        let metrics_addr = std::env::var(env_vars::METRICS_ADDR)
            .unwrap_or_else(|_| defaults::METRICS_ADDR.to_string());

        Config {
            server_addr,
            metrics_addr,
        }
    }
}
