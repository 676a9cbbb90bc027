//! Service configuration loaded via OrthoConfig.
//!
//! Every field can come from a CLI flag, a `WISHLIST_*` environment variable
//! or a configuration file. The catalog timeout and attempt count carry
//! OrthoConfig defaults; the remaining fields fall back to the defaults
//! exposed by the accessor methods.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::RetryPolicy;
use crate::outbound::catalog::DEFAULT_CATALOG_BASE_URL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CATALOG_RETRY_DELAY_MS: u64 = 1_000;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Configuration values for the wishlist service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WISHLIST")]
pub struct WishlistSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the external catalog.
    pub catalog_base_url: Option<String>,
    /// Per-attempt timeout for catalog calls, in milliseconds.
    #[ortho_config(default = 5_000)]
    pub catalog_timeout_ms: u64,
    /// Total attempts per catalog call.
    #[ortho_config(default = 3)]
    pub catalog_attempts: u32,
    /// Pause between catalog attempts, in milliseconds.
    pub catalog_retry_delay_ms: Option<u64>,
    /// PostgreSQL URL; when unset the wishlist is kept in memory.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub database_max_connections: Option<u32>,
}

impl WishlistSettings {
    /// Bind address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Catalog base URL, defaulting to Open Library.
    pub fn catalog_base_url(&self) -> &str {
        self.catalog_base_url
            .as_deref()
            .unwrap_or(DEFAULT_CATALOG_BASE_URL)
    }

    /// Per-attempt catalog timeout.
    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_millis(self.catalog_timeout_ms)
    }

    /// Retry policy for catalog calls.
    pub fn catalog_retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.catalog_attempts,
            Duration::from_millis(
                self.catalog_retry_delay_ms
                    .unwrap_or(DEFAULT_CATALOG_RETRY_DELAY_MS),
            ),
        )
    }

    /// Database URL, if persistence is configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Maximum pooled database connections.
    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
            .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS)
    }
}
