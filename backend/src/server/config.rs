//! HTTP server configuration and startup errors.

use std::net::SocketAddr;
use std::sync::Arc;

use wishlist::domain::ports::{CatalogSource, WishlistRepository};
use wishlist::outbound::persistence::InMemoryWishlistRepository;

/// Failures that abort startup before the server accepts traffic.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Settings could not be loaded or are invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// The catalog client could not be built.
    #[error("catalog client setup failed: {0}")]
    Catalog(String),
    /// The database pool could not be built or migrated.
    #[error("database setup failed: {0}")]
    Database(String),
}

impl From<StartupError> for std::io::Error {
    fn from(error: StartupError) -> Self {
        std::io::Error::other(error.to_string())
    }
}

/// Everything `create_server` needs: where to listen and which adapters to
/// hand to the domain services.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) catalog: Arc<dyn CatalogSource>,
    pub(crate) repository: Arc<dyn WishlistRepository>,
}

impl ServerConfig {
    /// Configuration backed by an in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            bind_addr,
            catalog,
            repository: Arc::new(InMemoryWishlistRepository::new()),
        }
    }

    /// Replace the wishlist store.
    #[must_use]
    pub fn with_repository(mut self, repository: Arc<dyn WishlistRepository>) -> Self {
        self.repository = repository;
        self
    }
}
