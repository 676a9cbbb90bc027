//! Port for wishlist persistence.
//!
//! The store is a set of normalised keys with a uniqueness constraint. It is
//! responsible for atomic insert-if-absent and delete-if-present, and reports
//! constraint outcomes as distinct error kinds so callers can branch on
//! meaning instead of catching every failure.

use async_trait::async_trait;

use crate::domain::{CatalogKey, WishlistEntry};

use super::define_port_error;

define_port_error! {
    /// Errors raised by wishlist repository adapters.
    pub enum WishlistRepositoryError {
        /// An entry with this key already exists.
        Duplicate { key: String } =>
            "wishlist entry already exists: {key}",
        /// No entry with this key exists.
        NotFound { key: String } =>
            "wishlist entry not found: {key}",
        /// Repository connection could not be established.
        Connection { message: String } =>
            "wishlist repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "wishlist repository query failed: {message}",
    }
}

/// Port for storing, removing and listing wishlist entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Insert `key` unless it is already present.
    ///
    /// Returns [`WishlistRepositoryError::Duplicate`] when it is.
    async fn insert(&self, key: &CatalogKey) -> Result<(), WishlistRepositoryError>;

    /// Delete `key` if present.
    ///
    /// Returns [`WishlistRepositoryError::NotFound`] when it is absent.
    async fn remove(&self, key: &CatalogKey) -> Result<(), WishlistRepositoryError>;

    /// All entries ordered lexicographically by key.
    async fn list(&self) -> Result<Vec<WishlistEntry>, WishlistRepositoryError>;
}
