//! Process-local `WishlistRepository` used when no database is configured.
//!
//! Entries live in a mutex-guarded ordered set, which gives the same
//! insert-if-absent and delete-if-present semantics as the unique column in
//! PostgreSQL. Contents are lost on restart.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{WishlistRepository, WishlistRepositoryError};
use crate::domain::{CatalogKey, WishlistEntry};

/// In-memory implementation of the wishlist repository port.
#[derive(Debug, Default)]
pub struct InMemoryWishlistRepository {
    keys: Mutex<BTreeSet<String>>,
}

impl InMemoryWishlistRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn keys(&self) -> Result<MutexGuard<'_, BTreeSet<String>>, WishlistRepositoryError> {
        self.keys
            .lock()
            .map_err(|_| WishlistRepositoryError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl WishlistRepository for InMemoryWishlistRepository {
    async fn insert(&self, key: &CatalogKey) -> Result<(), WishlistRepositoryError> {
        if self.keys()?.insert(key.as_str().to_owned()) {
            Ok(())
        } else {
            Err(WishlistRepositoryError::duplicate(key.as_str()))
        }
    }

    async fn remove(&self, key: &CatalogKey) -> Result<(), WishlistRepositoryError> {
        if self.keys()?.remove(key.as_str()) {
            Ok(())
        } else {
            Err(WishlistRepositoryError::not_found(key.as_str()))
        }
    }

    async fn list(&self) -> Result<Vec<WishlistEntry>, WishlistRepositoryError> {
        Ok(self
            .keys()?
            .iter()
            .map(|key| WishlistEntry::new(CatalogKey::from_stored(key.clone())))
            .collect())
    }
}
