//! Stored wishlist entry.

use super::CatalogKey;

/// A book on the wishlist, identified by its normalised catalog key.
///
/// Entries are created by a validated add and removed by a matching remove;
/// they are never mutated in between.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct WishlistEntry {
    key: CatalogKey,
}

impl WishlistEntry {
    /// Build an entry for a normalised key.
    pub fn new(key: CatalogKey) -> Self {
        Self { key }
    }

    /// The entry's catalog key.
    pub fn key(&self) -> &CatalogKey {
        &self.key
    }

    /// Consume the entry, returning its key.
    pub fn into_key(self) -> CatalogKey {
        self.key
    }
}
