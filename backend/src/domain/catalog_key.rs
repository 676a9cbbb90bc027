//! Catalog key value type and normalisation.
//!
//! Keys are opaque, path-like identifiers assigned by the external catalog
//! (for example `/books/OL1M`). The catalog accepts a short `/b/` prefix as an
//! alias for `/books/`; normalising to the long form means the wishlist never
//! stores the same book twice under different spellings.

use std::fmt;

/// Short-form prefix accepted by the catalog.
pub const SHORT_BOOK_PREFIX: &str = "/b/";

/// Canonical prefix stored by the wishlist.
pub const CANONICAL_BOOK_PREFIX: &str = "/books/";

/// A catalog key after normalisation.
///
/// ## Invariants
/// - Keys built by [`CatalogKey::normalize`] never start with
///   [`SHORT_BOOK_PREFIX`].
/// - Normalisation is idempotent: normalising an existing key yields an equal
///   key.
///
/// Structural validity is not checked here; the catalog decides whether a key
/// names a real book.
///
/// # Examples
/// ```
/// use wishlist::domain::CatalogKey;
///
/// let key = CatalogKey::normalize("/b/OL1M");
/// assert_eq!(key.as_str(), "/books/OL1M");
/// assert_eq!(CatalogKey::normalize(key.as_str()), key);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogKey(String);

impl CatalogKey {
    /// Longest key the wishlist store accepts.
    pub const MAX_LEN: usize = 32;

    /// Rewrite a leading short-form prefix to the canonical prefix.
    ///
    /// Only the leading occurrence is rewritten; everything else is kept
    /// verbatim, including keys that are already canonical or malformed.
    pub fn normalize(raw: &str) -> Self {
        match raw.strip_prefix(SHORT_BOOK_PREFIX) {
            Some(rest) => Self(format!("{CANONICAL_BOOK_PREFIX}{rest}")),
            None => Self(raw.to_owned()),
        }
    }

    /// Wrap text read back from the store without rewriting it, so the key
    /// still matches the stored row.
    pub fn from_stored(stored: String) -> Self {
        Self(stored)
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Character length of the key.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the key is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the key fits the store's column width.
    pub fn fits_store(&self) -> bool {
        self.len() <= Self::MAX_LEN
    }

    /// Consume the key, returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for CatalogKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
