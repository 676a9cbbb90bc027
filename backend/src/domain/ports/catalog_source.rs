//! Port for the external book catalog.
//!
//! Implementations own transport concerns (timeouts, retries, JSON decoding)
//! and collapse them into a [`CallOutcome`]. A payload whose upstream status
//! is not `ok` is still a successful call.

use async_trait::async_trait;

use crate::domain::{CallOutcome, CatalogKey};

/// Lookup operations offered by the external catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the catalog record for one key.
    async fn fetch_by_key(&self, key: &CatalogKey) -> CallOutcome;

    /// Search editions whose title contains `title`.
    async fn search_by_title(&self, title: &str) -> CallOutcome;
}
