//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CatalogSource, WishlistRepository};
use crate::domain::{CatalogLookupService, WishlistService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Detail and search lookups.
    pub catalog: Arc<CatalogLookupService>,
    /// Wishlist add, remove and list.
    pub wishlist: Arc<WishlistService>,
}

impl HttpState {
    /// Build both services over one catalog source and one repository.
    pub fn new(catalog: Arc<dyn CatalogSource>, repository: Arc<dyn WishlistRepository>) -> Self {
        Self {
            catalog: Arc::new(CatalogLookupService::new(catalog.clone())),
            wishlist: Arc::new(WishlistService::new(catalog, repository)),
        }
    }
}
