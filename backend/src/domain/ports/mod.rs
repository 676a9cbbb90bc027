//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Ports describe how the domain expects to reach driven adapters (the
//! external catalog and the wishlist store). Adapters translate their own
//! failures into the typed errors and outcomes declared here.

mod macros;
pub(crate) use macros::define_port_error;

mod catalog_source;
mod wishlist_repository;

#[cfg(test)]
pub use catalog_source::MockCatalogSource;
pub use catalog_source::CatalogSource;
#[cfg(test)]
pub use wishlist_repository::MockWishlistRepository;
pub use wishlist_repository::{WishlistRepository, WishlistRepositoryError};
