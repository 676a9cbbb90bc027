//! Catalog outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `CatalogSource`
//! port against an Open Library compatible endpoint.

mod http_source;

pub use http_source::{CatalogClientError, DEFAULT_CATALOG_BASE_URL, OpenLibraryHttpSource};
