//! Wishlist persistence adapters.
//!
//! [`DieselWishlistRepository`] stores entries in PostgreSQL through
//! `diesel-async` and a `bb8` pool; [`InMemoryWishlistRepository`] keeps
//! them in process memory when no database URL is configured.
//!
//! Diesel row structs (`models.rs`) and table definitions (`schema.rs`) are
//! internal and never reach the domain.
//!
//! ```ignore
//! use wishlist::outbound::persistence::{DbPool, DieselWishlistRepository, PoolConfig};
//!
//! let pool = DbPool::connect(PoolConfig::new("postgres://localhost/wishlist")).await?;
//! let repository = DieselWishlistRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_wishlist_repository;
mod in_memory_wishlist_repository;
mod models;
mod pool;
mod schema;

pub use diesel_wishlist_repository::DieselWishlistRepository;
pub use in_memory_wishlist_repository::InMemoryWishlistRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
