//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **catalog**: reqwest client for the external book catalog
//! - **persistence**: PostgreSQL and in-memory wishlist repositories
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod catalog;
pub mod persistence;
