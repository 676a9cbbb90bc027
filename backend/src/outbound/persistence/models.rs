//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use super::schema::wishlist_entries;

/// Insertable struct for new wishlist rows; `id` and `created_at` are
/// filled by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = wishlist_entries)]
pub(crate) struct NewWishlistEntryRow<'a> {
    pub key_text: &'a str,
}
