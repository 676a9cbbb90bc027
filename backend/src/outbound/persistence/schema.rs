//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. `diesel print-schema`
//! regenerates them from a live database.

diesel::table! {
    /// Stored wishlist keys.
    ///
    /// `key_text` carries a unique constraint, which is what makes concurrent
    /// adds of one key resolve to a single row.
    wishlist_entries (id) {
        /// Surrogate primary key.
        id -> Int8,
        /// Normalised catalog key (max 32 characters).
        key_text -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
