//! PostgreSQL-backed `WishlistRepository` implementation using Diesel ORM.
//!
//! Inserts use `ON CONFLICT DO NOTHING` against the unique `key_text` column,
//! so concurrent adds of one key resolve to a single row and the loser sees
//! zero affected rows.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{WishlistRepository, WishlistRepositoryError};
use crate::domain::{CatalogKey, WishlistEntry};

use super::diesel_basic_error_mapping::{map_diesel_error, map_insert_error, map_pool_error};
use super::models::NewWishlistEntryRow;
use super::pool::DbPool;
use super::schema::wishlist_entries;

/// Diesel-backed implementation of the wishlist repository port.
#[derive(Clone)]
pub struct DieselWishlistRepository {
    pool: DbPool,
}

impl DieselWishlistRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistRepository for DieselWishlistRepository {
    async fn insert(&self, key: &CatalogKey) -> Result<(), WishlistRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewWishlistEntryRow {
            key_text: key.as_str(),
        };

        let inserted = diesel::insert_into(wishlist_entries::table)
            .values(&row)
            .on_conflict(wishlist_entries::key_text)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, key))?;

        if inserted == 0 {
            return Err(WishlistRepositoryError::duplicate(key.as_str()));
        }
        Ok(())
    }

    async fn remove(&self, key: &CatalogKey) -> Result<(), WishlistRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            wishlist_entries::table.filter(wishlist_entries::key_text.eq(key.as_str())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(WishlistRepositoryError::not_found(key.as_str()));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<WishlistEntry>, WishlistRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let keys: Vec<String> = wishlist_entries::table
            .select(wishlist_entries::key_text)
            .order(wishlist_entries::key_text.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(keys
            .into_iter()
            .map(|key| WishlistEntry::new(CatalogKey::from_stored(key)))
            .collect())
    }
}
