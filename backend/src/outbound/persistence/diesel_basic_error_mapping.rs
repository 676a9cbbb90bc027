//! Diesel and pool error mapping for the wishlist repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::CatalogKey;
use crate::domain::ports::WishlistRepositoryError;

use super::pool::PoolError;

/// Pool failures all surface as connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> WishlistRepositoryError {
    let message = match error {
        PoolError::Checkout { message }
        | PoolError::Build { message }
        | PoolError::Migration { message } => message,
    };
    WishlistRepositoryError::connection(message)
}

/// Map a Diesel error raised while inserting `key`.
///
/// Unique violations become [`WishlistRepositoryError::Duplicate`] so the
/// domain can report them distinctly from infrastructure failures.
pub(crate) fn map_insert_error(error: DieselError, key: &CatalogKey) -> WishlistRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            debug!(key = %key, "unique violation on insert");
            WishlistRepositoryError::duplicate(key.as_str())
        }
        other => map_diesel_error(other),
    }
}

/// Map a Diesel error into connection or query failures.
pub(crate) fn map_diesel_error(error: DieselError) -> WishlistRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            WishlistRepositoryError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => WishlistRepositoryError::query("database query error"),
        _ => WishlistRepositoryError::query("database error"),
    }
}
