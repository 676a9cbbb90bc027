//! Wishlist use-cases: add, remove and list catalog keys.
//!
//! Each operation walks `key-normalised → externally-validated →
//! store-mutated → response-formatted` and may stop early with a `fail` or
//! `error` envelope. Nothing escapes as an unformatted fault.

use std::sync::Arc;

use serde_json::{Map, Value, json};
use tracing::{Instrument, Span, debug, info, info_span, warn};

use crate::domain::catalog_lookup::CATALOG_CALL_FAILED;
use crate::domain::ports::{CatalogSource, WishlistRepository, WishlistRepositoryError};
use crate::domain::{CallOutcome, CatalogKey, CatalogPayload, ResponseEnvelope};

/// Placeholder for entries the catalog can no longer describe.
pub const NO_DETAILS_FOUND: &str = "no details found";
/// Message for keys the catalog does not recognise.
pub const KEY_NOT_IN_CATALOG: &str = "supplied book key does not exist in catalog";
/// Message for removing a key that is not stored.
pub const KEY_NOT_IN_WISHLIST: &str = "book not found in wish list";
/// Message for unexpected store failures while adding.
pub const ADD_STORE_FAILURE: &str = "unknown error encountered adding book";
/// Message for unexpected store failures while removing.
pub const REMOVE_STORE_FAILURE: &str = "unknown error encountered deleting book";
/// Message for store failures while listing.
pub const LIST_STORE_FAILURE: &str = "unexpected error getting book list";

/// Domain service for the wishlist.
pub struct WishlistService {
    catalog: Arc<dyn CatalogSource>,
    repository: Arc<dyn WishlistRepository>,
    span: Span,
}

impl WishlistService {
    /// Build the service from its ports.
    pub fn new(catalog: Arc<dyn CatalogSource>, repository: Arc<dyn WishlistRepository>) -> Self {
        Self {
            catalog,
            repository,
            span: info_span!("wishlist"),
        }
    }

    /// Replace the log context this service records its events under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Normalise a raw key before it is compared or stored.
    pub fn normalize(raw_key: &str) -> CatalogKey {
        CatalogKey::normalize(raw_key)
    }

    /// Validate `raw_key` against the catalog and store it.
    pub async fn add(&self, raw_key: &str) -> ResponseEnvelope {
        self.add_key(Self::normalize(raw_key))
            .instrument(self.span.clone())
            .await
    }

    /// Remove `raw_key` from the wishlist.
    pub async fn remove(&self, raw_key: &str) -> ResponseEnvelope {
        self.remove_key(Self::normalize(raw_key))
            .instrument(self.span.clone())
            .await
    }

    /// List every stored key with catalog details.
    ///
    /// One catalog call is made per entry; an entry whose lookup fails, is
    /// not `ok` upstream or lacks a `result` is reported with [`NO_DETAILS_FOUND`] instead of
    /// failing the listing.
    pub async fn list_all(&self) -> ResponseEnvelope {
        self.list_entries().instrument(self.span.clone()).await
    }

    async fn add_key(&self, key: CatalogKey) -> ResponseEnvelope {
        if !key.fits_store() {
            return ResponseEnvelope::fail(format!(
                "book key must not exceed {} characters",
                CatalogKey::MAX_LEN
            ));
        }

        match self.catalog.fetch_by_key(&key).await {
            CallOutcome::Success(payload) if payload.is_ok() => {}
            CallOutcome::Success(payload) => {
                debug!(
                    key = %key,
                    upstream_status = payload.upstream_status().unwrap_or("<missing>"),
                    "catalog rejected key"
                );
                return ResponseEnvelope::forbidden(KEY_NOT_IN_CATALOG);
            }
            failure @ (CallOutcome::RecoverableFailure | CallOutcome::FatalError) => {
                warn!(key = %key, outcome = ?failure, "catalog validation failed");
                return ResponseEnvelope::error(CATALOG_CALL_FAILED);
            }
        }

        match self.repository.insert(&key).await {
            Ok(()) => {
                info!(key = %key, "book added to wishlist");
                ResponseEnvelope::created()
            }
            Err(WishlistRepositoryError::Duplicate { .. }) => {
                ResponseEnvelope::fail(format!("book already exists in wish list: {key}"))
            }
            Err(error) => {
                warn!(key = %key, %error, "unknown error encountered adding book");
                ResponseEnvelope::fail(ADD_STORE_FAILURE)
            }
        }
    }

    async fn remove_key(&self, key: CatalogKey) -> ResponseEnvelope {
        match self.repository.remove(&key).await {
            Ok(()) => {
                info!(key = %key, "book removed from wishlist");
                ResponseEnvelope::success(json!({ "key_normalized": key.as_str() }))
            }
            Err(WishlistRepositoryError::NotFound { .. }) => {
                ResponseEnvelope::forbidden(KEY_NOT_IN_WISHLIST)
            }
            Err(error) => {
                warn!(key = %key, %error, "unknown error encountered deleting book");
                ResponseEnvelope::fail(REMOVE_STORE_FAILURE)
            }
        }
    }

    async fn list_entries(&self) -> ResponseEnvelope {
        let entries = match self.repository.list().await {
            Ok(entries) => entries,
            Err(error) => {
                warn!(%error, "failed to list wishlist entries");
                return ResponseEnvelope::error(LIST_STORE_FAILURE);
            }
        };

        let mut book_list = Map::new();
        for entry in entries {
            let details = self
                .catalog
                .fetch_by_key(entry.key())
                .await
                .into_payload()
                .filter(CatalogPayload::is_ok)
                .and_then(CatalogPayload::into_result)
                .unwrap_or_else(|| {
                    debug!(key = %entry.key(), "no catalog details for entry");
                    Value::String(NO_DETAILS_FOUND.to_owned())
                });
            book_list.insert(entry.into_key().into_inner(), details);
        }

        ResponseEnvelope::success(json!({ "book_list": book_list }))
    }
}

#[cfg(test)]
#[path = "wishlist_service_tests.rs"]
mod tests;
