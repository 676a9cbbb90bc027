//! Domain primitives, services and ports.
//!
//! Purpose: hold the wishlist and catalog lookup rules independently of the
//! HTTP surface and of any concrete catalog or store. Adapters reach the
//! domain only through the traits in [`ports`].
//!
//! Public surface:
//! - CatalogKey: normalised catalog identifier.
//! - CallOutcome / CatalogPayload: tri-state result of one catalog call.
//! - ResponseEnvelope: JSEND-style result returned by every operation.
//! - RetryPolicy / retry: bounded retry helper used by outbound adapters.
//! - CatalogLookupService / WishlistService: the use-cases.

pub mod call_outcome;
pub mod catalog_key;
pub mod catalog_lookup;
pub mod envelope;
pub mod ports;
pub mod retry;
pub mod wishlist_entry;
pub mod wishlist_service;

pub use self::call_outcome::{CallOutcome, CatalogPayload, UPSTREAM_STATUS_OK};
pub use self::catalog_key::CatalogKey;
pub use self::catalog_lookup::CatalogLookupService;
pub use self::envelope::{Disposition, EnvelopeStatus, ResponseEnvelope};
pub use self::retry::{RetryPolicy, RetrySleeper, Retryable, TokioSleeper, retry};
pub use self::wishlist_entry::WishlistEntry;
pub use self::wishlist_service::WishlistService;
