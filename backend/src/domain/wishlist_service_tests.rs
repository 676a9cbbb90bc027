//! Tests for the wishlist service.

use std::sync::Arc;

use rstest::rstest;
use serde_json::json;

use super::*;
use crate::domain::ports::{MockCatalogSource, MockWishlistRepository};
use crate::domain::{CatalogPayload, Disposition, EnvelopeStatus, WishlistEntry};

fn ok_payload(result: serde_json::Value) -> CallOutcome {
    CallOutcome::Success(CatalogPayload::new(json!({
        "status": "ok",
        "result": result,
    })))
}

fn not_found_payload() -> CallOutcome {
    CallOutcome::Success(CatalogPayload::new(json!({
        "status": "error",
        "message": "Not found",
    })))
}

fn service(catalog: MockCatalogSource, repository: MockWishlistRepository) -> WishlistService {
    WishlistService::new(Arc::new(catalog), Arc::new(repository))
}

fn entry(key: &str) -> WishlistEntry {
    WishlistEntry::new(CatalogKey::normalize(key))
}

#[rstest]
#[case("/b/OL1M", "/books/OL1M")]
#[case("/books/OL1M", "/books/OL1M")]
#[case("/authors/OL1A", "/authors/OL1A")]
fn normalize_rewrites_short_prefix(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(WishlistService::normalize(raw).as_str(), expected);
}

#[tokio::test]
async fn add_validates_then_stores_normalised_key() {
    let mut catalog = MockCatalogSource::new();
    catalog
        .expect_fetch_by_key()
        .withf(|key| key.as_str() == "/books/OL1M")
        .times(1)
        .returning(|_| ok_payload(json!({ "title": "Dune" })));
    let mut repository = MockWishlistRepository::new();
    repository
        .expect_insert()
        .withf(|key| key.as_str() == "/books/OL1M")
        .times(1)
        .return_once(|_| Ok(()));

    let envelope = service(catalog, repository).add("/b/OL1M").await;

    assert_eq!(envelope.status(), EnvelopeStatus::Success);
    assert_eq!(envelope.disposition(), Disposition::Created);
    assert_eq!(envelope.data(), None);
}

#[tokio::test]
async fn add_rejects_key_unknown_to_catalog_without_storing() {
    let mut catalog = MockCatalogSource::new();
    catalog
        .expect_fetch_by_key()
        .times(1)
        .returning(|_| not_found_payload());
    let mut repository = MockWishlistRepository::new();
    repository.expect_insert().never();

    let envelope = service(catalog, repository).add("/books/nope").await;

    assert_eq!(envelope.status(), EnvelopeStatus::Fail);
    assert_eq!(envelope.disposition(), Disposition::Forbidden);
    assert_eq!(envelope.message(), Some(KEY_NOT_IN_CATALOG));
}

#[rstest]
#[case::recoverable(CallOutcome::RecoverableFailure)]
#[case::fatal(CallOutcome::FatalError)]
#[tokio::test]
async fn add_reports_catalog_failure_as_error(#[case] outcome: CallOutcome) {
    let mut catalog = MockCatalogSource::new();
    catalog
        .expect_fetch_by_key()
        .times(1)
        .return_once(move |_| outcome);
    let mut repository = MockWishlistRepository::new();
    repository.expect_insert().never();

    let envelope = service(catalog, repository).add("/books/OL1M").await;

    assert_eq!(envelope.status(), EnvelopeStatus::Error);
    assert_eq!(envelope.disposition(), Disposition::InternalError);
    assert_eq!(envelope.message(), Some(CATALOG_CALL_FAILED));
}

#[tokio::test]
async fn add_reports_duplicate_with_key() {
    let mut catalog = MockCatalogSource::new();
    catalog
        .expect_fetch_by_key()
        .returning(|_| ok_payload(json!({})));
    let mut repository = MockWishlistRepository::new();
    repository
        .expect_insert()
        .times(1)
        .return_once(|key| Err(WishlistRepositoryError::duplicate(key.as_str())));

    let envelope = service(catalog, repository).add("/b/OL1M").await;

    assert_eq!(envelope.disposition(), Disposition::InvalidRequest);
    assert_eq!(
        envelope.message(),
        Some("book already exists in wish list: /books/OL1M")
    );
}

#[tokio::test]
async fn add_masks_unexpected_store_failures() {
    let mut catalog = MockCatalogSource::new();
    catalog
        .expect_fetch_by_key()
        .returning(|_| ok_payload(json!({})));
    let mut repository = MockWishlistRepository::new();
    repository
        .expect_insert()
        .return_once(|_| Err(WishlistRepositoryError::connection("pool exhausted")));

    let envelope = service(catalog, repository).add("/books/OL1M").await;

    assert_eq!(envelope.status(), EnvelopeStatus::Fail);
    assert_eq!(envelope.message(), Some(ADD_STORE_FAILURE));
}

#[tokio::test]
async fn add_rejects_oversized_key_before_calling_catalog() {
    let mut catalog = MockCatalogSource::new();
    catalog.expect_fetch_by_key().never();
    let mut repository = MockWishlistRepository::new();
    repository.expect_insert().never();

    let raw = format!("/books/{}", "X".repeat(40));
    let envelope = service(catalog, repository).add(&raw).await;

    assert_eq!(envelope.disposition(), Disposition::InvalidRequest);
    assert_eq!(
        envelope.message(),
        Some("book key must not exceed 32 characters")
    );
}

#[tokio::test]
async fn remove_returns_normalised_key() {
    let catalog = MockCatalogSource::new();
    let mut repository = MockWishlistRepository::new();
    repository
        .expect_remove()
        .withf(|key| key.as_str() == "/books/OL1M")
        .times(1)
        .return_once(|_| Ok(()));

    let envelope = service(catalog, repository).remove("/b/OL1M").await;

    assert_eq!(envelope.disposition(), Disposition::Ok);
    assert_eq!(
        envelope.data(),
        Some(&json!({ "key_normalized": "/books/OL1M" }))
    );
}

#[rstest]
#[case::missing(
    WishlistRepositoryError::not_found("/books/OL1M"),
    Disposition::Forbidden,
    KEY_NOT_IN_WISHLIST
)]
#[case::query(
    WishlistRepositoryError::query("deadlock"),
    Disposition::InvalidRequest,
    REMOVE_STORE_FAILURE
)]
#[tokio::test]
async fn remove_maps_store_errors(
    #[case] error: WishlistRepositoryError,
    #[case] disposition: Disposition,
    #[case] message: &str,
) {
    let mut repository = MockWishlistRepository::new();
    repository.expect_remove().return_once(move |_| Err(error));

    let envelope = service(MockCatalogSource::new(), repository)
        .remove("/books/OL1M")
        .await;

    assert_eq!(envelope.status(), EnvelopeStatus::Fail);
    assert_eq!(envelope.disposition(), disposition);
    assert_eq!(envelope.message(), Some(message));
}

#[tokio::test]
async fn list_all_pairs_each_key_with_details() {
    let mut catalog = MockCatalogSource::new();
    catalog.expect_fetch_by_key().times(2).returning(|key| {
        if key.as_str() == "/books/A" {
            ok_payload(json!({ "title": "A" }))
        } else {
            CallOutcome::RecoverableFailure
        }
    });
    let mut repository = MockWishlistRepository::new();
    repository
        .expect_list()
        .return_once(|| Ok(vec![entry("/books/A"), entry("/books/B")]));

    let envelope = service(catalog, repository).list_all().await;

    assert_eq!(envelope.disposition(), Disposition::Ok);
    assert_eq!(
        envelope.data(),
        Some(&json!({
            "book_list": {
                "/books/A": { "title": "A" },
                "/books/B": NO_DETAILS_FOUND,
            }
        }))
    );
}

#[tokio::test]
async fn list_all_uses_placeholder_when_result_missing() {
    let mut catalog = MockCatalogSource::new();
    catalog
        .expect_fetch_by_key()
        .returning(|_| not_found_payload());
    let mut repository = MockWishlistRepository::new();
    repository
        .expect_list()
        .return_once(|| Ok(vec![entry("/books/gone")]));

    let envelope = service(catalog, repository).list_all().await;

    assert_eq!(
        envelope.data(),
        Some(&json!({ "book_list": { "/books/gone": NO_DETAILS_FOUND } }))
    );
}

#[tokio::test]
async fn list_all_ignores_result_when_upstream_status_is_not_ok() {
    let mut catalog = MockCatalogSource::new();
    catalog.expect_fetch_by_key().returning(|_| {
        CallOutcome::Success(CatalogPayload::new(json!({
            "status": "error",
            "result": { "stale": true },
        })))
    });
    let mut repository = MockWishlistRepository::new();
    repository
        .expect_list()
        .return_once(|| Ok(vec![entry("/books/gone")]));

    let envelope = service(catalog, repository).list_all().await;

    assert_eq!(
        envelope.data(),
        Some(&json!({ "book_list": { "/books/gone": NO_DETAILS_FOUND } }))
    );
}

#[tokio::test]
async fn list_all_on_empty_store_returns_empty_map() {
    let mut catalog = MockCatalogSource::new();
    catalog.expect_fetch_by_key().never();
    let mut repository = MockWishlistRepository::new();
    repository.expect_list().return_once(|| Ok(Vec::new()));

    let envelope = service(catalog, repository).list_all().await;

    assert_eq!(envelope.data(), Some(&json!({ "book_list": {} })));
}

#[tokio::test]
async fn list_all_reports_store_failure_as_error() {
    let mut repository = MockWishlistRepository::new();
    repository
        .expect_list()
        .return_once(|| Err(WishlistRepositoryError::connection("refused")));

    let envelope = service(MockCatalogSource::new(), repository)
        .list_all()
        .await;

    assert_eq!(envelope.status(), EnvelopeStatus::Error);
    assert_eq!(envelope.message(), Some(LIST_STORE_FAILURE));
}
