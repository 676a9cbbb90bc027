//! Read-only catalog operations: key detail and title search.

use std::sync::Arc;

use serde_json::Value;
use tracing::{Instrument, Span, info_span, warn};

use crate::domain::ports::CatalogSource;
use crate::domain::{CallOutcome, CatalogKey, ResponseEnvelope};

/// Message for calls that failed after retries or returned malformed JSON.
pub const CATALOG_CALL_FAILED: &str = "internal error calling catalog";
/// Message for a key the catalog does not recognise.
pub const UNKNOWN_KEY_HINT: &str = "error calling catalog endpoint; is 'key' valid?";
/// Message for a title search without matches.
pub const UNMATCHED_TITLE_HINT: &str = "error calling catalog endpoint; no match for 'title'?";

/// Domain service answering catalog lookups with response envelopes.
pub struct CatalogLookupService {
    catalog: Arc<dyn CatalogSource>,
    span: Span,
}

impl CatalogLookupService {
    /// Build the service around a catalog source.
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            catalog,
            span: info_span!("catalog_lookup"),
        }
    }

    /// Replace the log context this service records its events under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Look up the catalog record for a key.
    pub async fn detail(&self, raw_key: &str) -> ResponseEnvelope {
        let key = CatalogKey::normalize(raw_key);
        async {
            let outcome = self.catalog.fetch_by_key(&key).await;
            envelope_for(outcome, UNKNOWN_KEY_HINT)
        }
        .instrument(self.span.clone())
        .await
    }

    /// Search editions by title substring.
    pub async fn search(&self, title: &str) -> ResponseEnvelope {
        async {
            let outcome = self.catalog.search_by_title(title).await;
            envelope_for(outcome, UNMATCHED_TITLE_HINT)
        }
        .instrument(self.span.clone())
        .await
    }
}

fn envelope_for(outcome: CallOutcome, not_ok_hint: &str) -> ResponseEnvelope {
    match outcome {
        CallOutcome::Success(payload) if payload.is_ok() => {
            ResponseEnvelope::success(payload.into_result().unwrap_or(Value::Null))
        }
        CallOutcome::Success(payload) => {
            warn!(
                upstream_status = payload.upstream_status().unwrap_or("<missing>"),
                "catalog answered without a usable result"
            );
            ResponseEnvelope::forbidden(not_ok_hint)
        }
        failure @ (CallOutcome::RecoverableFailure | CallOutcome::FatalError) => {
            warn!(outcome = ?failure, "catalog call failed");
            ResponseEnvelope::error(CATALOG_CALL_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockCatalogSource;
    use crate::domain::{CatalogPayload, Disposition, EnvelopeStatus};
    use rstest::rstest;
    use serde_json::json;

    fn service(mock: MockCatalogSource) -> CatalogLookupService {
        CatalogLookupService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn detail_normalises_key_and_returns_result() {
        let mut mock = MockCatalogSource::new();
        mock.expect_fetch_by_key()
            .withf(|key| key.as_str() == "/books/OL1M")
            .times(1)
            .returning(|_| {
                CallOutcome::Success(CatalogPayload::new(json!({
                    "status": "ok",
                    "result": { "title": "The Hobbit" },
                })))
            });

        let envelope = service(mock).detail("/b/OL1M").await;

        assert_eq!(envelope.disposition(), Disposition::Ok);
        assert_eq!(envelope.data(), Some(&json!({ "title": "The Hobbit" })));
    }

    #[tokio::test]
    async fn detail_reports_unknown_key_as_fail() {
        let mut mock = MockCatalogSource::new();
        mock.expect_fetch_by_key().returning(|_| {
            CallOutcome::Success(CatalogPayload::new(json!({
                "status": "error",
                "message": "Not found",
            })))
        });

        let envelope = service(mock).detail("/books/nope").await;

        assert_eq!(envelope.status(), EnvelopeStatus::Fail);
        assert_eq!(envelope.disposition(), Disposition::Forbidden);
        assert_eq!(envelope.message(), Some(UNKNOWN_KEY_HINT));
    }

    #[rstest]
    #[case::recoverable(CallOutcome::RecoverableFailure)]
    #[case::fatal(CallOutcome::FatalError)]
    #[tokio::test]
    async fn search_reports_transport_failures_as_error(#[case] outcome: CallOutcome) {
        let mut mock = MockCatalogSource::new();
        mock.expect_search_by_title()
            .withf(|title| title.to_string() == "dune")
            .return_once(move |_| outcome);

        let envelope = service(mock).search("dune").await;

        assert_eq!(envelope.status(), EnvelopeStatus::Error);
        assert_eq!(envelope.message(), Some(CATALOG_CALL_FAILED));
    }

    #[tokio::test]
    async fn search_without_match_hints_at_title() {
        let mut mock = MockCatalogSource::new();
        mock.expect_search_by_title().returning(|_| {
            CallOutcome::Success(CatalogPayload::new(json!({ "status": "error" })))
        });

        let envelope = service(mock).search("zzzz").await;

        assert_eq!(envelope.message(), Some(UNMATCHED_TITLE_HINT));
    }
}
