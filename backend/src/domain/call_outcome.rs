//! Outcome of one logical call to the external catalog.
//!
//! Transport problems and upstream "no match" answers are deliberately kept
//! apart: a payload whose own `status` is not `ok` still arrives as
//! [`CallOutcome::Success`] and the caller decides what it means.

use serde_json::Value;

/// Upstream status value signalling a usable answer.
pub const UPSTREAM_STATUS_OK: &str = "ok";

/// Parsed JSON body returned by the catalog.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use wishlist::domain::CatalogPayload;
///
/// let payload = CatalogPayload::new(json!({ "status": "ok", "result": { "title": "Dune" } }));
/// assert!(payload.is_ok());
/// assert_eq!(payload.result(), Some(&json!({ "title": "Dune" })));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPayload(Value);

impl CatalogPayload {
    /// Wrap a parsed catalog body.
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// The upstream `status` field, when present and a string.
    pub fn upstream_status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// Whether the upstream reported `status == "ok"`.
    pub fn is_ok(&self) -> bool {
        self.upstream_status() == Some(UPSTREAM_STATUS_OK)
    }

    /// The upstream `result` field, if any.
    pub fn result(&self) -> Option<&Value> {
        self.0.get("result")
    }

    /// Take ownership of the `result` field, if any.
    pub fn into_result(self) -> Option<Value> {
        match self.0 {
            Value::Object(mut map) => map.remove("result"),
            _ => None,
        }
    }
}

/// Tri-state result of a catalog call after retries.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    /// Transport and parsing succeeded.
    Success(CatalogPayload),
    /// Timeouts, connection failures or non-2xx answers outlasted the retry
    /// budget. Carries no payload.
    RecoverableFailure,
    /// The catalog answered with a body that is not JSON.
    FatalError,
}

impl CallOutcome {
    /// Consume the outcome, returning the payload when the call succeeded.
    pub fn into_payload(self) -> Option<CatalogPayload> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::RecoverableFailure | Self::FatalError => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({ "status": "ok" }), true)]
    #[case(json!({ "status": "error", "message": "Not found" }), false)]
    #[case(json!({ "result": {} }), false)]
    #[case(json!({ "status": 1 }), false)]
    #[case(json!([1, 2, 3]), false)]
    fn recognises_upstream_ok(#[case] body: Value, #[case] ok: bool) {
        assert_eq!(CatalogPayload::new(body).is_ok(), ok);
    }

    #[test]
    fn into_result_extracts_result_field() {
        let payload = CatalogPayload::new(json!({ "status": "ok", "result": ["/books/OL1M"] }));
        assert_eq!(payload.into_result(), Some(json!(["/books/OL1M"])));
    }

    #[test]
    fn into_result_is_none_for_non_objects() {
        assert_eq!(CatalogPayload::new(json!("ok")).into_result(), None);
    }

    #[test]
    fn failures_carry_no_payload() {
        assert!(CallOutcome::RecoverableFailure.into_payload().is_none());
        assert!(CallOutcome::FatalError.into_payload().is_none());
    }
}
