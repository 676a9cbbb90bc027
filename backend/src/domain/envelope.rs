//! JSEND-style response envelope.
//!
//! Every operation answers with `{status, message?, data?}`. The envelope is
//! transport agnostic: it records a [`Disposition`] that inbound adapters map
//! to protocol status codes, and the public `status` is derived from it so
//! the two can never disagree.

use serde::Serialize;
use serde_json::Value;

const FALLBACK_ERROR_MESSAGE: &str = "unexpected error";

/// Public envelope status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    /// The operation succeeded.
    Success,
    /// The request was understood but rejected (bad input, unknown key).
    Fail,
    /// Something went wrong while processing a valid request.
    Error,
}

/// Finer-grained outcome used to pick a transport status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Success with a result (HTTP 200).
    Ok,
    /// Success that created a resource (HTTP 201).
    Created,
    /// Malformed or unusable input (HTTP 400).
    InvalidRequest,
    /// Well-formed input the catalog or store refused (HTTP 403).
    Forbidden,
    /// Upstream or internal failure (HTTP 500).
    InternalError,
}

impl Disposition {
    /// Envelope status implied by this disposition.
    pub fn status(self) -> EnvelopeStatus {
        match self {
            Self::Ok | Self::Created => EnvelopeStatus::Success,
            Self::InvalidRequest | Self::Forbidden => EnvelopeStatus::Fail,
            Self::InternalError => EnvelopeStatus::Error,
        }
    }
}

/// Response envelope returned by every operation.
///
/// ## Invariants
/// - `error` envelopes always carry a non-empty message.
/// - `success` and `fail` envelopes always serialise a `data` field, `null`
///   when nothing was attached.
/// - `error` envelopes never serialise `data`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use wishlist::domain::{EnvelopeStatus, ResponseEnvelope};
///
/// let envelope = ResponseEnvelope::forbidden("book not found in wish list");
/// assert_eq!(envelope.status(), EnvelopeStatus::Fail);
/// assert_eq!(
///     serde_json::to_value(&envelope).expect("serialisable"),
///     json!({ "status": "fail", "message": "book not found in wish list", "data": null })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "EnvelopeDto")]
pub struct ResponseEnvelope {
    disposition: Disposition,
    message: Option<String>,
    data: Option<Value>,
}

impl ResponseEnvelope {
    fn new(disposition: Disposition, message: Option<String>, data: Option<Value>) -> Self {
        Self {
            disposition,
            message,
            data,
        }
    }

    /// `success` envelope with a payload.
    pub fn success(data: Value) -> Self {
        Self::new(Disposition::Ok, None, Some(data))
    }

    /// `success` envelope for a newly created resource, with empty data.
    pub fn created() -> Self {
        Self::new(Disposition::Created, None, None)
    }

    /// `fail` envelope for malformed or unusable input.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(Disposition::InvalidRequest, Some(message.into()), None)
    }

    /// `fail` envelope for input the catalog or store refused.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(Disposition::Forbidden, Some(message.into()), None)
    }

    /// `error` envelope. A blank message is replaced so the envelope always
    /// explains itself.
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_owned()
        } else {
            message
        };
        Self::new(Disposition::InternalError, Some(message), None)
    }

    /// Public envelope status.
    pub fn status(&self) -> EnvelopeStatus {
        self.disposition.status()
    }

    /// Outcome used to choose a transport status code.
    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// Human-readable message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Attached data, if any.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

#[derive(Debug, Serialize)]
struct EnvelopeDto {
    status: EnvelopeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    // Outer `None` omits the field; `Some(None)` renders `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Option<Value>>,
}

impl From<ResponseEnvelope> for EnvelopeDto {
    fn from(value: ResponseEnvelope) -> Self {
        let status = value.status();
        let data = match status {
            EnvelopeStatus::Success | EnvelopeStatus::Fail => Some(value.data),
            EnvelopeStatus::Error => value.data.map(Some),
        };
        Self {
            status,
            message: value.message,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn render(envelope: &ResponseEnvelope) -> Value {
        serde_json::to_value(envelope).expect("envelope serialises")
    }

    #[rstest]
    #[case::ok(Disposition::Ok, EnvelopeStatus::Success)]
    #[case::created(Disposition::Created, EnvelopeStatus::Success)]
    #[case::invalid(Disposition::InvalidRequest, EnvelopeStatus::Fail)]
    #[case::forbidden(Disposition::Forbidden, EnvelopeStatus::Fail)]
    #[case::internal(Disposition::InternalError, EnvelopeStatus::Error)]
    fn status_follows_disposition(
        #[case] disposition: Disposition,
        #[case] status: EnvelopeStatus,
    ) {
        assert_eq!(disposition.status(), status);
    }

    #[test]
    fn created_renders_null_data() {
        assert_eq!(
            render(&ResponseEnvelope::created()),
            json!({ "status": "success", "data": null })
        );
    }

    #[test]
    fn success_renders_payload() {
        let envelope = ResponseEnvelope::success(json!({ "key_normalized": "/books/OL1M" }));
        assert_eq!(
            render(&envelope),
            json!({ "status": "success", "data": { "key_normalized": "/books/OL1M" } })
        );
    }

    #[test]
    fn fail_always_renders_data_field() {
        let value = render(&ResponseEnvelope::fail("error retrieving required argument: key"));
        assert_eq!(value.get("data"), Some(&Value::Null));
        assert_eq!(value.get("status"), Some(&json!("fail")));
    }

    #[test]
    fn error_omits_data() {
        let bare = render(&ResponseEnvelope::error("internal error calling catalog"));
        assert_eq!(
            bare,
            json!({ "status": "error", "message": "internal error calling catalog" })
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn error_message_is_never_blank(#[case] message: &str) {
        let envelope = ResponseEnvelope::error(message);
        assert_eq!(envelope.message(), Some(FALLBACK_ERROR_MESSAGE));
    }
}
