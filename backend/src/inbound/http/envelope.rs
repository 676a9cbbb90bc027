//! HTTP rendering of [`ResponseEnvelope`].
//!
//! The envelope's disposition picks the status code, so handlers return the
//! envelope directly and never build responses by hand.

use actix_web::body::BoxBody;
use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::http::header::{CACHE_CONTROL, HeaderValue};
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Disposition, ResponseEnvelope};

/// OpenAPI shape of the envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct EnvelopeSchema {
    /// `success`, `fail` or `error`.
    #[schema(example = "fail")]
    pub status: String,
    /// Human-readable explanation; always present for `error`.
    #[schema(example = "book not found in wish list")]
    pub message: Option<String>,
    /// Operation payload.
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

/// HTTP status code for a disposition.
pub fn status_code(disposition: Disposition) -> StatusCode {
    match disposition {
        Disposition::Ok => StatusCode::OK,
        Disposition::Created => StatusCode::CREATED,
        Disposition::InvalidRequest => StatusCode::BAD_REQUEST,
        Disposition::Forbidden => StatusCode::FORBIDDEN,
        Disposition::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render an envelope as a JSON response.
pub fn envelope_response(envelope: &ResponseEnvelope) -> HttpResponse {
    HttpResponse::build(status_code(envelope.disposition()))
        .insert_header((CACHE_CONTROL, HeaderValue::from_static("no-store")))
        .json(envelope)
}

impl Responder for ResponseEnvelope {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        envelope_response(&self)
    }
}

/// Query extractor configuration answering malformed query strings with a
/// `fail` envelope instead of actix's plain-text body.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req| {
        let envelope = ResponseEnvelope::fail(format!("error decoding query string [{err}]"));
        InternalError::from_response(err, envelope_response(&envelope)).into()
    })
}
