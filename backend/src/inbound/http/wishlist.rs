//! Wishlist endpoints.
//!
//! ```text
//! POST /api/v1/wishlist/add        {"key": "/books/OL1M"}
//! POST /api/v1/wishlist/remove     {"key": "/books/OL1M"}
//! GET  /api/v1/wishlist/list_all
//! ```
//!
//! `add` and `remove` are registered for every method so that non-mutating
//! requests receive a `fail` envelope rather than a bare 405. Bodies are read
//! from the raw payload up to [`MAX_BODY_BYTES`] and decoded here, which keeps
//! oversized and undecodable bodies inside the envelope contract.

use actix_web::http::Method;
use actix_web::{HttpRequest, get, web};
use futures_util::StreamExt;
use serde_json::Value;

use crate::domain::ResponseEnvelope;
use crate::inbound::http::envelope::EnvelopeSchema;
use crate::inbound::http::state::HttpState;

const KEY_FIELD: &str = "key";

/// Largest request body `add` and `remove` will read.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Request body accepted by `add` and `remove`.
#[derive(Debug, serde::Deserialize, utoipa::ToSchema)]
pub struct WishlistKeyRequest {
    /// Catalog key to add or remove.
    #[schema(example = "/books/OL1M")]
    pub key: String,
}

fn is_mutating(method: &Method) -> bool {
    [Method::POST, Method::PUT, Method::PATCH, Method::DELETE].contains(method)
}

fn check_method(method: &Method) -> Result<(), ResponseEnvelope> {
    if is_mutating(method) {
        Ok(())
    } else {
        Err(ResponseEnvelope::fail(format!(
            "request method {method} is not allowed; use POST"
        )))
    }
}

async fn read_body(mut payload: web::Payload) -> Result<Vec<u8>, ResponseEnvelope> {
    let mut body = Vec::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| {
            ResponseEnvelope::fail(format!("error reading request body [{err}]"))
        })?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(ResponseEnvelope::fail(format!(
                "request body exceeds {MAX_BODY_BYTES} bytes"
            )));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn parse_key(body: &[u8]) -> Result<String, ResponseEnvelope> {
    let value: Value = serde_json::from_slice(body).map_err(|err| {
        ResponseEnvelope::fail(format!("error decoding request body [{err}]"))
    })?;

    value
        .get(KEY_FIELD)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            ResponseEnvelope::fail(format!("error retrieving required POST argument: {KEY_FIELD}"))
        })
}

/// Apply the method and body checks shared by `add` and `remove`, yielding
/// the raw key on success. The body is not read for rejected methods.
async fn extract_key(
    req: &HttpRequest,
    payload: web::Payload,
) -> Result<String, ResponseEnvelope> {
    check_method(req.method())?;
    let body = read_body(payload).await?;
    parse_key(&body)
}

/// Validate a key against the catalog and store it.
#[utoipa::path(
    post,
    path = "/api/v1/wishlist/add",
    request_body = WishlistKeyRequest,
    responses(
        (status = 201, description = "Book added", body = EnvelopeSchema),
        (
            status = 400,
            description = "Bad request, duplicate or store failure",
            body = EnvelopeSchema
        ),
        (status = 403, description = "Key not known to the catalog", body = EnvelopeSchema),
        (status = 500, description = "Catalog unreachable", body = EnvelopeSchema)
    ),
    tags = ["wishlist"],
    operation_id = "addWishlistBook"
)]
pub async fn add(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<HttpState>,
) -> ResponseEnvelope {
    match extract_key(&req, payload).await {
        Ok(key) => state.wishlist.add(&key).await,
        Err(envelope) => envelope,
    }
}

/// Remove a key from the wishlist.
#[utoipa::path(
    post,
    path = "/api/v1/wishlist/remove",
    request_body = WishlistKeyRequest,
    responses(
        (status = 200, description = "Book removed", body = EnvelopeSchema),
        (status = 400, description = "Bad request or store failure", body = EnvelopeSchema),
        (status = 403, description = "Book not in the wishlist", body = EnvelopeSchema)
    ),
    tags = ["wishlist"],
    operation_id = "removeWishlistBook"
)]
pub async fn remove(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<HttpState>,
) -> ResponseEnvelope {
    match extract_key(&req, payload).await {
        Ok(key) => state.wishlist.remove(&key).await,
        Err(envelope) => envelope,
    }
}

/// List every stored key with live catalog details.
#[utoipa::path(
    get,
    path = "/api/v1/wishlist/list_all",
    responses(
        (status = 200, description = "Wishlist with details", body = EnvelopeSchema),
        (status = 500, description = "Store failure", body = EnvelopeSchema)
    ),
    tags = ["wishlist"],
    operation_id = "listWishlist"
)]
#[get("/wishlist/list_all")]
pub async fn list_all(state: web::Data<HttpState>) -> ResponseEnvelope {
    state.wishlist.list_all().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Method::POST)]
    #[case(Method::PUT)]
    #[case(Method::PATCH)]
    #[case(Method::DELETE)]
    fn mutating_methods_pass_through(#[case] method: Method) {
        assert!(check_method(&method).is_ok());
    }

    #[rstest]
    fn key_is_taken_verbatim() {
        let key = parse_key(br#"{"key": "/b/OL1M"}"#).expect("key extracted");
        assert_eq!(key, "/b/OL1M");
    }

    #[rstest]
    #[case(Method::GET)]
    #[case(Method::HEAD)]
    #[case(Method::OPTIONS)]
    fn read_methods_are_rejected(#[case] method: Method) {
        let expected = format!("request method {method} is not allowed; use POST");
        let envelope = check_method(&method).expect_err("rejected");
        assert_eq!(envelope.message(), Some(expected.as_str()));
    }

    #[rstest]
    fn malformed_json_reports_decoder_detail() {
        let envelope = parse_key(b"{not json").expect_err("rejected");
        let message = envelope.message().expect("message");
        assert!(message.starts_with("error decoding request body ["), "{message}");
        assert!(message.ends_with(']'), "{message}");
    }

    #[rstest]
    #[case::missing(&br#"{"title": "Dune"}"#[..])]
    #[case::empty_object(&b"{}"[..])]
    #[case::not_a_string(&br#"{"key": 42}"#[..])]
    fn missing_key_is_reported(#[case] body: &[u8]) {
        let envelope = parse_key(body).expect_err("rejected");
        assert_eq!(
            envelope.message(),
            Some("error retrieving required POST argument: key")
        );
    }
}
