//! Catalog read endpoints.
//!
//! ```text
//! GET /api/v1/catalog/detail?key=/books/OL1M
//! GET /api/v1/catalog/search?title=dune
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::ResponseEnvelope;
use crate::inbound::http::envelope::EnvelopeSchema;
use crate::inbound::http::state::HttpState;

/// Query parameters for the detail endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct DetailQuery {
    /// Catalog key, e.g. `/books/OL1M` or `/b/OL1M`.
    pub key: Option<String>,
}

/// Query parameters for the search endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Title substring to match against editions.
    pub title: Option<String>,
}

pub(crate) fn missing_argument(name: &str) -> ResponseEnvelope {
    ResponseEnvelope::fail(format!("error retrieving required argument: {name}"))
}

/// Look up one catalog record.
#[utoipa::path(
    get,
    path = "/api/v1/catalog/detail",
    params(DetailQuery),
    responses(
        (status = 200, description = "Catalog record", body = EnvelopeSchema),
        (status = 400, description = "Missing key", body = EnvelopeSchema),
        (status = 403, description = "Key not known to the catalog", body = EnvelopeSchema),
        (status = 500, description = "Catalog unreachable", body = EnvelopeSchema)
    ),
    tags = ["catalog"],
    operation_id = "getCatalogDetail"
)]
#[get("/catalog/detail")]
pub async fn detail(
    state: web::Data<HttpState>,
    query: web::Query<DetailQuery>,
) -> ResponseEnvelope {
    match query.into_inner().key {
        Some(key) => state.catalog.detail(&key).await,
        None => missing_argument("key"),
    }
}

/// Search catalog editions by title.
#[utoipa::path(
    get,
    path = "/api/v1/catalog/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching editions", body = EnvelopeSchema),
        (status = 400, description = "Missing title", body = EnvelopeSchema),
        (status = 403, description = "No match", body = EnvelopeSchema),
        (status = 500, description = "Catalog unreachable", body = EnvelopeSchema)
    ),
    tags = ["catalog"],
    operation_id = "searchCatalog"
)]
#[get("/catalog/search")]
pub async fn search(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ResponseEnvelope {
    match query.into_inner().title {
        Some(title) => state.catalog.search(&title).await,
        None => missing_argument("title"),
    }
}
