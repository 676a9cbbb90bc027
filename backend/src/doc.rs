//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the envelope and request body schemas. The document backs Swagger UI
//! in debug builds and is exported by `cargo run --bin openapi-dump`.

use crate::inbound::http::envelope::EnvelopeSchema;
use crate::inbound::http::wishlist::WishlistKeyRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wishlist backend API",
        description = "Book wishlist validated against an external catalog. \
                       Every response uses a JSEND envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::catalog::detail,
        crate::inbound::http::catalog::search,
        crate::inbound::http::wishlist::add,
        crate::inbound::http::wishlist::remove,
        crate::inbound::http::wishlist::list_all,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(EnvelopeSchema, WishlistKeyRequest)),
    tags(
        (name = "catalog", description = "Read-only catalog lookups"),
        (name = "wishlist", description = "Wishlist management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
