//! HTTP inbound adapter exposing the catalog and wishlist endpoints.

pub mod catalog;
pub mod envelope;
pub mod health;
pub mod state;
pub mod wishlist;

use actix_web::web;

/// Register the `/api/v1` scope.
///
/// Shared by the server bootstrap and the integration tests so both see the
/// same routing table. Callers provide [`state::HttpState`] as app data.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(envelope::query_config())
            .service(catalog::detail)
            .service(catalog::search)
            .service(web::resource("/wishlist/add").to(wishlist::add))
            .service(web::resource("/wishlist/remove").to(wishlist::remove))
            .service(wishlist::list_all),
    );
}
