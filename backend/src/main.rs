//! Wishlist backend entry-point.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{StartupError, create_server, server_config_from_settings};
use wishlist::inbound::http::health::HealthState;
use wishlist::settings::WishlistSettings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = WishlistSettings::load_from_iter(std::env::args_os())
        .map_err(|err| StartupError::Config(err.to_string()))?;
    let config = server_config_from_settings(&settings).await?;
    info!(bind_addr = %config.bind_addr, "starting wishlist server");

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
