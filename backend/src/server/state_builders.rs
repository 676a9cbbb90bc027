//! Builders turning settings into adapters and server configuration.

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::Url;
use tracing::{info, info_span};

use wishlist::domain::ports::{CatalogSource, WishlistRepository};
use wishlist::outbound::catalog::OpenLibraryHttpSource;
use wishlist::outbound::persistence::{
    DbPool, DieselWishlistRepository, InMemoryWishlistRepository, PoolConfig,
};
use wishlist::settings::WishlistSettings;

use super::{ServerConfig, StartupError};

fn build_catalog_source(
    settings: &WishlistSettings,
) -> Result<Arc<dyn CatalogSource>, StartupError> {
    let base_url = Url::parse(settings.catalog_base_url())
        .map_err(|err| StartupError::Config(format!("catalog_base_url: {err}")))?;
    let span = info_span!("catalog_client", base_url = %base_url);
    let source = OpenLibraryHttpSource::new(base_url, settings.catalog_timeout())
        .map_err(|err| StartupError::Catalog(err.to_string()))?
        .with_retry_policy(settings.catalog_retry_policy())
        .with_span(span);
    Ok(Arc::new(source))
}

async fn build_repository(
    settings: &WishlistSettings,
) -> Result<Arc<dyn WishlistRepository>, StartupError> {
    match settings.database_url() {
        Some(url) => {
            let config = PoolConfig::new(url).with_max_size(settings.database_max_connections());
            let pool = DbPool::connect(config)
                .await
                .map_err(|err| StartupError::Database(err.to_string()))?;
            info!("using PostgreSQL wishlist store");
            Ok(Arc::new(DieselWishlistRepository::new(pool)))
        }
        None => {
            info!("no database_url configured; wishlist is kept in memory");
            Ok(Arc::new(InMemoryWishlistRepository::new()))
        }
    }
}

/// Resolve settings into a ready-to-run [`ServerConfig`].
///
/// # Errors
/// Returns [`StartupError`] when the bind address or catalog URL is invalid,
/// or the database cannot be reached and migrated.
pub async fn server_config_from_settings(
    settings: &WishlistSettings,
) -> Result<ServerConfig, StartupError> {
    let bind_addr: SocketAddr = settings
        .bind_addr()
        .parse()
        .map_err(|err| StartupError::Config(format!("bind_addr: {err}")))?;
    let catalog = build_catalog_source(settings)?;
    let repository = build_repository(settings).await?;
    Ok(ServerConfig::new(bind_addr, catalog).with_repository(repository))
}
