//! Backend entry-point: configuration, logging, and server startup.

mod server;

use std::env;

use backend::outbound::persistence::{DbPool, PoolConfig};
use server::ServerConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let mut config = ServerConfig::from_env()?;
    match env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
            config = config.with_db_pool(pool);
        }
        Err(_) => warn!("DATABASE_URL not set; serving seeded in-memory fixtures"),
    }

    server::create_server(config)?.await
}
