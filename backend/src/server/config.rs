//! HTTP server configuration object and helpers.

use actix_web::cookie::{Key, SameSite};
use backend::outbound::persistence::DbPool;
use std::env;
use std::net::SocketAddr;
use tracing::warn;

const DEFAULT_KEY_PATH: &str = "/var/run/secrets/session_key";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration using application preferences.
    #[must_use]
    pub const fn new(
        key: Key,
        cookie_secure: bool,
        same_site: SameSite,
        bind_addr: SocketAddr,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
        }
    }

    /// Read configuration from the process environment.
    ///
    /// - `SESSION_KEY_FILE`: session signing key material (>= 32 bytes).
    ///   In debug builds, or when `SESSION_ALLOW_EPHEMERAL=1`, a missing
    ///   key falls back to a generated one.
    /// - `SESSION_COOKIE_SECURE`: `0` disables the `Secure` cookie flag.
    /// - `BIND_ADDR`: socket address to listen on, default `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the key is unreadable outside the
    /// dev fallback, or when `BIND_ADDR` does not parse.
    pub fn from_env() -> std::io::Result<Self> {
        let key = session_key_from_env()?;

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|v| v != "0")
            .unwrap_or(true);

        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
            .parse()
            .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

        Ok(Self::new(key, cookie_secure, SameSite::Lax, bind_addr))
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, the server uses database-backed repositories
    /// instead of the seeded in-memory fixtures.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

fn session_key_from_env() -> std::io::Result<Key> {
    let key_path = env::var("SESSION_KEY_FILE").unwrap_or_else(|_| DEFAULT_KEY_PATH.into());
    match std::fs::read(&key_path) {
        Ok(bytes) if bytes.len() >= 32 => Ok(Key::derive_from(&bytes)),
        Ok(bytes) => Err(std::io::Error::other(format!(
            "session key at {key_path} is too short: {} bytes (need >= 32)",
            bytes.len()
        ))),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}
