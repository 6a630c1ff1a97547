//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::TokenCodec;
use crate::config::AppConfig;
use crate::services::images::ImageHostClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the database pool,
/// configuration, session token codec, and the image host client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    pool: PgPool,
    tokens: TokenCodec,
    images: Option<ImageHostClient>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        let tokens = TokenCodec::new(&config.session_secret);
        let images = config.media().map(ImageHostClient::new);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                tokens,
                images,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the session token codec.
    #[must_use]
    pub fn tokens(&self) -> &TokenCodec {
        &self.inner.tokens
    }

    /// Get the image host client, if uploads are configured.
    #[must_use]
    pub fn images(&self) -> Option<&ImageHostClient> {
        self.inner.images.as_ref()
    }
}
