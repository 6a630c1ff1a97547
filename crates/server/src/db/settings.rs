//! Site settings database operations.
//!
//! A single JSONB row keyed `"global"`, created with defaults on first read.

use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tracing::instrument;

use super::RepositoryError;
use crate::models::SiteSettings;
use crate::models::settings::SETTINGS_KEY;

/// Get the site settings, creating the row with defaults if absent.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if a query fails, or
/// `RepositoryError::DataCorruption` if the stored JSON does not parse.
#[instrument(skip(pool))]
pub async fn get_settings(pool: &PgPool) -> Result<SiteSettings, RepositoryError> {
    let defaults = serde_json::to_value(SiteSettings::default())
        .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

    // Read-through-create: insert defaults, then read whatever is there.
    // The DO NOTHING arm keeps a concurrent first read from failing.
    sqlx::query(
        r"
        INSERT INTO site_settings (key, value)
        VALUES ($1, $2)
        ON CONFLICT (key) DO NOTHING
        ",
    )
    .bind(SETTINGS_KEY)
    .bind(&defaults)
    .execute(pool)
    .await?;

    let value = sqlx::query_scalar::<_, JsonValue>(
        "SELECT value FROM site_settings WHERE key = $1",
    )
    .bind(SETTINGS_KEY)
    .fetch_one(pool)
    .await?;

    serde_json::from_value(value)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid settings document: {e}")))
}

/// Replace the site settings document.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the upsert fails.
#[instrument(skip(pool, settings))]
pub async fn put_settings(
    pool: &PgPool,
    settings: &SiteSettings,
) -> Result<SiteSettings, RepositoryError> {
    let value = serde_json::to_value(settings)
        .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

    sqlx::query(
        r"
        INSERT INTO site_settings (key, value)
        VALUES ($1, $2)
        ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()
        ",
    )
    .bind(SETTINGS_KEY)
    .bind(&value)
    .execute(pool)
    .await?;

    Ok(settings.clone())
}
