//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MADO_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `MADO_BASE_URL` - Public URL the site is served from
//! - `MADO_SESSION_SECRET` - Session token signing secret (min 32 chars, high entropy)
//! - `MADO_ADMIN_PASSWORD` - Shared admin dashboard password
//!
//! ## Optional
//! - `MADO_HOST` - Bind address (default: 127.0.0.1)
//! - `MADO_PORT` - Listen port (default: 3000)
//! - `MEDIA_CLOUD_NAME` - Image host cloud name (enables uploads)
//! - `MEDIA_UPLOAD_PRESET` - Image host unsigned upload preset

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_SESSION_SECRET_LENGTH: usize = 32;
const MIN_ADMIN_PASSWORD_LENGTH: usize = 8;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Session token signing secret
    pub session_secret: SecretString,
    /// Shared admin dashboard password
    pub admin_password: SecretString,
    /// Image host configuration (optional - uploads disabled without it)
    pub media: Option<MediaHostConfig>,
}

/// Image host configuration for the media library.
///
/// Implements `Debug` manually to redact the upload preset, which grants
/// unauthenticated upload access to the cloud account.
#[derive(Clone)]
pub struct MediaHostConfig {
    /// Cloud account name (forms part of the upload URL)
    pub cloud_name: String,
    /// Unsigned upload preset
    pub upload_preset: SecretString,
}

impl std::fmt::Debug for MediaHostConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaHostConfig")
            .field("cloud_name", &self.cloud_name)
            .field("upload_preset", &"[REDACTED]")
            .finish()
    }
}

impl MediaHostConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let cloud_name = get_optional_env("MEDIA_CLOUD_NAME");
        let upload_preset = get_optional_env("MEDIA_UPLOAD_PRESET");

        match (cloud_name, upload_preset) {
            (Some(name), Some(preset)) => Ok(Some(Self {
                cloud_name: name,
                upload_preset: SecretString::from(preset),
            })),
            (None, None) => Ok(None),
            _ => Err(ConfigError::InvalidEnvVar(
                "MEDIA_*".to_string(),
                "Both MEDIA_CLOUD_NAME and MEDIA_UPLOAD_PRESET must be set together".to_string(),
            )),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("MADO_DATABASE_URL")?;
        let host = get_env_or_default("MADO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MADO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MADO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MADO_PORT".to_string(), e.to_string()))?;
        let base_url = get_required_env("MADO_BASE_URL")?;

        let session_secret = get_validated_secret("MADO_SESSION_SECRET")?;
        validate_session_secret(&session_secret, "MADO_SESSION_SECRET")?;

        let admin_password = get_admin_password("MADO_ADMIN_PASSWORD")?;
        let media = MediaHostConfig::from_env()?;

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            session_secret,
            admin_password,
            media,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS (controls the cookie `Secure` flag).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }

    /// Returns a reference to the image host configuration (if configured).
    #[must_use]
    pub const fn media(&self) -> Option<&MediaHostConfig> {
        self.media.as_ref()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a session secret meets minimum length requirements.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SESSION_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Load the admin password with a relaxed length-only check.
///
/// The shared dashboard password is chosen by a human, so the entropy
/// requirement applied to machine-generated secrets does not apply here.
fn get_admin_password(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    if value.len() < MIN_ADMIN_PASSWORD_LENGTH {
        return Err(ConfigError::InsecureSecret(
            key.to_string(),
            format!("must be at least {MIN_ADMIN_PASSWORD_LENGTH} characters"),
        ));
    }
    Ok(SecretString::from(value))
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)]
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real secrets have high entropy)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        // All same character = 0 entropy
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_high() {
        let entropy = shannon_entropy("aB3$xY9!mK2@nL5#");
        assert!(entropy > 3.3);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-signing-key-here", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        let result = validate_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_session_secret_too_short() {
        let secret = SecretString::from("short");
        let result = validate_session_secret(&secret, "TEST_SESSION");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_session_secret_valid_length() {
        let secret = SecretString::from("a".repeat(32));
        let result = validate_session_secret(&secret, "TEST_SESSION");
        assert!(result.is_ok());
    }

    #[test]
    fn test_is_secure_follows_base_url_scheme() {
        let mut config = test_config();
        assert!(!config.is_secure());
        config.base_url = "https://madocreatives.com".to_string();
        assert!(config.is_secure());
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_media_host_config_debug_redacts_preset() {
        let config = MediaHostConfig {
            cloud_name: "mado".to_string(),
            upload_preset: SecretString::from("unsigned_preset_abc123"),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("mado"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("unsigned_preset_abc123"));
    }

    fn test_config() -> AppConfig {
        AppConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from("x".repeat(32)),
            admin_password: SecretString::from("test-admin-pw"),
            media: None,
        }
    }
}
