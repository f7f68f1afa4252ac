//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SUPABASE_URL` - Supabase project URL (e.g., <https://abc.supabase.co>)
//! - `SUPABASE_ANON_KEY` - Supabase anonymous API key
//! - `ADMIN_PASSWORD` - Shared secret for the admin panel
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `SUPABASE_STORAGE_BUCKET` - Image bucket (default: product-images)
//! - `CATALOG_CACHE_TTL_SECS` - Read cache lifetime (default: 300)
//! - `WHATSAPP_NUMBER` - Number used for `wa.me` deep links
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_ADMIN_PASSWORD_LENGTH: usize = 12;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.0;

/// Default storage bucket holding product images.
pub const DEFAULT_IMAGE_BUCKET: &str = "product-images";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
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

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Supabase backend configuration
    pub supabase: SupabaseConfig,
    /// Shared secret guarding the admin panel
    pub admin_password: SecretString,
    /// Phone number for WhatsApp deep links (digits, optional leading +)
    pub whatsapp_number: Option<String>,
    /// How long catalog reads stay cached
    pub cache_ttl: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Supabase project configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL without trailing slash
    pub url: String,
    /// Anonymous API key (sent as `apikey` and bearer token)
    pub anon_key: SecretString,
    /// Storage bucket for product images
    pub image_bucket: String,
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("anon_key", &"[REDACTED]")
            .field("image_bucket", &self.image_bucket)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the admin password fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");

        let supabase = SupabaseConfig::from_env()?;

        let admin_password = get_required_secret("ADMIN_PASSWORD")?;
        validate_admin_password(&admin_password, "ADMIN_PASSWORD")?;

        let whatsapp_number = get_optional_env("WHATSAPP_NUMBER")
            .map(|n| normalize_whatsapp_number(&n))
            .filter(|n| !n.is_empty());

        let cache_ttl = get_env_or_default("CATALOG_CACHE_TTL_SECS", "300")
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_CACHE_TTL_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            host,
            port,
            base_url,
            supabase,
            admin_password,
            whatsapp_number,
            cache_ttl,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl SupabaseConfig {
    /// Load the Supabase section from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if the URL or key is absent, and
    /// `ConfigError::InvalidEnvVar` if the URL does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = get_required_env("SUPABASE_URL")?;
        url::Url::parse(&url)
            .map_err(|e| ConfigError::InvalidEnvVar("SUPABASE_URL".to_string(), e.to_string()))?;

        let anon_key = get_required_secret("SUPABASE_ANON_KEY")?;
        if anon_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::MissingEnvVar("SUPABASE_ANON_KEY".to_string()));
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            image_bucket: get_env_or_default("SUPABASE_STORAGE_BUCKET", DEFAULT_IMAGE_BUCKET),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required, non-empty environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Keep only the digits of a phone number; `wa.me` wants no `+` or spaces.
fn normalize_whatsapp_number(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
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
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that the admin password is long, not a placeholder, and not
/// trivially guessable.
fn validate_admin_password(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();

    if value.chars().count() < MIN_ADMIN_PASSWORD_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("must be at least {MIN_ADMIN_PASSWORD_LENGTH} characters"),
        ));
    }

    let lower = value.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(value);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}
