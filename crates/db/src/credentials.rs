//! Storage credentials read from the environment.
//!
//! | Env Var               | Required | Description                       |
//! |-----------------------|----------|-----------------------------------|
//! | `DATABASE_URL`        | yes      | PostgreSQL endpoint URL           |
//! | `DATABASE_SECRET_KEY` | yes      | Secret used as the connection password |

use std::fmt;

/// Env var holding the storage endpoint URL.
pub const URL_VAR: &str = "DATABASE_URL";
/// Env var holding the storage secret key.
pub const SECRET_KEY_VAR: &str = "DATABASE_SECRET_KEY";

/// Errors raised while reading storage configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("{0} must be set and non-empty")]
    Missing(&'static str),
}

/// Endpoint URL and secret key for the managed database.
#[derive(Clone)]
pub struct StorageCredentials {
    url: String,
    secret_key: String,
}

impl StorageCredentials {
    /// Build credentials, rejecting blank values.
    pub fn new(url: impl Into<String>, secret_key: impl Into<String>) -> Result<Self, ConfigError> {
        let url = non_empty(URL_VAR, Some(url.into()))?;
        let secret_key = non_empty(SECRET_KEY_VAR, Some(secret_key.into()))?;
        Ok(Self { url, secret_key })
    }

    /// Read both values from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read both values through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = non_empty(URL_VAR, lookup(URL_VAR))?;
        let secret_key = non_empty(SECRET_KEY_VAR, lookup(SECRET_KEY_VAR))?;
        Ok(Self { url, secret_key })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for StorageCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageCredentials")
            .field("url", &self.url)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

fn non_empty(var: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ConfigError::Missing(var)),
    }
}
