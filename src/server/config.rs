//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

static DEFAULT_HOST: &str = "0.0.0.0";
static DEFAULT_PORT: u16 = 8787;

/// Key material used to verify identity tokens.
#[derive(Clone, Debug)]
pub enum IdentityKey {
    /// RS256 public key in PEM format
    RsaPem(String),
    /// HS256 shared secret
    Secret(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Domain callers' emails must belong to, without the leading `@`
    pub allowed_email_domain: String,
    pub identity_key: IdentityKey,
    pub identity_issuer: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup, empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let require =
            |var: &str| get(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let database_url = require("DATABASE_URL")?;
        let allowed_email_domain = require("ALLOWED_EMAIL_DOMAIN")?
            .trim()
            .trim_start_matches('@')
            .to_lowercase();

        let identity_key = match (get("IDENTITY_JWT_PUBLIC_KEY"), get("IDENTITY_JWT_SECRET")) {
            (Some(pem), _) => IdentityKey::RsaPem(pem),
            (None, Some(secret)) => IdentityKey::Secret(secret),
            (None, None) => {
                return Err(ConfigError::MissingEnvVar(
                    "IDENTITY_JWT_PUBLIC_KEY or IDENTITY_JWT_SECRET".to_string(),
                ))
            }
        };

        let port = match get("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            allowed_email_domain,
            identity_key,
            identity_issuer: get("IDENTITY_JWT_ISSUER"),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }
}
