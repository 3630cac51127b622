use secrecy::SecretString;
use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Listen port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Process-wide configuration, loaded once at startup and read-only
/// thereafter.
///
/// The signing credentials are optional at startup: the server comes up
/// without them and fails each issuance request with a configuration error
/// until an operator provides them. The secret is a [`SecretString`] so
/// `Debug` output and logs are redacted by construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    /// LiveKit API key identifier. `None` when unset or empty.
    pub api_key: Option<String>,
    /// LiveKit API secret. `None` when unset or empty.
    pub api_secret: Option<SecretString>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = match vars.get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        // An empty credential cannot sign anything; normalize it to unset so
        // issuance fails with the configuration error instead of a signer fault.
        let api_key = vars
            .get("LIVEKIT_API_KEY")
            .filter(|v| !v.is_empty())
            .cloned();

        let api_secret = vars
            .get("LIVEKIT_API_SECRET")
            .filter(|v| !v.is_empty())
            .map(|v| SecretString::from(v.clone()));

        Ok(Config {
            bind_address: format!("0.0.0.0:{port}"),
            api_key,
            api_secret,
        })
    }

    /// Signing credentials, present only when both halves are configured.
    pub fn signing_credentials(&self) -> Option<(&str, &SecretString)> {
        match (&self.api_key, &self.api_secret) {
            (Some(key), Some(secret)) => Some((key.as_str(), secret)),
            _ => None,
        }
    }
}
