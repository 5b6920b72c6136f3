//! Configuration for token issuance and verification.
//!
//! Follows the same `FromEnv` pattern as `core_config::ServerConfig`:
//! secrets are supplied by the environment at startup and are never
//! embedded in source.

use core_config::{env_required, ConfigError, FromEnv};

/// Token authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - Must be at least 32 characters for security
/// - `JWT_ISSUER` (required) - Expected `iss` claim
/// - `JWT_AUDIENCE` (required) - Expected `aud` claim
///
/// # Example
///
/// ```ignore
/// use axum_helpers::TokenConfig;
/// use core_config::FromEnv;
///
/// // From environment variables
/// let config = TokenConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = TokenConfig::new(
///     "my-super-secret-key-that-is-at-least-32-chars",
///     "market-api",
///     "market-clients",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct TokenConfig {
    /// Signing secret (minimum 32 characters)
    pub secret: String,
    /// Value stamped into and required from the `iss` claim
    pub issuer: String,
    /// Value stamped into and required from the `aud` claim
    pub audience: String,
}

impl TokenConfig {
    /// Create a new TokenConfig with the given secret, issuer and audience.
    ///
    /// # Panics
    /// Panics if the secret is less than 32 characters.
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= 32,
            "JWT secret must be at least 32 characters"
        );
        Self {
            secret,
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }
}

impl FromEnv for TokenConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < 32 {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters for security (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let issuer = env_required("JWT_ISSUER")?;
        let audience = env_required("JWT_AUDIENCE")?;

        Ok(Self {
            secret,
            issuer,
            audience,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_config_new_valid() {
        let secret = "this-is-a-valid-secret-with-32-chars!";
        let config = TokenConfig::new(secret, "iss", "aud");
        assert_eq!(config.secret, secret);
        assert_eq!(config.issuer, "iss");
        assert_eq!(config.audience, "aud");
    }

    #[test]
    #[should_panic(expected = "JWT secret must be at least 32 characters")]
    fn test_token_config_new_too_short() {
        TokenConfig::new("short", "iss", "aud");
    }

    #[test]
    fn test_token_config_from_env_valid() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some("this-is-a-valid-secret-with-32-chars!")),
                ("JWT_ISSUER", Some("market-api")),
                ("JWT_AUDIENCE", Some("market-clients")),
            ],
            || {
                let config = TokenConfig::from_env();
                assert!(config.is_ok());
                let config = config.unwrap();
                assert_eq!(config.secret, "this-is-a-valid-secret-with-32-chars!");
                assert_eq!(config.issuer, "market-api");
                assert_eq!(config.audience, "market-clients");
            },
        );
    }

    #[test]
    fn test_token_config_from_env_missing_secret() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let config = TokenConfig::from_env();
            assert!(config.is_err());
            let err = config.unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET"));
        });
    }

    #[test]
    fn test_token_config_from_env_too_short() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some("short")),
                ("JWT_ISSUER", Some("market-api")),
                ("JWT_AUDIENCE", Some("market-clients")),
            ],
            || {
                let config = TokenConfig::from_env();
                assert!(config.is_err());
                let err = config.unwrap_err();
                assert!(err.to_string().contains("32 characters"));
            },
        );
    }

    #[test]
    fn test_token_config_from_env_missing_issuer() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some("this-is-a-valid-secret-with-32-chars!")),
                ("JWT_ISSUER", None),
                ("JWT_AUDIENCE", Some("market-clients")),
            ],
            || {
                let config = TokenConfig::from_env();
                assert!(config.is_err());
                assert!(config.unwrap_err().to_string().contains("JWT_ISSUER"));
            },
        );
    }
}
