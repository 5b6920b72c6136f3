use super::config::TokenConfig;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token time-to-live. Fixed at one hour; tokens cannot be revoked,
/// so the lifetime stays short.
pub const TOKEN_TTL: i64 = 3600;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,   // Subject (user ID)
    pub name: String,  // Display name
    pub email: String, // User email
    pub iss: String,   // Issuer
    pub aud: String,   // Audience
    pub iat: i64,      // Issued at
    pub exp: i64,      // Expiration time
}

/// Why a presented token was rejected.
///
/// Exactly one variant is produced per failure; verification never
/// returns a partially-valid result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    BadSignature,

    #[error("token has expired")]
    Expired,

    #[error("token issuer or audience mismatch")]
    IssuerMismatch,
}

/// The subject recovered from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
}

/// Stateless JWT authentication.
///
/// Issues and verifies HS256-signed tokens. Only the configured
/// algorithm is ever accepted on verification; tokens claiming any
/// other algorithm (including "none") are rejected outright.
#[derive(Clone)]
pub struct TokenAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
}

impl TokenAuth {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }

    /// Issue a token for the given subject, valid from `now` for [`TOKEN_TTL`].
    pub fn issue_at(
        &self,
        user_id: Uuid,
        name: &str,
        email: &str,
        now: DateTime<Utc>,
    ) -> eyre::Result<String> {
        let claims = TokenClaims {
            sub: user_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_TTL)).timestamp(),
        };

        let header = Header {
            alg: Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(&header, &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Issue a token valid from the current wall clock.
    pub fn issue(&self, user_id: Uuid, name: &str, email: &str) -> eyre::Result<String> {
        self.issue_at(user_id, name, email, Utc::now())
    }

    /// Verify a presented token against the injected clock and decode
    /// its claims.
    ///
    /// Checks signature and algorithm first, then issuer/audience,
    /// then expiry (`now` must be strictly before `exp`).
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        // Expiry is checked below against the caller's clock, not the
        // library's wall clock, so verification is deterministic in tests.
        validation.validate_exp = false;

        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        AuthError::BadSignature
                    }
                    ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                        AuthError::IssuerMismatch
                    }
                    ErrorKind::ExpiredSignature => AuthError::Expired,
                    _ => AuthError::Malformed,
                }
            })?;

        if now.timestamp() >= token_data.claims.exp {
            return Err(AuthError::Expired);
        }

        Ok(token_data.claims)
    }

    /// Verify against the current wall clock.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token and recover the subject identity.
    ///
    /// A `sub` claim that is not a UUID means the token was not issued
    /// by this service and is treated as malformed.
    pub fn resolve_at(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, AuthError> {
        let claims = self.verify_at(token, now)?;
        let id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::Malformed)?;

        Ok(Identity {
            id,
            email: claims.email,
        })
    }

    /// Resolve against the current wall clock.
    pub fn resolve(&self, token: &str) -> Result<Identity, AuthError> {
        self.resolve_at(token, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_auth() -> TokenAuth {
        TokenAuth::new(&TokenConfig::new(
            "test-secret-that-is-at-least-32-chars!!",
            "market-api",
            "market-clients",
        ))
    }

    #[test]
    fn test_round_trip_within_lifetime() {
        let auth = test_auth();
        let user_id = Uuid::now_v7();
        let t0 = Utc::now();

        let token = auth
            .issue_at(user_id, "Jane Doe", "jane@example.com", t0)
            .unwrap();

        let identity = auth
            .resolve_at(&token, t0 + Duration::minutes(59))
            .unwrap();
        assert_eq!(identity.id, user_id);
        assert_eq!(identity.email, "jane@example.com");
    }

    #[test]
    fn test_expired_after_lifetime() {
        let auth = test_auth();
        let t0 = Utc::now();

        let token = auth
            .issue_at(Uuid::now_v7(), "Jane Doe", "jane@example.com", t0)
            .unwrap();

        let result = auth.verify_at(&token, t0 + Duration::minutes(61));
        assert_eq!(result.unwrap_err(), AuthError::Expired);
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let auth = test_auth();
        let t0 = Utc::now();

        let token = auth
            .issue_at(Uuid::now_v7(), "Jane Doe", "jane@example.com", t0)
            .unwrap();

        // now == exp is already expired
        let result = auth.verify_at(&token, t0 + Duration::seconds(TOKEN_TTL));
        assert_eq!(result.unwrap_err(), AuthError::Expired);
    }

    #[test]
    fn test_wrong_key_is_bad_signature() {
        let auth = test_auth();
        let other = TokenAuth::new(&TokenConfig::new(
            "another-secret-that-is-32-characters!!!",
            "market-api",
            "market-clients",
        ));
        let t0 = Utc::now();

        let token = auth
            .issue_at(Uuid::now_v7(), "Jane Doe", "jane@example.com", t0)
            .unwrap();

        let result = other.verify_at(&token, t0);
        assert_eq!(result.unwrap_err(), AuthError::BadSignature);
    }

    #[test]
    fn test_tampered_claims_are_bad_signature() {
        let auth = test_auth();
        let t0 = Utc::now();

        let token_a = auth
            .issue_at(Uuid::now_v7(), "Jane Doe", "jane@example.com", t0)
            .unwrap();
        let token_b = auth
            .issue_at(Uuid::now_v7(), "John Doe", "john@example.com", t0)
            .unwrap();

        // Well-formed claims from one token with the signature of another
        let claims_a: Vec<&str> = token_a.split('.').collect();
        let sig_b = token_b.split('.').nth(2).unwrap();
        let tampered = format!("{}.{}.{}", claims_a[0], claims_a[1], sig_b);

        let result = auth.verify_at(&tampered, t0);
        assert_eq!(result.unwrap_err(), AuthError::BadSignature);
    }

    #[test]
    fn test_garbage_is_malformed() {
        let auth = test_auth();

        let result = auth.verify_at("not-even-a-token", Utc::now());
        assert_eq!(result.unwrap_err(), AuthError::Malformed);
    }

    #[test]
    fn test_issuer_mismatch() {
        let auth = test_auth();
        let other = TokenAuth::new(&TokenConfig::new(
            "test-secret-that-is-at-least-32-chars!!",
            "someone-else",
            "market-clients",
        ));
        let t0 = Utc::now();

        let token = other
            .issue_at(Uuid::now_v7(), "Jane Doe", "jane@example.com", t0)
            .unwrap();

        let result = auth.verify_at(&token, t0);
        assert_eq!(result.unwrap_err(), AuthError::IssuerMismatch);
    }

    #[test]
    fn test_audience_mismatch() {
        let auth = test_auth();
        let other = TokenAuth::new(&TokenConfig::new(
            "test-secret-that-is-at-least-32-chars!!",
            "market-api",
            "someone-elses-clients",
        ));
        let t0 = Utc::now();

        let token = other
            .issue_at(Uuid::now_v7(), "Jane Doe", "jane@example.com", t0)
            .unwrap();

        let result = auth.verify_at(&token, t0);
        assert_eq!(result.unwrap_err(), AuthError::IssuerMismatch);
    }

    #[test]
    fn test_claims_carry_subject_fields() {
        let auth = test_auth();
        let user_id = Uuid::now_v7();
        let t0 = Utc::now();

        let token = auth
            .issue_at(user_id, "Jane Doe", "jane@example.com", t0)
            .unwrap();
        let claims = auth.verify_at(&token, t0).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.name, "Jane Doe");
        assert_eq!(claims.email, "jane@example.com");
        assert_eq!(claims.iat, t0.timestamp());
        assert_eq!(claims.exp, t0.timestamp() + TOKEN_TTL);
    }
}
