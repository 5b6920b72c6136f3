use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum_helpers::TokenAuth;
use std::sync::Arc;

use crate::error::{AccountError, AccountResult};
use crate::models::{
    canonical_email, AuthResponse, Gender, LoginRequest, ProfileResponse, RegisterRequest,
    UpdateProfileRequest, User,
};
use crate::policy;
use crate::repository::AccountRepository;

/// Service layer for account business logic
#[derive(Clone)]
pub struct AccountService<R: AccountRepository> {
    repository: Arc<R>,
    tokens: TokenAuth,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repository: R, tokens: TokenAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            tokens,
        }
    }

    /// Register a new account and issue a token for it.
    ///
    /// The token lets the freshly created account authenticate without
    /// a second round trip through login.
    pub async fn register(&self, input: RegisterRequest) -> AccountResult<AuthResponse> {
        self.validate_register(&input)?;

        let gender: Gender = input
            .gender
            .parse()
            .map_err(AccountError::Validation)?;

        let email = canonical_email(&input.email);

        // Fast-path duplicate check; `create` below is the authority
        if self.repository.email_exists(&email).await? {
            return Err(AccountError::DuplicateEmail(email));
        }

        let password_hash = self.hash_password(&input.password).await?;

        let user = User::new(
            input.full_name,
            email,
            password_hash,
            input.address,
            gender,
            input.phone_number,
            input.birth_date,
        );

        let created = self.repository.create(user).await?;
        let token = self.issue_token(&created)?;

        Ok(AuthResponse {
            user: created.into(),
            token,
        })
    }

    /// Verify credentials and issue a token.
    ///
    /// An unknown email and a wrong password produce the identical
    /// outcome; the unknown-email path still runs a hash so the two
    /// cannot be told apart by response time either.
    pub async fn login(&self, input: LoginRequest) -> AccountResult<AuthResponse> {
        let user = match self.repository.get_by_email(&input.email).await? {
            Some(user) => user,
            None => {
                let _ = self.hash_password(&input.password).await;
                return Err(AccountError::InvalidCredentials);
            }
        };

        if !self.verify_password(&input.password, &user.password_hash).await {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.issue_token(&user)?;

        Ok(AuthResponse {
            user: user.into(),
            token,
        })
    }

    /// Resolve the presented token and return the owner's profile.
    ///
    /// Tokens are stateless, so the account may have vanished between
    /// issuance and use; that surfaces here as `NotFound`.
    pub async fn profile(&self, token: &str) -> AccountResult<ProfileResponse> {
        let identity = self.tokens.resolve(token)?;

        let user = self
            .repository
            .get_by_id(identity.id)
            .await?
            .ok_or(AccountError::NotFound(identity.id))?;

        Ok(user.into())
    }

    /// Resolve the presented token and apply profile updates.
    pub async fn update_profile(
        &self,
        token: &str,
        input: UpdateProfileRequest,
    ) -> AccountResult<ProfileResponse> {
        let identity = self.tokens.resolve(token)?;

        let mut user = self
            .repository
            .get_by_id(identity.id)
            .await?
            .ok_or(AccountError::NotFound(identity.id))?;

        // Validate before mutating anything, so a rejected update
        // leaves the stored record untouched
        let gender = match input.gender.as_deref() {
            Some(raw) => Some(raw.parse::<Gender>().map_err(AccountError::Validation)?),
            None => None,
        };

        user.apply_update(input, gender);

        let updated = self.repository.update(user).await?;
        Ok(updated.into())
    }

    // Token helper

    fn issue_token(&self, user: &User) -> AccountResult<String> {
        self.tokens
            .issue(user.id, &user.full_name, &user.email)
            .map_err(|e| {
                tracing::error!("Failed to issue token: {:?}", e);
                AccountError::Internal("Failed to issue token".to_string())
            })
    }

    // Password helpers
    //
    // Argon2 is deliberately slow; both operations run on the blocking
    // pool so request-handling worker threads are never stalled on a
    // hash.

    async fn hash_password(&self, password: &str) -> AccountResult<String> {
        let password = password.to_string();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);

            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| AccountError::PasswordHash(e.to_string()))
        })
        .await
        .map_err(|e| AccountError::Internal(format!("Hashing task failed: {}", e)))?
    }

    /// Constant-time password verification. A digest that does not
    /// parse counts as a mismatch, not an error.
    async fn verify_password(&self, password: &str, hash: &str) -> bool {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            PasswordHash::new(&hash)
                .map(|parsed| {
                    Argon2::default()
                        .verify_password(password.as_bytes(), &parsed)
                        .is_ok()
                })
                .unwrap_or(false)
        })
        .await
        .unwrap_or(false)
    }

    // Validation helpers

    // Email format and field lengths are checked by ValidatedJson<T> at
    // the handler level using the validator crate; the service re-checks
    // the requirements with security weight.

    fn validate_register(&self, input: &RegisterRequest) -> AccountResult<()> {
        if input.full_name.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.is_empty()
        {
            return Err(AccountError::Validation(
                "All fields are required".to_string(),
            ));
        }

        if let Some(rule) = policy::violation(&input.password) {
            return Err(AccountError::WeakPassword(rule));
        }

        Ok(())
    }
}
