use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AccountError, AccountResult};
use crate::models::{canonical_email, User};

/// Repository trait for account persistence.
///
/// `create` is the authoritative uniqueness guarantee: implementations
/// must reject a second record for the same canonical email even under
/// concurrent calls. Any duplicate pre-check done by callers is a
/// fast-path only.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Create a new account, rejecting duplicate emails
    async fn create(&self, user: User) -> AccountResult<User>;

    /// Get an account by ID
    async fn get_by_id(&self, id: Uuid) -> AccountResult<Option<User>>;

    /// Get an account by email (canonicalized before lookup)
    async fn get_by_email(&self, email: &str) -> AccountResult<Option<User>>;

    /// Update an existing account
    async fn update(&self, user: User) -> AccountResult<User>;

    /// Check if an email is already taken
    async fn email_exists(&self, email: &str) -> AccountResult<bool>;
}

/// In-memory implementation of AccountRepository (for development/testing).
///
/// Uniqueness is decided while holding the write lock, so two
/// concurrent registrations for the same email cannot both succeed.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, user: User) -> AccountResult<User> {
        let mut users = self.users.write().await;

        // Stored emails are already canonical, so equality suffices
        let email_exists = users.values().any(|u| u.email == user.email);

        if email_exists {
            return Err(AccountError::DuplicateEmail(user.email));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created account");
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> AccountResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> AccountResult<Option<User>> {
        let email = canonical_email(email);
        let users = self.users.read().await;
        let user = users.values().find(|u| u.email == email).cloned();
        Ok(user)
    }

    async fn update(&self, user: User) -> AccountResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(AccountError::NotFound(user.id));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Updated account");
        Ok(user)
    }

    async fn email_exists(&self, email: &str) -> AccountResult<bool> {
        let email = canonical_email(email);
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }
}
