//! Accounts Domain
//!
//! This module provides a complete domain implementation for account
//! registration, authentication and profile management.
//!
//! # Features
//!
//! - Registration with password-strength enforcement
//! - Password hashing with Argon2
//! - Login issuing signed bearer tokens
//! - Token-gated profile read and update
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, password hashing, token issuance
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{TokenAuth, TokenConfig};
//! use domain_accounts::{
//!     auth_handlers::{account_router, AuthState},
//!     repository::InMemoryAccountRepository,
//!     service::AccountService,
//! };
//!
//! let tokens = TokenAuth::new(&TokenConfig::new(
//!     "a-development-secret-of-32-characters!!",
//!     "market-api",
//!     "market-clients",
//! ));
//! let repository = InMemoryAccountRepository::new();
//! let service = AccountService::new(repository, tokens);
//!
//! let router = account_router(AuthState { service });
//! ```

pub mod auth_handlers;
pub mod error;
pub mod models;
pub mod policy;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use auth_handlers::{account_router, AuthState};
pub use error::{AccountError, AccountResult};
pub use models::{
    AuthResponse, Gender, LoginRequest, ProfileResponse, RegisterRequest, UpdateProfileRequest,
    User,
};
pub use repository::{AccountRepository, InMemoryAccountRepository};
pub use service::AccountService;
