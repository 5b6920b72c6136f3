//! Authentication module.
//!
//! This module provides:
//! - Stateless JWT token creation and verification (HS256)
//! - Token configuration loaded from the environment
//!
//! Tokens are self-contained: once issued there is no server-side
//! session to consult and no revocation list. A token stays valid
//! until its expiry, which is why the lifetime is kept short.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{TokenAuth, TokenConfig};
//! use core_config::FromEnv;
//!
//! let config = TokenConfig::from_env()?;
//! let auth = TokenAuth::new(&config);
//!
//! let token = auth.issue(user.id, &user.full_name, &user.email)?;
//! let identity = auth.resolve(&token)?;
//! ```

pub mod config;
pub mod jwt;

// Re-export commonly used types
pub use config::TokenConfig;
pub use jwt::{AuthError, Identity, TokenAuth, TokenClaims, TOKEN_TTL};
