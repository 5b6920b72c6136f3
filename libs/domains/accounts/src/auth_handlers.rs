use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{AppendHeaders, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_helpers::ValidatedJson;

use crate::error::AccountError;
use crate::models::{LoginRequest, ProfileResponse, RegisterRequest, UpdateProfileRequest};
use crate::repository::AccountRepository;
use crate::service::AccountService;

/// Not in `http`'s predefined header set
const CLEAR_SITE_DATA: HeaderName = HeaderName::from_static("clear-site-data");

/// Application state for account handlers
#[derive(Clone)]
pub struct AuthState<R: AccountRepository + Clone> {
    pub service: AccountService<R>,
}

/// Register a new account
async fn register<R: AccountRepository + Clone>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> Result<Response, AccountError> {
    let response = state.service.register(input).await?;
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Login with email/password
async fn login<R: AccountRepository + Clone>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> Result<Response, AccountError> {
    let response = state.service.login(input).await?;
    Ok(Json(response).into_response())
}

/// Logout.
///
/// Tokens are stateless, so there is no server-side session to
/// destroy; the response tells well-behaved clients to drop their
/// local copy via `Clear-Site-Data`.
async fn logout() -> Response {
    (
        AppendHeaders([(
            CLEAR_SITE_DATA,
            HeaderValue::from_static("\"cookies\", \"storage\""),
        )]),
        StatusCode::NO_CONTENT,
    )
        .into_response()
}

/// Get the profile of the token's owner
async fn get_profile<R: AccountRepository + Clone>(
    State(state): State<AuthState<R>>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, AccountError> {
    let token = extract_token(&headers).ok_or(AccountError::MissingToken)?;
    let profile = state.service.profile(&token).await?;
    Ok(Json(profile))
}

/// Update the profile of the token's owner
async fn update_profile<R: AccountRepository + Clone>(
    State(state): State<AuthState<R>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AccountError> {
    let token = extract_token(&headers).ok_or(AccountError::MissingToken)?;
    let profile = state.service.update_profile(&token, input).await?;
    Ok(Json(profile))
}

/// Helper: Extract bearer token from the Authorization header
fn extract_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.to_string()))
}

/// Create account router
pub fn account_router<R>(state: AuthState<R>) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(register::<R>))
        .route("/login", post(login::<R>))
        .route("/logout", post(logout))
        .route("/profile", get(get_profile::<R>).put(update_profile::<R>))
        .with_state(state)
}
