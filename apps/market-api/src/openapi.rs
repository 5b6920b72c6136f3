//! OpenAPI document for the Market API

use axum::Json;
use domain_accounts::models;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Market API",
        description = "Account registration, authentication and profile management"
    ),
    components(schemas(
        models::Gender,
        models::RegisterRequest,
        models::LoginRequest,
        models::UpdateProfileRequest,
        models::ProfileResponse,
        models::AuthResponse,
        axum_helpers::ErrorResponse,
    )),
    tags((name = "account", description = "Account endpoints"))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as plain JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
