use crate::{
    auth::{AuthError, AuthService},
    sezamo::handlers::{Credentials, ErrorResponse},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserIdentity,
}

/// The authenticated identity. No token or session artifact exists; the
/// email is all a successful login carries.
#[derive(ToSchema, Serialize, Debug)]
pub struct UserIdentity {
    pub email: String,
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = Credentials,
    responses (
        (status = 200, description = "Login successful", body = LoginResponse, content_type = "application/json"),
        (status = 400, description = "Email or password missing", body = ErrorResponse),
        (status = 401, description = "Unknown email or wrong password", body = ErrorResponse),
    ),
    tag = "auth"
)]
// axum handler for login
#[instrument]
pub async fn login(
    service: Extension<AuthService>,
    payload: Option<Json<Credentials>>,
) -> impl IntoResponse {
    let credentials: Credentials = match payload {
        Some(Json(payload)) => payload,
        None => return AuthError::MissingField.into_response(),
    };

    debug!("login request for: {}", credentials.email);

    match service.authenticate(&credentials.email, credentials.password.expose_secret()) {
        Ok(email) => (
            StatusCode::OK,
            Json(LoginResponse {
                message: "Login successful!".to_string(),
                user: UserIdentity { email },
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}
