use crate::{
    auth::{AuthError, AuthService},
    sezamo::handlers::{Credentials, ErrorResponse, MessageResponse},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = Credentials,
    responses (
        (status = 201, description = "Registration successful", body = MessageResponse, content_type = "application/json"),
        (status = 400, description = "Email or password missing", body = ErrorResponse),
        (status = 409, description = "An account with this email already exists", body = ErrorResponse),
    ),
    tag = "auth"
)]
// axum handler for signup
#[instrument]
pub async fn signup(
    service: Extension<AuthService>,
    payload: Option<Json<Credentials>>,
) -> impl IntoResponse {
    let credentials: Credentials = match payload {
        Some(Json(payload)) => payload,
        None => return AuthError::MissingField.into_response(),
    };

    debug!("signup request for: {}", credentials.email);

    match service.register(&credentials.email, credentials.password.expose_secret()) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "User registered successfully!".to_string(),
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}
