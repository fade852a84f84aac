pub mod signup;
pub use self::signup::signup;

pub mod login;
pub use self::login::login;

#[cfg(test)]
mod tests;

// common payload and response bodies for the handlers
use crate::auth::AuthError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// Request body shared by signup and login. Absent fields deserialize to
/// empty strings, so presence validation happens in one place.
#[derive(ToSchema, Deserialize, Debug)]
pub struct Credentials {
    #[serde(default)]
    pub(crate) email: String,
    #[serde(default)]
    #[schema(value_type = String, format = Password)]
    pub(crate) password: SecretString,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::MissingField => (
                StatusCode::BAD_REQUEST,
                "Email and password are required.",
            ),
            Self::DuplicateAccount => (StatusCode::CONFLICT, "Email already exists."),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password.",
            ),
            Self::Hasher(ref err) => {
                error!("password hashing failed: {err}");

                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
            }),
        )
            .into_response()
    }
}
