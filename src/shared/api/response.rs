// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Error payload returned by every failing endpoint.
///
/// Success bodies are endpoint-specific and serialized directly; only the
/// error shape is shared. Clients read the `message` field.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "File extension not allowed. Allowed extensions: PDF, JPG")]
    pub message: String,
}

impl ErrorResponse {
    pub fn with_status(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorResponse {
            message: message.to_string(),
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::with_status(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::with_status(StatusCode::NOT_FOUND, message)
    }
}
