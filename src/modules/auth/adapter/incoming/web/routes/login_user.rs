use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ErrorResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Username
    #[schema(example = "admin")]
    pub username: String,

    /// Password
    #[schema(example = "admin123")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    message: String,

    /// Authenticated user information
    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserInfo {
    /// Username
    #[schema(example = "admin")]
    username: String,

    #[schema(example = true)]
    is_logged_in: bool,
}

/// User login
///
/// Validates a username/password pair against the fixed credential list.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing fields or invalid credentials", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(request) => request,
        Err(e) => {
            warn!("Login rejected: incomplete credentials");
            return ErrorResponse::bad_request(&e.to_string());
        }
    };

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(username = %response.user.username, "User logged in successfully");

            HttpResponse::Ok().json(LoginResponse {
                message: response.message,
                user: LoginUserInfo {
                    username: response.user.username,
                    is_logged_in: response.user.is_logged_in,
                },
            })
        }

        Err(err @ LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ErrorResponse::bad_request(&err.to_string())
        }
    }
}
