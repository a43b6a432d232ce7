use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::domain::entities::CredentialRegistry;

// ========================= Login Request =========================

/// Validated login request: both fields guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Username and password are required")]
    MissingCredentials,
}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        if username.is_empty() || password.is_empty() {
            return Err(LoginRequestError::MissingCredentials);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

// ============================ Login Response =================================

#[derive(Debug, Clone, Serialize)]
pub struct LoggedInUser {
    pub username: String,
    pub is_logged_in: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub message: String,
    pub user: LoggedInUser,
}

// ============================ Login User Use Case =============================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Debug, Clone)]
pub struct LoginUserUseCase {
    credentials: Arc<CredentialRegistry>,
}

impl LoginUserUseCase {
    pub fn new(credentials: Arc<CredentialRegistry>) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl ILoginUserUseCase for LoginUserUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .credentials
            .validate(request.username(), request.password())
            .ok_or(LoginError::InvalidCredentials)?;

        Ok(LoginUserResponse {
            message: "Login successful".to_string(),
            user: LoggedInUser {
                username: user.username,
                is_logged_in: true,
            },
        })
    }
}
