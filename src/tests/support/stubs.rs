//! Benign default implementations of the use-case traits. Route tests swap
//! in scenario-specific mocks for the handler under test.

use async_trait::async_trait;

use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoggedInUser, LoginError, LoginRequest, LoginUserResponse,
};
use crate::files::application::domain::entities::FileDescriptor;
use crate::files::application::use_cases::download_file::{
    DownloadFileError, FileDownload, IDownloadFileUseCase,
};
use crate::files::application::use_cases::list_files::{IListFilesUseCase, ListFilesError};
use crate::files::application::use_cases::upload_file::{
    IUploadFileUseCase, UploadFileCommand, UploadFileError, UploadedFile,
};

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Ok(LoginUserResponse {
            message: "Login successful".to_string(),
            user: LoggedInUser {
                username: request.username().to_string(),
                is_logged_in: true,
            },
        })
    }
}

pub struct StubUploadFileUseCase;

#[async_trait]
impl IUploadFileUseCase for StubUploadFileUseCase {
    async fn execute(&self, command: UploadFileCommand) -> Result<UploadedFile, UploadFileError> {
        Ok(UploadedFile {
            key: format!("stub-key_{}", command.file_name),
            original_name: command.file_name,
            size_bytes: command.size_bytes,
            bucket: "stub-bucket".to_string(),
        })
    }
}

pub struct StubDownloadFileUseCase;

#[async_trait]
impl IDownloadFileUseCase for StubDownloadFileUseCase {
    async fn execute(&self, _key: &str) -> Result<FileDownload, DownloadFileError> {
        Err(DownloadFileError::NotFound)
    }
}

pub struct StubListFilesUseCase;

#[async_trait]
impl IListFilesUseCase for StubListFilesUseCase {
    async fn execute(&self) -> Result<Vec<FileDescriptor>, ListFilesError> {
        Ok(Vec::new())
    }
}
