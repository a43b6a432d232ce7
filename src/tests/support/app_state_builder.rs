use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::files::application::domain::policies::upload_policy::UploadPolicy;
use crate::files::application::use_cases::download_file::IDownloadFileUseCase;
use crate::files::application::use_cases::list_files::IListFilesUseCase;
use crate::files::application::use_cases::upload_file::IUploadFileUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    upload_policy: Arc<UploadPolicy>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    upload_file: Arc<dyn IUploadFileUseCase + Send + Sync>,
    download_file: Arc<dyn IDownloadFileUseCase + Send + Sync>,
    list_files: Arc<dyn IListFilesUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            upload_policy: Arc::new(UploadPolicy::new(10, &["pdf", "jpg"])),
            login_user: Arc::new(StubLoginUserUseCase),
            upload_file: Arc::new(StubUploadFileUseCase),
            download_file: Arc::new(StubDownloadFileUseCase),
            list_files: Arc::new(StubListFilesUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = Arc::new(policy);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_upload_file(mut self, uc: impl IUploadFileUseCase + Send + Sync + 'static) -> Self {
        self.upload_file = Arc::new(uc);
        self
    }

    pub fn with_download_file(
        mut self,
        uc: impl IDownloadFileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.download_file = Arc::new(uc);
        self
    }

    pub fn with_list_files(mut self, uc: impl IListFilesUseCase + Send + Sync + 'static) -> Self {
        self.list_files = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            upload_policy: self.upload_policy,
            login_user_use_case: self.login_user,
            upload_file_use_case: self.upload_file,
            download_file_use_case: self.download_file,
            list_files_use_case: self.list_files,
        })
    }
}
