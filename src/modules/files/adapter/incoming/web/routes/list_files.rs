use crate::files::application::domain::entities::FileDescriptor;
use crate::shared::api::ErrorResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

/// One stored file as reported by the listing endpoint.
///
/// Field names are the wire contract consumed by the frontend, including the
/// lowercase `originalname`.
#[derive(Serialize, ToSchema)]
pub struct FileItem {
    /// Opaque storage key
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000_report.pdf")]
    key: String,

    /// User-supplied filename at upload time
    #[schema(example = "report.pdf")]
    originalname: String,

    /// Size in bytes (0 when the store reports none)
    #[schema(example = 1048576)]
    size: u64,
}

impl From<FileDescriptor> for FileItem {
    fn from(descriptor: FileDescriptor) -> Self {
        Self {
            key: descriptor.key,
            originalname: descriptor.original_name,
            size: descriptor.size_bytes,
        }
    }
}

/// List stored files
///
/// Enumerates every blob in the bucket. Ordering is whatever the store
/// yields; callers must not depend on it.
#[utoipa::path(
    get,
    path = "/api/v1/files",
    tag = "files",
    responses(
        (status = 200, description = "Listing of stored files", body = [FileItem]),
        (status = 400, description = "Store enumeration failed", body = ErrorResponse),
    )
)]
#[get("/api/v1/files")]
pub async fn list_files_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_files_use_case.execute().await {
        Ok(files) => {
            let items: Vec<FileItem> = files.into_iter().map(FileItem::from).collect();
            HttpResponse::Ok().json(items)
        }
        Err(err) => {
            warn!("Listing files failed");
            ErrorResponse::bad_request(&err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::application::use_cases::list_files::{IListFilesUseCase, ListFilesError};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockListFilesSuccess;

    #[async_trait]
    impl IListFilesUseCase for MockListFilesSuccess {
        async fn execute(&self) -> Result<Vec<FileDescriptor>, ListFilesError> {
            Ok(vec![
                FileDescriptor {
                    key: "id1_report.pdf".to_string(),
                    original_name: "report.pdf".to_string(),
                    size_bytes: 1234,
                },
                FileDescriptor {
                    key: "stray".to_string(),
                    original_name: "stray".to_string(),
                    size_bytes: 0,
                },
            ])
        }
    }

    struct MockListFilesStorageError;

    #[async_trait]
    impl IListFilesUseCase for MockListFilesStorageError {
        async fn execute(&self) -> Result<Vec<FileDescriptor>, ListFilesError> {
            Err(ListFilesError::Storage)
        }
    }

    #[actix_web::test]
    async fn test_list_files_returns_bare_array() {
        let app_state = TestAppStateBuilder::default()
            .with_list_files(MockListFilesSuccess)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(list_files_handler)).await;

        let req = test::TestRequest::get().uri("/api/v1/files").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body.is_array());
        assert_eq!(body[0]["key"], "id1_report.pdf");
        assert_eq!(body[0]["originalname"], "report.pdf");
        assert_eq!(body[0]["size"], 1234);
        assert_eq!(body[1]["size"], 0);
    }

    #[actix_web::test]
    async fn test_list_files_storage_failure_maps_to_400() {
        let app_state = TestAppStateBuilder::default()
            .with_list_files(MockListFilesStorageError)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(list_files_handler)).await;

        let req = test::TestRequest::get().uri("/api/v1/files").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Failed to list files");
    }
}
