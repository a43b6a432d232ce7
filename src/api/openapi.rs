use crate::shared::api::ErrorResponse;
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, LoginResponse, LoginUserInfo};

// Files
use crate::files::adapter::incoming::web::routes::{
    FileItem, FileUploadResponse, UploadConfigResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filedrop API",
        version = "1.0.0",
        description = "API documentation for the file upload/download service",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // File endpoints
        crate::files::adapter::incoming::web::routes::list_files_handler,
        crate::files::adapter::incoming::web::routes::upload_file_handler,
        crate::files::adapter::incoming::web::routes::download_file_handler,
        crate::files::adapter::incoming::web::routes::upload_config_handler,
    ),
    components(schemas(
        LoginRequestDto,
        LoginResponse,
        LoginUserInfo,
        FileItem,
        FileUploadResponse,
        UploadConfigResponse,
        ErrorResponse,
    )),
    tags(
        (name = "auth", description = "Authentication"),
        (name = "files", description = "File upload, download and listing"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/v1/auth/login",
            "/api/v1/files",
            "/api/v1/files/{key}/download",
            "/api/v1/files/config",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path: {path}"
            );
        }
    }
}
