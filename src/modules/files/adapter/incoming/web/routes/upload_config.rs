use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

/// Policy snapshot served to clients for their fail-fast mirror check.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfigResponse {
    /// Maximum upload size in bytes
    #[schema(example = 10485760)]
    max_file_size: u64,

    /// Allowed extensions, uppercased
    #[schema(example = json!(["PDF", "JPG"]))]
    allowed_extensions: Vec<String>,
}

/// Fetch the upload policy
///
/// Clients run the same size/extension rules against this snapshot before
/// transferring anything; the server-side check stays authoritative.
#[utoipa::path(
    get,
    path = "/api/v1/files/config",
    tag = "files",
    responses(
        (status = 200, description = "Current upload policy", body = UploadConfigResponse),
    )
)]
#[get("/api/v1/files/config")]
pub async fn upload_config_handler(data: web::Data<AppState>) -> impl Responder {
    let policy = &data.upload_policy;

    HttpResponse::Ok().json(UploadConfigResponse {
        max_file_size: policy.max_file_size_bytes,
        allowed_extensions: policy.allowed_extensions_uppercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::application::domain::policies::upload_policy::UploadPolicy;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_config_reports_bytes_and_uppercased_extensions() {
        let app_state = TestAppStateBuilder::default()
            .with_upload_policy(UploadPolicy::new(10, &["pdf", "jpg"]))
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(upload_config_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/files/config")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["maxFileSize"], 10 * 1024 * 1024);
        assert_eq!(
            body["allowedExtensions"],
            serde_json::json!(["PDF", "JPG"])
        );
    }

    #[actix_web::test]
    async fn test_config_preserves_configured_order() {
        let app_state = TestAppStateBuilder::default()
            .with_upload_policy(UploadPolicy::new(5, &["zip", "pdf", "png"]))
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(upload_config_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/files/config")
            .to_request();

        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["allowedExtensions"],
            serde_json::json!(["ZIP", "PDF", "PNG"])
        );
    }
}
