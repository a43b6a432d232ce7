use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use futures::TryStreamExt;
use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::files::application::use_cases::upload_file::{UploadFileCommand, UploadFileError};
use crate::shared::api::ErrorResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, ToSchema)]
pub struct FileUploadResponse {
    /// Opaque storage key assigned to the blob
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000_report.pdf")]
    key: String,

    /// User-supplied filename, preserved in blob metadata
    #[schema(example = "report.pdf")]
    originalname: String,

    /// Size in bytes
    #[schema(example = 1048576)]
    size: u64,

    /// Bucket the blob was written to
    #[schema(example = "filedrop-uploads")]
    bucket: String,

    #[schema(example = "File uploaded successfully")]
    message: String,
}

//
// ──────────────────────────────────────────────────────────
// Multipart extraction
// ──────────────────────────────────────────────────────────
//

struct ReceivedFile {
    name: String,
    bytes: Vec<u8>,
}

/// Pull the `file` field out of the multipart body. `Ok(None)` means the
/// field (or its filename) was absent; other fields are skipped.
async fn read_file_field(mut payload: Multipart) -> Result<Option<ReceivedFile>, String> {
    while let Some(mut field) = payload.try_next().await.map_err(|e| e.to_string())? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(String::from);

        let Some(name) = file_name else {
            return Ok(None);
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(|e| e.to_string())? {
            bytes.extend_from_slice(&chunk);
        }

        return Ok(Some(ReceivedFile { name, bytes }));
    }

    Ok(None)
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Upload a file
///
/// Accepts a multipart form with a single `file` field, validates it against
/// the upload policy and stores it under a freshly generated key.
#[utoipa::path(
    post,
    path = "/api/v1/files",
    tag = "files",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File stored", body = FileUploadResponse),
        (status = 400, description = "Missing file, policy violation or store failure", body = ErrorResponse),
    )
)]
#[post("/api/v1/files")]
pub async fn upload_file_handler(payload: Multipart, data: web::Data<AppState>) -> impl Responder {
    let file = match read_file_field(payload).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            warn!("Upload rejected: no file field in multipart body");
            return ErrorResponse::bad_request("No file provided");
        }
        Err(e) => {
            warn!(error = %e, "Upload rejected: malformed multipart body");
            return ErrorResponse::bad_request(&e);
        }
    };

    let command = UploadFileCommand {
        size_bytes: file.bytes.len() as u64,
        file_name: file.name,
        bytes: file.bytes,
    };

    match data.upload_file_use_case.execute(command).await {
        Ok(uploaded) => {
            info!(
                key = %uploaded.key,
                size = uploaded.size_bytes,
                "File uploaded"
            );

            HttpResponse::Created().json(FileUploadResponse {
                key: uploaded.key,
                originalname: uploaded.original_name,
                size: uploaded.size_bytes,
                bucket: uploaded.bucket,
                message: "File uploaded successfully".to_string(),
            })
        }

        Err(err @ (UploadFileError::NoFile | UploadFileError::Validation(_))) => {
            warn!(error = %err, "Upload rejected by policy");
            ErrorResponse::bad_request(&err.to_string())
        }

        Err(err @ UploadFileError::Storage) => {
            // Cause already logged where it was observed.
            ErrorResponse::bad_request(&err.to_string())
        }
    }
}
