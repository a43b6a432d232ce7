use actix_web::http::header;
use actix_web::{get, web, HttpResponse, Responder};
use futures::TryStreamExt;
use tracing::warn;

use crate::files::application::use_cases::download_file::DownloadFileError;
use crate::shared::api::ErrorResponse;
use crate::AppState;

/// Download a file
///
/// Streams the blob addressed by `key`; the original filename is
/// reconstructed from blob metadata into the `Content-Disposition` header.
#[utoipa::path(
    get,
    path = "/api/v1/files/{key}/download",
    tag = "files",
    params(
        ("key" = String, Path, description = "Opaque storage key"),
    ),
    responses(
        (status = 200, description = "Binary stream of the blob"),
        (status = 404, description = "No blob under this key", body = ErrorResponse),
        (status = 400, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/v1/files/{key}/download")]
pub async fn download_file_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = path.into_inner();

    match data.download_file_use_case.execute(&key).await {
        Ok(download) => {
            let mut builder = HttpResponse::Ok();
            builder.content_type(download.content_type);
            builder.insert_header((header::CONTENT_DISPOSITION, download.content_disposition));

            if let Some(length) = download.content_length {
                builder.no_chunking(length);
            }

            // A mid-stream store error aborts the response; there is no
            // buffered copy to fall back on.
            builder.streaming(
                download
                    .stream
                    .map_err(|e| std::io::Error::other(e.to_string())),
            )
        }

        Err(err @ DownloadFileError::NotFound) => {
            warn!(key = %key, "Download of unknown key");
            ErrorResponse::not_found(&err.to_string())
        }

        Err(err @ DownloadFileError::Storage) => {
            // Cause already logged where it was observed.
            ErrorResponse::bad_request(&err.to_string())
        }
    }
}
