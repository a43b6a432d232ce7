pub mod modules;
pub use modules::auth;
pub use modules::files;
pub mod api;
pub mod client;
pub mod health;
pub mod shared;

use crate::auth::application::domain::entities::CredentialRegistry;
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginUserUseCase};
use crate::files::adapter::outgoing::GcsObjectStore;
use crate::files::application::domain::policies::upload_policy::UploadPolicy;
use crate::files::application::ports::outgoing::ObjectStore;
use crate::files::application::use_cases::download_file::{
    DownloadFileUseCase, IDownloadFileUseCase,
};
use crate::files::application::use_cases::list_files::{IListFilesUseCase, ListFilesUseCase};
use crate::files::application::use_cases::upload_file::{IUploadFileUseCase, UploadFileUseCase};

use actix_web::{web, App, HttpServer};
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub upload_policy: Arc<UploadPolicy>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub upload_file_use_case: Arc<dyn IUploadFileUseCase + Send + Sync>,
    pub download_file_use_case: Arc<dyn IDownloadFileUseCase + Send + Sync>,
    pub list_files_use_case: Arc<dyn IListFilesUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("APP_PORT").unwrap_or_else(|_| "3000".to_string());
    let bucket = env::var("GCS_BUCKET_NAME").expect("GCS_BUCKET_NAME is not set in .env file");

    // The policy is load-bearing: refuse to serve traffic without a valid one.
    let upload_policy = match UploadPolicy::from_env() {
        Ok(policy) => Arc::new(policy),
        Err(e) => {
            tracing::error!(error = %e, "Upload policy configuration is invalid");
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!(
        max_file_size_bytes = upload_policy.max_file_size_bytes,
        allowed_extensions = ?upload_policy.allowed_extensions,
        bucket = %bucket,
        "Upload policy loaded"
    );

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Storage adapter, credential list and use cases
    let store: Arc<dyn ObjectStore> = Arc::new(GcsObjectStore::new(bucket));
    let credentials = Arc::new(CredentialRegistry::demo());

    let state = AppState {
        upload_policy: Arc::clone(&upload_policy),
        login_user_use_case: Arc::new(LoginUserUseCase::new(credentials)),
        upload_file_use_case: Arc::new(UploadFileUseCase::new(
            Arc::clone(&upload_policy),
            Arc::clone(&store),
        )),
        download_file_use_case: Arc::new(DownloadFileUseCase::new(Arc::clone(&store))),
        list_files_use_case: Arc::new(ListFilesUseCase::new(store)),
    };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    // Health
    cfg.service(crate::health::health);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Files
    cfg.service(crate::files::adapter::incoming::web::routes::upload_config_handler);
    cfg.service(crate::files::adapter::incoming::web::routes::list_files_handler);
    cfg.service(crate::files::adapter::incoming::web::routes::upload_file_handler);
    cfg.service(crate::files::adapter::incoming::web::routes::download_file_handler);
    // API docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url(
            "/api-docs/openapi.json",
            crate::api::openapi::ApiDoc::openapi(),
        ),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
