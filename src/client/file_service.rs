use serde::Deserialize;

/// Policy snapshot fetched from `GET /api/v1/files/config`.
///
/// `allowed_extensions` arrive uppercased; comparisons here uppercase the
/// candidate, mirroring the server's case-insensitive rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfigSnapshot {
    pub max_file_size: u64,
    pub allowed_extensions: Vec<String>,
}

/// A stored file as returned by the listing and upload endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFile {
    pub key: String,
    pub originalname: String,
    pub size: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum FileClientError {
    /// The local mirror check rejected the file before any transfer.
    #[error("{0}")]
    Rejected(String),

    /// The server answered with a failure status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Same size/extension rules as the server policy, run against a fetched
/// snapshot to fail fast before uploading. The server check stays
/// authoritative; this one is purely a courtesy to the user.
pub fn validate_file(
    file_name: &str,
    size_bytes: u64,
    config: &UploadConfigSnapshot,
) -> Result<(), FileClientError> {
    if size_bytes > config.max_file_size {
        let max_file_size_mb = config.max_file_size / 1024 / 1024;
        return Err(FileClientError::Rejected(format!(
            "File size exceeds maximum allowed size of {max_file_size_mb}MB"
        )));
    }

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_uppercase())
        .filter(|ext| !ext.is_empty());

    let allowed = match extension {
        Some(ext) => config.allowed_extensions.iter().any(|e| *e == ext),
        None => false,
    };

    if !allowed {
        return Err(FileClientError::Rejected(format!(
            "File extension not allowed. Allowed extensions: {}",
            config.allowed_extensions.join(", ")
        )));
    }

    Ok(())
}

/// Thin HTTP client for the file endpoints.
pub struct FileClient {
    base_url: String,
    http: reqwest::Client,
}

impl FileClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }

    pub async fn fetch_upload_config(&self) -> Result<UploadConfigSnapshot, FileClientError> {
        let response = self.http.get(self.url("/files/config")).send().await?;

        if !response.status().is_success() {
            return Err(FileClientError::Api {
                status: response.status().as_u16(),
                message: "Failed to fetch upload configuration".to_string(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn list_files(&self) -> Result<Vec<RemoteFile>, FileClientError> {
        let response = self.http.get(self.url("/files")).send().await?;

        if !response.status().is_success() {
            return Err(FileClientError::Api {
                status: response.status().as_u16(),
                message: "Failed to fetch files".to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Mirror-validate against a fresh policy snapshot, then upload as a
    /// `multipart/form-data` body with a single `file` field.
    pub async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<RemoteFile, FileClientError> {
        let config = self.fetch_upload_config().await?;
        validate_file(file_name, bytes.len() as u64, &config)?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.url("/files"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body["message"].as_str().map(String::from))
                .unwrap_or_else(|| format!("Upload failed: {}", status.as_u16()));

            return Err(FileClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Keys are generated server-side from `[A-Za-z0-9_.-]` only, so they can
    /// be embedded in a path without further encoding.
    pub fn download_url(&self, key: &str) -> String {
        self.url(&format!("/files/{key}/download"))
    }
}
