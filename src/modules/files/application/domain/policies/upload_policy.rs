/// Size and extension rules an upload must satisfy.
///
/// Built once at startup from the environment and injected everywhere it is
/// needed; no ambient lookups after construction.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    /// Lowercase, insertion order preserved. Error messages and the config
    /// endpoint enumerate extensions in this order.
    pub allowed_extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyConfigError {
    #[error("Invalid MAX_FILE_SIZE_MB configuration. Must be a positive number.")]
    InvalidMaxFileSize,

    #[error("ALLOWED_EXTENSIONS configuration is missing or empty. Upload configuration cannot be loaded.")]
    MissingAllowedExtensions,

    #[error("No valid file extensions found in ALLOWED_EXTENSIONS configuration.")]
    NoValidExtensions,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadValidationError {
    #[error("File size exceeds maximum allowed size of {max_file_size_mb}MB")]
    FileTooLarge { max_file_size_mb: u64 },

    #[error("File extension not allowed. Allowed extensions: {allowed}")]
    ExtensionNotAllowed { allowed: String },
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 10;

    /// Load policy from `MAX_FILE_SIZE_MB` and `ALLOWED_EXTENSIONS`.
    ///
    /// The size limit falls back to 10MB when unset; the extension list is
    /// mandatory. Any failure here is fatal at startup.
    pub fn from_env() -> Result<Self, PolicyConfigError> {
        Self::from_values(
            std::env::var("MAX_FILE_SIZE_MB").ok(),
            std::env::var("ALLOWED_EXTENSIONS").ok(),
        )
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn new(max_file_size_mb: u64, allowed_extensions: &[&str]) -> Self {
        Self {
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            allowed_extensions: allowed_extensions
                .iter()
                .map(|e| e.to_ascii_lowercase())
                .collect(),
        }
    }

    fn from_values(
        max_file_size_mb: Option<String>,
        allowed_extensions: Option<String>,
    ) -> Result<Self, PolicyConfigError> {
        let mb: u64 = max_file_size_mb
            .unwrap_or_else(|| Self::DEFAULT_MAX_FILE_SIZE_MB.to_string())
            .trim()
            .parse()
            .map_err(|_| PolicyConfigError::InvalidMaxFileSize)?;

        if mb == 0 {
            return Err(PolicyConfigError::InvalidMaxFileSize);
        }

        let raw = allowed_extensions
            .filter(|s| !s.trim().is_empty())
            .ok_or(PolicyConfigError::MissingAllowedExtensions)?;

        let extensions: Vec<String> = raw
            .split(',')
            .map(|ext| ext.trim().to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        if extensions.is_empty() {
            return Err(PolicyConfigError::NoValidExtensions);
        }

        Ok(Self {
            max_file_size_bytes: mb * 1024 * 1024,
            allowed_extensions: extensions,
        })
    }

    /// Size is checked before extension: when both are violated, the caller
    /// sees the size error.
    pub fn validate(&self, file_name: &str, size_bytes: u64) -> Result<(), UploadValidationError> {
        if size_bytes > self.max_file_size_bytes {
            return Err(UploadValidationError::FileTooLarge {
                max_file_size_mb: self.max_file_size_bytes / 1024 / 1024,
            });
        }

        let allowed = match extension_of(file_name) {
            Some(ext) => self.allowed_extensions.iter().any(|e| *e == ext),
            None => false,
        };

        if !allowed {
            return Err(UploadValidationError::ExtensionNotAllowed {
                allowed: self.allowed_extensions_display(),
            });
        }

        Ok(())
    }

    /// Allowed extensions uppercased, in insertion order (the wire format of
    /// the config endpoint and of validation messages).
    pub fn allowed_extensions_uppercase(&self) -> Vec<String> {
        self.allowed_extensions
            .iter()
            .map(|e| e.to_ascii_uppercase())
            .collect()
    }

    fn allowed_extensions_display(&self) -> String {
        self.allowed_extensions_uppercase().join(", ")
    }
}

/// Substring after the last `.`, lowercased. `None` when there is no dot or
/// nothing follows it.
fn extension_of(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}
