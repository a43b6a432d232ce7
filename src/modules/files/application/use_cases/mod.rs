pub mod download_file;
pub mod list_files;
pub mod upload_file;
