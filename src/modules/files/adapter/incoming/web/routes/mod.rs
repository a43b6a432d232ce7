mod download_file;
mod list_files;
mod upload_config;
mod upload_file;

pub use download_file::*;
pub use list_files::*;
pub use upload_config::*;
pub use upload_file::*;
