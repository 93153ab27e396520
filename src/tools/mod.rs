mod extension;
mod file_scanner;
mod path_validator;

pub use extension::{UNKNOWN_BUCKET, extension_bucket};
pub use file_scanner::scan_all_files;
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
