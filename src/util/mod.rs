//! Utility modules

pub mod file_validation;

// Re-export file validation utilities
pub use file_validation::{
    create_new_file, is_likely_binary, read_text_file,
    validate_file_for_opening, FileOpenError, MAX_FILE_SIZE,
};
