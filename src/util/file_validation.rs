//! File validation utilities for opening and creating files
//!
//! Validates files before attempting to open them, checking for:
//! - File existence and permissions
//! - File size limits
//! - Binary file detection

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read};
use std::path::Path;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Errors that can occur when opening or creating a file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOpenError {
    /// File does not exist
    NotFound,
    /// File exists but a new one was requested
    AlreadyExists,
    /// Permission denied to read or create the file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// File appears to be binary (contains null bytes or invalid UTF-8)
    BinaryFile,
    /// File exceeds size limit
    TooLarge { size_mb: f64 },
    /// Other I/O error
    IoError(String),
}

impl FileOpenError {
    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File '{}' not found.", filename),
            Self::AlreadyExists => format!("File '{}' already exists.", filename),
            Self::PermissionDenied => format!("Permission denied: '{}'", filename),
            Self::IsDirectory => format!("Cannot open directory: '{}'", filename),
            Self::BinaryFile => format!("Cannot open binary file: '{}'", filename),
            Self::TooLarge { size_mb } => {
                format!(
                    "'{}' is too large ({:.1} MB, max {} MB)",
                    filename,
                    size_mb,
                    MAX_FILE_SIZE / (1024 * 1024)
                )
            }
            Self::IoError(msg) => format!("Error opening '{}': {}", filename, msg),
        }
    }
}

impl From<io::Error> for FileOpenError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => FileOpenError::NotFound,
            io::ErrorKind::AlreadyExists => FileOpenError::AlreadyExists,
            io::ErrorKind::PermissionDenied => FileOpenError::PermissionDenied,
            io::ErrorKind::InvalidData => FileOpenError::BinaryFile,
            _ => FileOpenError::IoError(e.to_string()),
        }
    }
}

impl std::fmt::Display for FileOpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::AlreadyExists => write!(f, "file already exists"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::BinaryFile => write!(f, "binary file"),
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::IoError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileOpenError {}

/// Validate a file before attempting to open it
///
/// Checks:
/// - File exists
/// - Is not a directory
/// - Has read permissions
/// - Does not exceed size limit
///
/// Does NOT check for binary content (use `is_likely_binary` separately after this passes)
pub fn validate_file_for_opening(path: &Path) -> Result<(), FileOpenError> {
    let metadata = fs::metadata(path)?;

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileOpenError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Check if a file is likely binary by scanning for null bytes
///
/// Reads the first 8KB of the file and checks for null bytes,
/// which are common in binary files but rare in text files.
///
/// Returns `false` on any read error (let the actual open fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Validate and read a text file verbatim
pub fn read_text_file(path: &Path) -> Result<String, FileOpenError> {
    validate_file_for_opening(path)?;
    if is_likely_binary(path) {
        return Err(FileOpenError::BinaryFile);
    }
    Ok(fs::read_to_string(path)?)
}

/// Create an empty file, refusing to touch an existing one
pub fn create_new_file(path: &Path) -> Result<(), FileOpenError> {
    if path.exists() {
        return Err(FileOpenError::AlreadyExists);
    }
    OpenOptions::new().write(true).create_new(true).open(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_validate_nonexistent_file() {
        let result = validate_file_for_opening(Path::new("/nonexistent/path/file.txt"));
        assert!(matches!(result, Err(FileOpenError::NotFound)));
    }

    #[test]
    fn test_validate_directory() {
        let dir = tempdir().unwrap();
        let result = validate_file_for_opening(dir.path());
        assert!(matches!(result, Err(FileOpenError::IsDirectory)));
    }

    #[test]
    fn test_validate_valid_file() {
        let temp = NamedTempFile::new().unwrap();
        assert!(validate_file_for_opening(temp.path()).is_ok());
    }

    #[test]
    fn test_is_binary_text_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "Hello, world!").unwrap();
        temp.flush().unwrap();

        assert!(!is_likely_binary(temp.path()));
    }

    #[test]
    fn test_is_binary_with_null_bytes() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"Hello\x00World").unwrap();
        temp.flush().unwrap();

        assert!(is_likely_binary(temp.path()));
        assert_eq!(
            read_text_file(temp.path()),
            Err(FileOpenError::BinaryFile)
        );
    }

    #[test]
    fn test_read_text_file_is_verbatim() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"  leading\ntrailing  \n").unwrap();
        temp.flush().unwrap();

        assert_eq!(
            read_text_file(temp.path()).unwrap(),
            "  leading\ntrailing  \n"
        );
    }

    #[test]
    fn test_create_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.txt");

        assert!(create_new_file(&path).is_ok());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert_eq!(create_new_file(&path), Err(FileOpenError::AlreadyExists));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FileOpenError::NotFound.user_message("test.txt"),
            "File 'test.txt' not found."
        );
        assert_eq!(
            FileOpenError::AlreadyExists.user_message("test.txt"),
            "File 'test.txt' already exists."
        );
        assert_eq!(
            FileOpenError::BinaryFile.user_message("image.png"),
            "Cannot open binary file: 'image.png'"
        );
    }
}
