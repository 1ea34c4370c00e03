use crate::shared::error::DiffError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum scan report size accepted for reading (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects symbolic links at `path`.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist yet is accepted; callers that need the file to
/// exist use [`validate_regular_file`].
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(DiffError::SecurityError {
                path: path.to_path_buf(),
                reason: format!("Failed to read metadata for {} operation: {}", operation, e),
                hint: "Check the file permissions".to_string(),
            }
            .into())
        }
    };

    if metadata.is_symlink() {
        return Err(DiffError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Pass the real file path instead of a symbolic link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path exists and is a regular file, returning its size.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| DiffError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(DiffError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Pass the real file path instead of a symbolic link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(DiffError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(DiffError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the scan or check that the right file was passed".to_string(),
        }
        .into());
    }
    Ok(())
}
