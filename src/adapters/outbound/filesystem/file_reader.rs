use crate::ports::outbound::ScanReader;
use crate::shared::error::DiffError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading scan reports from the file system
///
/// Files are checked before reading: symbolic links and non-regular files
/// are rejected and the size is capped at [`MAX_FILE_SIZE`].
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let file_size = validate_regular_file(path, "Scan report")?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            DiffError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanReader for FileSystemReader {
    fn read_scan(&self, path: &Path) -> Result<Value> {
        let content = self.safe_read_file(path)?;

        serde_json::from_str(&content).map_err(|e| {
            DiffError::ScanParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
