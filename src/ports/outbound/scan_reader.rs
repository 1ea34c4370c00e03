use crate::shared::Result;
use serde_json::Value;
use std::path::Path;

/// ScanReader port for loading a scan report as a JSON document
///
/// This port abstracts the file system operations needed to read a
/// scanner's JSON output. Format detection happens later in the domain
/// layer; the reader only guarantees well-formed JSON.
pub trait ScanReader {
    /// Reads and parses the scan report at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file is a symbolic link or exceeds the size limit
    /// - The content is not valid JSON
    fn read_scan(&self, path: &Path) -> Result<Value>;
}
