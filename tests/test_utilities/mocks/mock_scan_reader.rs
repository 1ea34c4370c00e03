use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use cves_diff::prelude::*;

/// Mock ScanReader serving in-memory documents keyed by path
#[derive(Default)]
pub struct MockScanReader {
    pub documents: HashMap<PathBuf, Value>,
    pub should_fail: bool,
}

impl MockScanReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scan(mut self, path: &str, document: Value) -> Self {
        self.documents.insert(PathBuf::from(path), document);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            documents: HashMap::new(),
            should_fail: true,
        }
    }
}

impl ScanReader for MockScanReader {
    fn read_scan(&self, path: &Path) -> Result<Value> {
        if self.should_fail {
            anyhow::bail!("Mock scan read failure");
        }
        match self.documents.get(path) {
            Some(document) => Ok(document.clone()),
            None => anyhow::bail!("No mock scan registered for {}", path.display()),
        }
    }
}
