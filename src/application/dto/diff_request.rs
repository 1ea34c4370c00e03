use std::path::PathBuf;

/// One scan report to be diffed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanInput {
    /// Location of the JSON report
    pub path: PathBuf,
    /// Column header used in the report
    pub label: String,
}

impl ScanInput {
    /// Creates an input labelled with the path as given
    pub fn from_path(path: PathBuf) -> Self {
        let label = path.display().to_string();
        Self { path, label }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// DiffRequest - Request DTO for the diff scans use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRequest {
    /// First scan; rendered in the left column
    pub left: ScanInput,
    /// Second scan; rendered in the right column
    pub right: ScanInput,
}

impl DiffRequest {
    pub fn new(left: ScanInput, right: ScanInput) -> Self {
        Self { left, right }
    }

    /// Builds a request whose labels are the paths as given
    pub fn from_paths(left: impl Into<PathBuf>, right: impl Into<PathBuf>) -> Self {
        Self::new(
            ScanInput::from_path(left.into()),
            ScanInput::from_path(right.into()),
        )
    }
}
