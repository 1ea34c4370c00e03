use crate::scan_diff::domain::{DiffSummary, FormatKind};

/// What was learned about one input scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOverview {
    pub label: String,
    pub format: FormatKind,
    pub component_count: usize,
}

/// DiffResponse - Response DTO from the diff scans use case
///
/// The rendered report itself stays in the renderer; this carries what the
/// caller needs to decide on output and exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResponse {
    pub left: ScanOverview,
    pub right: ScanOverview,
    pub summary: DiffSummary,
}

impl DiffResponse {
    pub fn new(left: ScanOverview, right: ScanOverview, summary: DiffSummary) -> Self {
        Self {
            left,
            right,
            summary,
        }
    }

    pub fn has_differences(&self) -> bool {
        self.summary.has_differences()
    }
}
