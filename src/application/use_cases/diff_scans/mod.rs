use crate::application::dto::{DiffRequest, DiffResponse, ScanInput, ScanOverview};
use crate::ports::outbound::{ProgressReporter, ReportRenderer, ScanReader};
use crate::scan_diff::domain::{Component, DiffSummary, FormatKind, RowPair};
use crate::scan_diff::services::{MergeDiff, ScanClassifier, ScanNormalizer};
use crate::shared::error::DiffError;
use crate::shared::Result;

/// Number of scans read per run, used for step progress
const SCAN_COUNT: usize = 2;

/// One input after reading, classification and normalization
struct LoadedScan {
    format: FormatKind,
    components: Vec<Component>,
}

/// DiffScansUseCase - Core use case for comparing two scan reports
///
/// Reads both reports through the injected `ScanReader`, normalizes each one
/// into sorted components, aligns them by name and streams the aligned rows
/// into the renderer supplied by the caller.
///
/// # Type Parameters
/// * `R` - ScanReader implementation
/// * `PR` - ProgressReporter implementation
pub struct DiffScansUseCase<R, PR> {
    scan_reader: R,
    progress_reporter: PR,
}

impl<R, PR> DiffScansUseCase<R, PR>
where
    R: ScanReader,
    PR: ProgressReporter,
{
    /// Creates a new DiffScansUseCase with injected dependencies
    pub fn new(scan_reader: R, progress_reporter: PR) -> Self {
        Self {
            scan_reader,
            progress_reporter,
        }
    }

    /// Executes the diff
    ///
    /// # Arguments
    /// * `request` - The two scans to compare, first one on the left
    /// * `renderer` - Receives the header, one call per aligned row, then the footer
    ///
    /// # Returns
    /// DiffResponse describing both inputs and the row counts
    ///
    /// # Errors
    /// Fails when a report cannot be read, is not JSON, or is a recognized
    /// format whose fields have the wrong types. An unrecognized format is
    /// only a warning.
    pub fn execute(
        &self,
        request: DiffRequest,
        renderer: &mut dyn ReportRenderer,
    ) -> Result<DiffResponse> {
        // Step 1: Load both sides
        let left = self.load_scan(&request.left, 1)?;
        let right = self.load_scan(&request.right, 2)?;

        // Step 2: Align by component name
        let rows = MergeDiff::diff(&left.components, &right.components);
        let summary = DiffSummary::from_rows(&rows);

        // Step 3: Render
        Self::render_rows(&request, &rows, renderer)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Compared {} row(s): {} only in first, {} only in second, {} changed",
            summary.total_rows(),
            summary.left_only,
            summary.right_only,
            summary.changed
        ));

        Ok(DiffResponse::new(
            Self::overview(&request.left, &left),
            Self::overview(&request.right, &right),
            summary,
        ))
    }

    fn load_scan(&self, input: &ScanInput, step: usize) -> Result<LoadedScan> {
        self.progress_reporter.report(&format!(
            "📖 Loading scan report from: {}",
            input.path.display()
        ));

        let document = self.scan_reader.read_scan(&input.path)?;
        let format = ScanClassifier::classify(&document);
        let components = ScanNormalizer::normalize_as(format, &document).map_err(|e| {
            DiffError::ScanParseError {
                path: input.path.clone(),
                details: format!("Document looks like a {} report but {}", format, e),
            }
        })?;

        if format.is_known() {
            self.progress_reporter.report(&format!(
                "✅ Detected {} report with {} component(s)",
                format,
                components.len()
            ));
        } else {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} is not a recognized scan report; treating it as empty",
                input.label
            ));
        }

        self.progress_reporter
            .report_progress(step, SCAN_COUNT, Some(&input.label));

        Ok(LoadedScan { format, components })
    }

    fn render_rows(
        request: &DiffRequest,
        rows: &[RowPair<'_>],
        renderer: &mut dyn ReportRenderer,
    ) -> Result<()> {
        renderer.render_header(&request.left.label, &request.right.label)?;
        for row in rows {
            renderer.render_row(row.left(), row.right())?;
        }
        renderer.render_footer()
    }

    fn overview(input: &ScanInput, scan: &LoadedScan) -> ScanOverview {
        ScanOverview {
            label: input.label.clone(),
            format: scan.format,
            component_count: scan.components.len(),
        }
    }
}
