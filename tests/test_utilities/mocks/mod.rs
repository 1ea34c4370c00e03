/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_report_renderer;
mod mock_scan_reader;

pub use mock_progress_reporter::{MockProgressReporter, ReportedEvent};
pub use mock_report_renderer::MockReportRenderer;
pub use mock_scan_reader::MockScanReader;
