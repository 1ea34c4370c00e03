/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, renderers).
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_renderer;
pub mod scan_reader;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_renderer::ReportRenderer;
pub use scan_reader::ScanReader;
