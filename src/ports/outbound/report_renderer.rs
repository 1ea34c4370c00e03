use crate::scan_diff::domain::Component;
use crate::shared::Result;

/// ReportRenderer port for turning diff rows into a report
///
/// The application layer calls `render_header` once, `render_row` once per
/// diff row in order, then `render_footer` once. Implementations accumulate
/// the report and expose it through `content` after the footer is rendered.
pub trait ReportRenderer {
    /// Renders the header with the labels of the two scans
    fn render_header(&mut self, left_label: &str, right_label: &str) -> Result<()>;

    /// Renders one aligned row; at least one side is present
    fn render_row(&mut self, left: Option<&Component>, right: Option<&Component>) -> Result<()>;

    /// Finishes the report
    fn render_footer(&mut self) -> Result<()>;

    /// The rendered report
    fn content(&self) -> &str;
}
