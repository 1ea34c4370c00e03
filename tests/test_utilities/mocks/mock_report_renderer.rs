use cves_diff::prelude::*;

/// Mock ReportRenderer recording each call as a line of text
#[derive(Default)]
pub struct MockReportRenderer {
    pub calls: Vec<String>,
}

impl MockReportRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows rendered so far, as `left | right` names with `-` for an absent side
    pub fn rows(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| call.strip_prefix("row: "))
            .collect()
    }
}

impl ReportRenderer for MockReportRenderer {
    fn render_header(&mut self, left_label: &str, right_label: &str) -> Result<()> {
        self.calls
            .push(format!("header: {} | {}", left_label, right_label));
        Ok(())
    }

    fn render_row(&mut self, left: Option<&Component>, right: Option<&Component>) -> Result<()> {
        self.calls.push(format!(
            "row: {} | {}",
            left.map_or("-", Component::name),
            right.map_or("-", Component::name)
        ));
        Ok(())
    }

    fn render_footer(&mut self) -> Result<()> {
        self.calls.push("footer".to_string());
        Ok(())
    }

    fn content(&self) -> &str {
        ""
    }
}
