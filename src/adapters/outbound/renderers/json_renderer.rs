use crate::ports::outbound::ReportRenderer;
use crate::scan_diff::domain::Component;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
struct JsonReport {
    left: String,
    right: String,
    rows: Vec<JsonRow>,
}

#[derive(Debug, Serialize)]
struct JsonRow {
    left: Option<Component>,
    right: Option<Component>,
}

/// JsonRenderer adapter rendering the diff as a JSON document
///
/// Rows are buffered and serialized in `render_footer`, using the canonical
/// component shape `{ "name": ..., "vulnerabilities": [{ "name": ... }] }`
/// with `null` for an absent side.
pub struct JsonRenderer {
    report: JsonReport,
    output: String,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self {
            report: JsonReport::default(),
            output: String::new(),
        }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonRenderer {
    fn render_header(&mut self, left_label: &str, right_label: &str) -> Result<()> {
        self.report.left = left_label.to_string();
        self.report.right = right_label.to_string();
        Ok(())
    }

    fn render_row(&mut self, left: Option<&Component>, right: Option<&Component>) -> Result<()> {
        self.report.rows.push(JsonRow {
            left: left.cloned(),
            right: right.cloned(),
        });
        Ok(())
    }

    fn render_footer(&mut self) -> Result<()> {
        let mut output = serde_json::to_string_pretty(&self.report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))?;
        output.push('\n');
        self.output = output;
        Ok(())
    }

    fn content(&self) -> &str {
        &self.output
    }
}
