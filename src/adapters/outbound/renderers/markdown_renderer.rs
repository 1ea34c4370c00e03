use crate::ports::outbound::ReportRenderer;
use crate::scan_diff::domain::Component;
use crate::shared::Result;

/// Markdown table separator line for the two-column diff table
const TABLE_SEPARATOR: &str = "| --- | --- |\n";

/// Line break used between a component name and its vulnerability ids
const CELL_LINE_BREAK: &str = "<br/>";

/// MarkdownRenderer adapter rendering the diff as a two-column Markdown table
///
/// Each cell holds the component name followed by its vulnerability ids,
/// separated by `<br/>`; a side without the component renders as an empty cell.
pub struct MarkdownRenderer {
    output: String,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn cell(component: Option<&Component>) -> String {
        let Some(component) = component else {
            return String::new();
        };

        std::iter::once(component.name())
            .chain(component.vulnerability_ids())
            .map(Self::escape_markdown_table_cell)
            .collect::<Vec<_>>()
            .join(CELL_LINE_BREAK)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for MarkdownRenderer {
    fn render_header(&mut self, left_label: &str, right_label: &str) -> Result<()> {
        self.output.push_str(&format!(
            "| {} | {} |\n",
            Self::escape_markdown_table_cell(left_label),
            Self::escape_markdown_table_cell(right_label)
        ));
        self.output.push_str(TABLE_SEPARATOR);
        Ok(())
    }

    fn render_row(&mut self, left: Option<&Component>, right: Option<&Component>) -> Result<()> {
        self.output.push_str(&format!(
            "| {} | {} |\n",
            Self::cell(left),
            Self::cell(right)
        ));
        Ok(())
    }

    fn render_footer(&mut self) -> Result<()> {
        Ok(())
    }

    fn content(&self) -> &str {
        &self.output
    }
}
