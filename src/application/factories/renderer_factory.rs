use crate::adapters::outbound::renderers::{JsonRenderer, MarkdownRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportRenderer;

/// Factory for creating report renderers
///
/// Selects the renderer adapter for an output format so that the CLI only
/// deals with [`OutputFormat`].
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer for the specified output format
    ///
    /// # Examples
    /// ```
    /// use cves_diff::application::dto::OutputFormat;
    /// use cves_diff::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportRenderer> {
        match format {
            OutputFormat::Markdown => Box::new(MarkdownRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Markdown => "📝 Rendering Markdown diff report...",
            OutputFormat::Json => "📝 Rendering JSON diff report...",
        }
    }
}
