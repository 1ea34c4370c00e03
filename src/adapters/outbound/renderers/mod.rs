/// Renderer adapters for the supported report formats
mod json_renderer;
mod markdown_renderer;

pub use json_renderer::JsonRenderer;
pub use markdown_renderer::MarkdownRenderer;
