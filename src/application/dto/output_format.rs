/// Output format enumeration for diff reports
///
/// Both the CLI (inbound) and the renderers (outbound) need to understand
/// this, so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Two-column Markdown table (default)
    #[default]
    Markdown,
    /// JSON document with the canonical component shape
    Json,
}

impl OutputFormat {
    /// Report file name used when no output path is given
    pub fn default_output_name(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "cves-diff-out.md",
            OutputFormat::Json => "cves-diff-out.json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'markdown' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
