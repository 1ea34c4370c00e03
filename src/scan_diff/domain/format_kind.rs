/// Scanner schema a document was produced by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// OWASP Dependency-Check JSON report
    OwaspScan,
    /// JFrog Xray artifact/registry scan
    RegistryScan,
    /// JFrog Xray container-image scan (top-level array)
    ContainerScan,
    /// None of the known schemas matched
    Unknown,
}

impl FormatKind {
    /// Human-readable name for progress output
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OwaspScan => "OWASP Dependency-Check",
            Self::RegistryScan => "JFrog Xray",
            Self::ContainerScan => "JFrog Xray (docker image)",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
