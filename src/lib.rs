//! cves-diff - side-by-side diff of dependency vulnerability scans
//!
//! This library reads two vulnerability scan reports produced by different
//! scanners (OWASP Dependency-Check, JFrog Xray registry scans and JFrog Xray
//! container-image scans), normalizes each into a canonical
//! "component → vulnerabilities" model and aligns them by component name,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan_diff`): Canonical model, naming policies, normalizers and the merge-diff
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cves_diff::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let scan_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = DiffScansUseCase::new(scan_reader, progress_reporter);
//!
//! // Execute
//! let request = DiffRequest::from_paths("before.json", "after.json");
//! let mut renderer = MarkdownRenderer::new();
//! let response = use_case.execute(request, &mut renderer)?;
//!
//! println!("{}", renderer.content());
//! println!("differences: {}", response.has_differences());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod scan_diff;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::renderers::{JsonRenderer, MarkdownRenderer};
    pub use crate::application::dto::{
        DiffRequest, DiffResponse, OutputFormat, ScanInput, ScanOverview,
    };
    pub use crate::application::use_cases::DiffScansUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportRenderer, ScanReader,
    };
    pub use crate::scan_diff::domain::{
        Component, ComponentStore, DiffSummary, FormatKind, RowPair, Vulnerability,
    };
    pub use crate::scan_diff::policies::ComponentNaming;
    pub use crate::scan_diff::services::{MergeDiff, ScanClassifier, ScanNormalizer};
    pub use crate::shared::Result;
}
