/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod diff_request;
mod diff_response;
mod output_format;

pub use diff_request::{DiffRequest, ScanInput};
pub use diff_response::{DiffResponse, ScanOverview};
pub use output_format::OutputFormat;
