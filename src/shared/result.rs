/// Type alias for Result with anyhow::Error as the error type.
/// Typed [`DiffError`](crate::shared::error::DiffError) values are converted into it with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
