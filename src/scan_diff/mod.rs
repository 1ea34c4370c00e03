/// Domain layer - Scan normalization and diffing
///
/// Pure business logic with no I/O: the canonical component model,
/// naming policies, format detection, normalizers and the merge-diff engine.
pub mod domain;
pub mod policies;
pub mod services;
