/// Use cases module containing application business logic orchestration
mod diff_scans;

pub use diff_scans::DiffScansUseCase;
