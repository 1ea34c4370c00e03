mod container_normalizer;
mod merge_diff;
mod owasp_normalizer;
mod registry_normalizer;
mod scan_classifier;
mod scan_normalizer;

pub use container_normalizer::ContainerNormalizer;
pub use merge_diff::MergeDiff;
pub use owasp_normalizer::OwaspNormalizer;
pub use registry_normalizer::RegistryNormalizer;
pub use scan_classifier::ScanClassifier;
pub use scan_normalizer::{NormalizedScan, ScanNormalizer};
