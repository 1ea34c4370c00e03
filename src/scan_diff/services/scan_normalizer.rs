use super::{ContainerNormalizer, OwaspNormalizer, RegistryNormalizer, ScanClassifier};
use crate::scan_diff::domain::{Component, FormatKind};
use serde_json::Value;

/// Result of normalizing one scan document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedScan {
    pub format: FormatKind,
    /// Sorted by name, unique names
    pub components: Vec<Component>,
}

/// ScanNormalizer service: classify once, then dispatch to the matching normalizer.
///
/// An unrecognized document is not an error; it yields no components.
pub struct ScanNormalizer;

impl ScanNormalizer {
    /// # Errors
    /// Returns the deserialization error when a recognized document has fields
    /// of the wrong JSON type (e.g. `dependencies` is a string)
    pub fn normalize(document: &Value) -> Result<NormalizedScan, serde_json::Error> {
        let format = ScanClassifier::classify(document);
        let components = Self::normalize_as(format, document)?;

        Ok(NormalizedScan { format, components })
    }

    /// Runs the normalizer for an already classified document
    pub fn normalize_as(
        format: FormatKind,
        document: &Value,
    ) -> Result<Vec<Component>, serde_json::Error> {
        match format {
            FormatKind::OwaspScan => OwaspNormalizer::normalize(document),
            FormatKind::RegistryScan => RegistryNormalizer::normalize(document),
            FormatKind::ContainerScan => ContainerNormalizer::normalize(document),
            FormatKind::Unknown => Ok(Vec::new()),
        }
    }
}
