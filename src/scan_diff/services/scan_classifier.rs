use crate::scan_diff::domain::FormatKind;
use serde_json::Value;

/// ScanClassifier service for detecting which scanner produced a document
///
/// Detection rules are tried in a fixed order and the first match wins:
/// 1. object with both `projectInfo` and `dependencies` → OWASP Dependency-Check
/// 2. object with `vulnerabilities` → Xray registry/artifact scan
/// 3. non-empty array whose first element is an object with `vulnerabilities`
///    → Xray container-image scan
pub struct ScanClassifier;

impl ScanClassifier {
    pub fn classify(document: &Value) -> FormatKind {
        match document {
            Value::Object(map) if map.contains_key("projectInfo") && map.contains_key("dependencies") => {
                FormatKind::OwaspScan
            }
            Value::Object(map) if map.contains_key("vulnerabilities") => FormatKind::RegistryScan,
            Value::Array(items) => match items.first() {
                Some(Value::Object(first)) if first.contains_key("vulnerabilities") => {
                    FormatKind::ContainerScan
                }
                _ => FormatKind::Unknown,
            },
            _ => FormatKind::Unknown,
        }
    }
}
