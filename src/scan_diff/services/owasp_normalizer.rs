use crate::scan_diff::domain::{Component, ComponentStore};
use crate::scan_diff::policies::ComponentNaming;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct OwaspReport {
    dependencies: Option<Vec<OwaspDependency>>,
}

#[derive(Debug, Deserialize)]
struct OwaspDependency {
    packages: Option<Vec<OwaspPackage>>,
    /// Absent when Dependency-Check did not flag the dependency
    vulnerabilities: Option<Vec<OwaspVulnerability>>,
}

#[derive(Debug, Deserialize)]
struct OwaspPackage {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwaspVulnerability {
    name: Option<String>,
}

/// OwaspNormalizer service for OWASP Dependency-Check JSON reports
///
/// Every package of a vulnerable dependency receives the full vulnerability
/// set of that dependency.
pub struct OwaspNormalizer;

impl OwaspNormalizer {
    pub fn normalize(document: &Value) -> Result<Vec<Component>, serde_json::Error> {
        let report = OwaspReport::deserialize(document)?;
        let mut store = ComponentStore::new();

        for dependency in report.dependencies.unwrap_or_default() {
            let Some(vulnerabilities) = dependency.vulnerabilities else {
                continue;
            };
            let names: Vec<String> = vulnerabilities
                .into_iter()
                .filter_map(|v| v.name)
                .collect();

            for package in dependency.packages.unwrap_or_default() {
                if let Some(component_name) = package
                    .id
                    .as_deref()
                    .and_then(ComponentNaming::from_owasp_package_id)
                {
                    store.add(component_name, names.iter().cloned());
                }
            }
        }

        Ok(store.into_components())
    }
}
