use crate::scan_diff::domain::{Component, ComponentStore};
use crate::scan_diff::policies::ComponentNaming;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct XrayReport {
    vulnerabilities: Option<Vec<XrayVulnerability>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct XrayVulnerability {
    impacted_package_name: Option<String>,
    impacted_package_version: Option<String>,
    cves: Option<Vec<XrayCve>>,
}

#[derive(Debug, Deserialize)]
struct XrayCve {
    id: Option<String>,
}

/// RegistryNormalizer service for JFrog Xray artifact scans
///
/// Components are named `impactedPackageName@impactedPackageVersion`.
/// Entries missing either coordinate are ignored.
pub struct RegistryNormalizer;

impl RegistryNormalizer {
    pub fn normalize(document: &Value) -> Result<Vec<Component>, serde_json::Error> {
        let report = XrayReport::deserialize(document)?;
        let mut store = ComponentStore::new();

        for vulnerability in report.vulnerabilities.unwrap_or_default() {
            let (Some(name), Some(version)) = (
                vulnerability.impacted_package_name.as_deref(),
                vulnerability.impacted_package_version.as_deref(),
            ) else {
                continue;
            };

            let cve_ids = vulnerability
                .cves
                .unwrap_or_default()
                .into_iter()
                .filter_map(|cve| cve.id);
            store.add(
                ComponentNaming::from_registry_coordinates(name, version),
                cve_ids,
            );
        }

        Ok(store.into_components())
    }
}
