use crate::scan_diff::domain::{Component, ComponentStore};
use crate::scan_diff::policies::ComponentNaming;
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct ContainerScan {
    vulnerabilities: Option<Vec<ContainerVulnerability>>,
}

#[derive(Debug, Deserialize)]
struct ContainerVulnerability {
    /// Keyed by raw component reference; the values are not inspected
    components: Option<BTreeMap<String, IgnoredAny>>,
    cves: Option<Vec<ContainerCve>>,
}

#[derive(Debug, Deserialize)]
struct ContainerCve {
    cve: Option<String>,
}

/// ContainerNormalizer service for JFrog Xray docker image scans
///
/// Only the first element of the top-level array is read. Every component
/// reference of a vulnerability entry receives all CVE ids of that entry.
pub struct ContainerNormalizer;

impl ContainerNormalizer {
    pub fn normalize(document: &Value) -> Result<Vec<Component>, serde_json::Error> {
        let Some(first) = document.as_array().and_then(|items| items.first()) else {
            return Ok(Vec::new());
        };
        let scan = ContainerScan::deserialize(first)?;
        let mut store = ComponentStore::new();

        for vulnerability in scan.vulnerabilities.unwrap_or_default() {
            let cve_ids: Vec<String> = vulnerability
                .cves
                .unwrap_or_default()
                .into_iter()
                .filter_map(|cve| cve.cve)
                .collect();

            for reference in vulnerability.components.unwrap_or_default().into_keys() {
                store.add(
                    ComponentNaming::from_container_reference(&reference),
                    cve_ids.iter().cloned(),
                );
            }
        }

        Ok(store.into_components())
    }
}
