use serde::{Deserialize, Serialize};

/// A single vulnerability identifier attached to a component.
///
/// Identity is exact string equality on `name` (a CVE id or a
/// scanner-specific finding name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vulnerability {
    pub name: String,
}

impl Vulnerability {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Canonical component: a dependency identity plus its vulnerability set.
///
/// The vulnerability list is always sorted ascending and free of duplicates.
/// Deserialization goes through [`Component::new`], so documents in the
/// canonical JSON shape are normalized on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ComponentRecord")]
pub struct Component {
    name: String,
    vulnerabilities: Vec<Vulnerability>,
}

/// Wire shape of a component, before invariants are applied
#[derive(Deserialize)]
struct ComponentRecord {
    name: String,
    #[serde(default)]
    vulnerabilities: Vec<Vulnerability>,
}

impl From<ComponentRecord> for Component {
    fn from(record: ComponentRecord) -> Self {
        Component::new(
            record.name,
            record.vulnerabilities.into_iter().map(|v| v.name),
        )
    }
}

impl Component {
    pub fn new<I, S>(name: impl Into<String>, vulnerability_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vulnerabilities: Vec<Vulnerability> = vulnerability_ids
            .into_iter()
            .map(Vulnerability::new)
            .collect();
        vulnerabilities.sort();
        vulnerabilities.dedup();

        Self {
            name: name.into(),
            vulnerabilities,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vulnerabilities(&self) -> &[Vulnerability] {
        &self.vulnerabilities
    }

    pub fn vulnerability_ids(&self) -> impl Iterator<Item = &str> {
        self.vulnerabilities.iter().map(Vulnerability::name)
    }

    pub fn has_vulnerability(&self, id: &str) -> bool {
        self.vulnerabilities
            .binary_search_by(|v| v.name.as_str().cmp(id))
            .is_ok()
    }
}
