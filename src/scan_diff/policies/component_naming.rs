/// ComponentNaming policy for deriving canonical component names
///
/// Each scanner identifies packages differently; this policy encodes how every
/// supported identifier is turned into the canonical name used for alignment.
///
/// - OWASP package ids `scheme/group/artifact[/...]` become `group:artifact`
/// - Xray coordinates become `name@version`
/// - Xray docker references are rewritten per scheme (`gav://`, `pypi://`)
///   and passed through unchanged otherwise
pub struct ComponentNaming;

const GAV_SCHEME: &str = "gav://";
const PYPI_SCHEME: &str = "pypi://";

impl ComponentNaming {
    /// Derives `group:artifact` from an OWASP package id.
    ///
    /// # Returns
    /// None if the id has fewer than three slash-separated segments
    pub fn from_owasp_package_id(id: &str) -> Option<String> {
        let mut segments = id.split('/').skip(1);
        let group = segments.next()?;
        let artifact = segments.next()?;
        Some(format!("{}:{}", group, artifact))
    }

    /// Joins Xray impacted package coordinates as `name@version`
    pub fn from_registry_coordinates(name: &str, version: &str) -> String {
        format!("{}@{}", name, version)
    }

    /// Rewrites an Xray docker component reference.
    ///
    /// `gav://group:artifact:version` becomes `group:artifact@version` and
    /// `pypi://name:version` becomes `name@version`. The coordinates are read
    /// from the last path segment, so references carrying extra path segments
    /// before the coordinates are handled the same way. References that do
    /// not match either scheme, or whose coordinates have an unexpected number
    /// of parts, are returned unchanged.
    pub fn from_container_reference(reference: &str) -> String {
        if let Some(rest) = reference.strip_prefix(GAV_SCHEME) {
            if let [group, artifact, version] = Self::coordinates(rest).as_slice() {
                return format!("{}:{}@{}", group, artifact, version);
            }
        } else if let Some(rest) = reference.strip_prefix(PYPI_SCHEME) {
            if let [name, version] = Self::coordinates(rest).as_slice() {
                return format!("{}@{}", name, version);
            }
        }
        reference.to_string()
    }

    fn coordinates(path: &str) -> Vec<&str> {
        path.rsplit('/')
            .next()
            .map(|segment| segment.split(':').collect())
            .unwrap_or_default()
    }
}
