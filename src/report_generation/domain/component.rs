use super::Vulnerabilities;

/// Scanned component value object
///
/// `id` is a stable composite key (`name:version`) used to order and address
/// components in reports. `match_type` is the platform's first match-type tag
/// for the component, empty when the platform supplied none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    version: String,
    id: String,
    vulnerabilities: Vulnerabilities,
    match_type: String,
}

impl Component {
    pub fn new(
        name: String,
        version: String,
        id: String,
        vulnerabilities: Vulnerabilities,
        match_type: String,
    ) -> Self {
        Self {
            name,
            version,
            id,
            vulnerabilities,
            match_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn vulnerabilities(&self) -> &Vulnerabilities {
        &self.vulnerabilities
    }

    pub fn match_type(&self) -> &str {
        &self.match_type
    }

    /// True when the match type tags this component as a directly declared
    /// dependency of the scanned project (case-insensitive "DIRECT" token).
    pub fn is_direct_dependency(&self) -> bool {
        self.match_type.to_uppercase().contains("DIRECT")
    }
}
