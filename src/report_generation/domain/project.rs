use chrono::{DateTime, Utc};

use super::{Component, Vulnerabilities};

/// Aggregate root for one scanned project version
///
/// Owns its components outright; a new fetch cycle builds an entirely new
/// aggregate instead of mutating this one. The severity views partition the
/// components into mutually exclusive buckets: each component lands in the
/// view for its highest non-zero severity tier only, and a component with all
/// four counters at zero appears in none of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    version: String,
    last_updated_at: Option<DateTime<Utc>>,
    vulnerabilities: Vulnerabilities,
    components: Vec<Component>,
}

impl Project {
    pub fn new(
        name: String,
        version: String,
        last_updated_at: Option<DateTime<Utc>>,
        vulnerabilities: Vulnerabilities,
        components: Vec<Component>,
    ) -> Self {
        Self {
            name,
            version,
            last_updated_at,
            vulnerabilities,
            components,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated_at
    }

    pub fn vulnerabilities(&self) -> &Vulnerabilities {
        &self.vulnerabilities
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Components whose critical count is non-zero.
    pub fn components_with_critical(&self) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|component| component.vulnerabilities().critical() != 0)
            .collect()
    }

    /// Components whose highest non-zero tier is high.
    pub fn components_with_high(&self) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|component| {
                let counts = component.vulnerabilities();
                counts.critical() == 0 && counts.high() != 0
            })
            .collect()
    }

    /// Components whose highest non-zero tier is medium.
    pub fn components_with_medium(&self) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|component| {
                let counts = component.vulnerabilities();
                counts.critical() == 0 && counts.high() == 0 && counts.medium() != 0
            })
            .collect()
    }

    /// Components whose highest non-zero tier is low.
    pub fn components_with_low(&self) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|component| {
                let counts = component.vulnerabilities();
                counts.critical() == 0
                    && counts.high() == 0
                    && counts.medium() == 0
                    && counts.low() != 0
            })
            .collect()
    }

    /// Directly declared components, sorted by id for deterministic output.
    pub fn direct_dependencies(&self) -> Vec<&Component> {
        let mut dependencies: Vec<&Component> = self
            .components
            .iter()
            .filter(|component| component.is_direct_dependency())
            .collect();
        dependencies.sort_by(|a, b| a.id().cmp(b.id()));
        dependencies
    }
}
