/// Per-severity vulnerability counts for one project or component
///
/// All four counters derive from the same severity-count source on the
/// platform side; negative wire values are clamped to zero before this type
/// is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vulnerabilities {
    critical: u32,
    high: u32,
    medium: u32,
    low: u32,
}

impl Vulnerabilities {
    pub fn new(critical: u32, high: u32, medium: u32, low: u32) -> Self {
        Self {
            critical,
            high,
            medium,
            low,
        }
    }

    pub fn critical(&self) -> u32 {
        self.critical
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn medium(&self) -> u32 {
        self.medium
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    /// Sum across the four rendered severity tiers.
    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low
    }
}
