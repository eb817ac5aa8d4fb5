pub mod component;
pub mod project;
pub mod vulnerabilities;

pub use component::Component;
pub use project::Project;
pub use vulnerabilities::Vulnerabilities;
