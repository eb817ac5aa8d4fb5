/// ReportRequest - Internal request DTO for the report generation use case
///
/// This DTO represents the internal request structure used within
/// the application layer, decoupled from the CLI argument surface.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Project name searched for on the platform (matched case-insensitively)
    pub project_name: String,
    /// Optional exact version filter applied after the name match
    pub project_version: Option<String>,
}

impl ReportRequest {
    pub fn new(project_name: String, project_version: Option<String>) -> Self {
        Self {
            project_name,
            project_version,
        }
    }
}
