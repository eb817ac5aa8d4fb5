/// ReportResponse - Internal response DTO from the report generation use case
///
/// Carries both fully rendered report forms; adapters decide where each
/// one is delivered.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Tab-indented plain-text report for CI logs
    pub console_report: String,
    /// Markdown report built through the document model
    pub markdown_report: String,
}

impl ReportResponse {
    pub fn new(console_report: String, markdown_report: String) -> Self {
        Self {
            console_report,
            markdown_report,
        }
    }
}
