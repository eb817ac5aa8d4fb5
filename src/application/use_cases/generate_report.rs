use crate::application::dto::{ReportRequest, ReportResponse};
use crate::ports::outbound::DashboardRepository;
use crate::report_generation::domain::Project;
use crate::report_generation::services::{ConsoleRenderer, MarkdownRenderer};
use crate::shared::error::ReportError;
use crate::shared::Result;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// GenerateReportUseCase - Core use case for security-report generation
///
/// This use case orchestrates the reporting workflow: authenticate against
/// the platform, fetch the dashboard for the requested project name, select
/// the project version to report on, and render both report forms.
///
/// # Type Parameters
/// * `R` - DashboardRepository implementation
pub struct GenerateReportUseCase<R> {
    dashboard_repository: R,
}

impl<R> GenerateReportUseCase<R>
where
    R: DashboardRepository,
{
    /// Creates a new GenerateReportUseCase with the injected repository
    pub fn new(dashboard_repository: R) -> Self {
        Self {
            dashboard_repository,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Arguments
    /// * `request` - Report request carrying the project name and optional
    ///   version filter
    /// * `cancel` - Cooperative cancellation signal forwarded to every
    ///   network call
    ///
    /// # Returns
    /// ReportResponse containing the console and markdown report texts
    ///
    /// # Errors
    /// Returns an error if login or any dashboard fetch fails, if no project
    /// matches the request, or if the operation is cancelled.
    pub async fn execute(
        &self,
        request: ReportRequest,
        cancel: &CancellationToken,
    ) -> Result<ReportResponse> {
        // Step 1: Authenticate
        debug!(project = %request.project_name, "logging in");
        self.dashboard_repository.login(cancel).await?;

        // Step 2: Fetch the dashboard for the requested name
        let projects = self
            .dashboard_repository
            .fetch_dashboard(&request.project_name, cancel)
            .await?;
        info!(matches = projects.len(), "dashboard fetched");

        // Step 3: Select the report subject
        let project = select_project(&projects, &request)?;
        info!(
            name = %project.name(),
            version = %project.version(),
            "generating report"
        );

        // Step 4: Render both report forms
        let console_report = ConsoleRenderer::render(project);
        let markdown_report = MarkdownRenderer::render(project)?;

        Ok(ReportResponse::new(console_report, markdown_report))
    }
}

/// Selects the project version the report is rendered for.
///
/// The candidates are the projects whose name equals the requested name
/// case-insensitively; with a version filter the candidates are further
/// restricted to that exact version. The first survivor wins.
fn select_project<'a>(projects: &'a [Project], request: &ReportRequest) -> Result<&'a Project> {
    let candidates: Vec<&Project> = projects
        .iter()
        .filter(|project| project.name().eq_ignore_ascii_case(&request.project_name))
        .collect();

    if candidates.is_empty() {
        return Err(ReportError::ProjectNotFound {
            name: request.project_name.clone(),
        }
        .into());
    }

    match &request.project_version {
        None => Ok(candidates[0]),
        Some(version) => candidates
            .into_iter()
            .find(|project| project.version() == version.as_str())
            .ok_or_else(|| {
                ReportError::VersionNotFound {
                    version: version.clone(),
                }
                .into()
            }),
    }
}
