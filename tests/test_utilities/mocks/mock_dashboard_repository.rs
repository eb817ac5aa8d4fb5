use async_trait::async_trait;
use blackduck_report::prelude::*;
use blackduck_report::shared::error::ReportError;
use tokio_util::sync::CancellationToken;

/// Mock DashboardRepository for testing that captures calls
pub struct MockDashboardRepository {
    pub projects: Vec<Project>,
    pub calls: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    pub fail_login: bool,
    pub fail_fetch: bool,
}

impl MockDashboardRepository {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            calls: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
            fail_login: false,
            fail_fetch: false,
        }
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    pub fn with_login_failure() -> Self {
        Self {
            fail_login: true,
            ..Self::new()
        }
    }

    pub fn with_fetch_failure() -> Self {
        Self {
            fail_fetch: true,
            ..Self::new()
        }
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockDashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardRepository for MockDashboardRepository {
    async fn login(&self, cancel: &CancellationToken) -> Result<()> {
        self.calls.lock().unwrap().push("login".to_string());

        if cancel.is_cancelled() {
            return Err(ReportError::Cancelled.into());
        }
        if self.fail_login {
            anyhow::bail!("Mock login failure");
        }
        Ok(())
    }

    async fn fetch_dashboard(
        &self,
        project_name: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<Project>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("fetch_dashboard:{}", project_name));

        if cancel.is_cancelled() {
            return Err(ReportError::Cancelled.into());
        }
        if self.fail_fetch {
            anyhow::bail!("Mock dashboard fetch failure");
        }
        Ok(self.projects.clone())
    }
}
