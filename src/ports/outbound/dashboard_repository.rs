use crate::report_generation::domain::Project;
use crate::shared::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// DashboardRepository port for the vulnerability-scanning platform
///
/// This port abstracts authentication and dashboard retrieval against the
/// platform's REST API. Implementations own the session state: `login` must
/// succeed on a session before `fetch_dashboard` is called on it.
///
/// # Async Support
/// All methods are async network calls. Implementations must be `Send + Sync`
/// to support use from the async runtime.
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Authenticates against the platform and stores the bearer token used by
    /// subsequent calls
    ///
    /// # Arguments
    /// * `cancel` - Cooperative cancellation signal observed during the call
    ///
    /// # Errors
    /// Returns an error if:
    /// - The token endpoint rejects the API key (HTTP 401)
    /// - The network request fails
    /// - The response cannot be parsed
    /// - The operation is cancelled
    async fn login(&self, cancel: &CancellationToken) -> Result<()>;

    /// Fetches every project version matching the given name, with each
    /// project's in-scope components and vulnerability counts
    ///
    /// # Arguments
    /// * `project_name` - Search term matched against project-version names
    /// * `cancel` - Cooperative cancellation signal observed between and
    ///   during network calls
    ///
    /// # Returns
    /// The mapped domain aggregates, in the order the platform returned them
    ///
    /// # Errors
    /// Returns an error if:
    /// - `login` has not succeeded on this session
    /// - Any single page or sub-resource fetch fails
    /// - The operation is cancelled
    async fn fetch_dashboard(
        &self,
        project_name: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<Project>>;
}
