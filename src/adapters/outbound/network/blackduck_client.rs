use super::auth::{expiry_from_ttl, AuthToken};
use super::mapper;
use super::records::{
    ApiError, ComponentRecord, ComponentsPage, ProjectVersionRecord, ProjectVersionsPage,
    TokenResponse,
};
use super::rest_client::{RestRequest, SessionClient};
use crate::ports::outbound::DashboardRepository;
use crate::report_generation::domain::Project;
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Black Duck REST API client
///
/// Implements the DashboardRepository port against a live server. Owns the
/// session state: the bearer token issued by `login` is held behind a
/// read-write lock, read by every later call and replaced wholesale by the
/// next login.
pub struct BlackDuckClient {
    rest: SessionClient,
    api_token: String,
    auth: RwLock<Option<AuthToken>>,
}

impl BlackDuckClient {
    const ACCEPT_JSON: &'static str =
        "application/vnd.blackducksoftware.internal-1+json, application/json, */*;q=0.8";
    const LOGIN_PATH: &'static str = "/api/tokens/authenticate";
    const SEARCH_PATH: &'static str = "/api/search/project-versions";
    const COMPONENTS_SUFFIX: &'static str = "/components";
    // Restrict component lists to reviewed BOM entries that are in scope.
    const COMPONENT_FILTERS: [&'static str; 3] = [
        "bomInclusion:false",
        "bomMatchInclusion:false",
        "bomMatchReviewStatus:reviewed",
    ];
    const SEARCH_PAGE_LIMIT: usize = 100;
    const COMPONENT_PAGE_LIMIT: usize = 200;

    /// Creates a client for the given server.
    ///
    /// # Arguments
    /// * `base_url` - Server base address, e.g. `https://blackduck.example.com`
    /// * `api_token` - API key exchanged for a bearer token at login
    ///
    /// # Errors
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, api_token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            rest: SessionClient::new(base_url)?,
            api_token: api_token.into(),
            auth: RwLock::new(None),
        })
    }

    /// `Authorization` header value for authenticated calls.
    ///
    /// Fails fast when no login has succeeded on this session; no network
    /// call is attempted in that case.
    fn bearer_header(&self) -> Result<String> {
        let guard = self.auth.read();
        let token = guard
            .as_ref()
            .filter(|token| token.is_logged())
            .ok_or(ReportError::NotLoggedIn)?;

        if token.is_expired(Utc::now()) {
            warn!(
                expired_at = %token.expires_at(),
                "bearer token has expired; the server may reject this call"
            );
        }

        Ok(format!("Bearer {}", token.bearer_token()))
    }

    /// Runs the project-version search, following the offset pagination
    /// contract: repeat with an increased offset until a page comes back
    /// short or the cumulative count reaches the reported total.
    async fn search_project_versions(
        &self,
        project_name: &str,
        authorization: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ProjectVersionRecord>> {
        let mut records: Vec<ProjectVersionRecord> = Vec::new();
        let mut offset = 0usize;

        loop {
            let request = RestRequest::get(Self::SEARCH_PATH)
                .query("limit", Self::SEARCH_PAGE_LIMIT.to_string())
                .query("offset", offset.to_string())
                .query("q", project_name)
                .accept(Self::ACCEPT_JSON)
                .authorization(authorization);

            let page = self
                .rest
                .send::<ProjectVersionsPage, ApiError>(request, true, cancel)
                .await?;

            let batch = page.items.unwrap_or_default();
            let received = batch.len();
            records.extend(batch);

            if received < Self::SEARCH_PAGE_LIMIT || records.len() as u64 >= page.total_count {
                break;
            }
            offset += received;
        }

        Ok(records)
    }

    /// Fetches the component list behind one project version's resource
    /// locator, with the same pagination contract as the search.
    async fn fetch_components(
        &self,
        locator: &str,
        authorization: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ComponentRecord>> {
        let path = format!("{}{}", locator, Self::COMPONENTS_SUFFIX);
        let mut records: Vec<ComponentRecord> = Vec::new();
        let mut offset = 0usize;

        loop {
            let mut request = RestRequest::get(path.clone());
            for filter in Self::COMPONENT_FILTERS {
                request = request.query("filter", filter);
            }
            let request = request
                .query("limit", Self::COMPONENT_PAGE_LIMIT.to_string())
                .query("offset", offset.to_string())
                .accept(Self::ACCEPT_JSON)
                .authorization(authorization);

            let page = self
                .rest
                .send::<ComponentsPage, ApiError>(request, true, cancel)
                .await?;

            let batch = page.items.unwrap_or_default();
            let received = batch.len();
            records.extend(batch);

            if received < Self::COMPONENT_PAGE_LIMIT || records.len() as u64 >= page.total_count {
                break;
            }
            offset += received;
        }

        Ok(records)
    }
}

#[async_trait]
impl DashboardRepository for BlackDuckClient {
    async fn login(&self, cancel: &CancellationToken) -> Result<()> {
        let request = RestRequest::post(Self::LOGIN_PATH)
            .accept(Self::ACCEPT_JSON)
            .authorization(format!("token {}", self.api_token));

        let response = self
            .rest
            .send::<TokenResponse, ApiError>(request, true, cancel)
            .await?;

        if response.bearer_token.is_empty() {
            warn!("login response carried an empty bearer token");
        }

        let expires_at = expiry_from_ttl(Utc::now(), response.expires_in_milliseconds);
        debug!(%expires_at, "logged in to the platform");
        *self.auth.write() = Some(AuthToken::new(response.bearer_token, expires_at));

        Ok(())
    }

    async fn fetch_dashboard(
        &self,
        project_name: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<Project>> {
        let authorization = self.bearer_header()?;

        let records = self
            .search_project_versions(project_name, &authorization, cancel)
            .await?;
        debug!(matches = records.len(), "project-version search finished");

        // Sequential on purpose: one project's components are fetched
        // completely before the next project is touched.
        let mut projects = Vec::with_capacity(records.len());
        for record in &records {
            let components = match record.locator() {
                Some(locator) => {
                    self.fetch_components(locator, &authorization, cancel)
                        .await?
                }
                None => Vec::new(),
            };
            projects.push(mapper::to_project(record, &components));
        }

        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn client() -> BlackDuckClient {
        BlackDuckClient::new("https://blackduck.example.com", "api-key").unwrap()
    }

    #[test]
    fn test_bearer_header_requires_login() {
        let client = client();
        let error = client.bearer_header().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ReportError>(),
            Some(ReportError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_bearer_header_after_login() {
        let client = client();
        *client.auth.write() = Some(AuthToken::new(
            "issued-token".to_string(),
            Utc::now() + Duration::hours(2),
        ));

        assert_eq!(client.bearer_header().unwrap(), "Bearer issued-token");
    }

    #[test]
    fn test_bearer_header_rejects_empty_token() {
        let client = client();
        *client.auth.write() = Some(AuthToken::new(String::new(), Utc::now()));

        let error = client.bearer_header().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ReportError>(),
            Some(ReportError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_bearer_header_still_issued_when_expired() {
        // An expired token is the server's call to reject; the client only
        // warns and sends it anyway.
        let client = client();
        *client.auth.write() = Some(AuthToken::new(
            "stale-token".to_string(),
            Utc::now() - Duration::hours(1),
        ));

        assert_eq!(client.bearer_header().unwrap(), "Bearer stale-token");
    }

    #[tokio::test]
    async fn test_fetch_dashboard_fails_fast_without_login() {
        // The precondition check happens before any network call, so an
        // unreachable host does not matter here.
        let client = BlackDuckClient::new("https://blackduck.invalid", "api-key").unwrap();
        let cancel = CancellationToken::new();

        let error = client.fetch_dashboard("Foo", &cancel).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ReportError>(),
            Some(ReportError::NotLoggedIn)
        ));
    }
}
