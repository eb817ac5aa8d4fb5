use crate::shared::error::ReportError;
use crate::shared::Result;
use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Decoded error body of a non-success response.
///
/// Implementors turn the payload plus the HTTP status into the shared
/// error taxonomy. `Default` covers bodies that do not decode at all:
/// the status code still reaches the caller.
pub(crate) trait ErrorPayload: DeserializeOwned + Default {
    fn into_report_error(self, status: u16) -> ReportError;
}

/// One outgoing REST exchange, described declaratively.
///
/// Paths are resolved against the session's base address unless they are
/// already absolute (the platform hands out absolute resource locators).
/// Query keys may repeat; insertion order is preserved on the wire.
#[derive(Debug)]
pub(crate) struct RestRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    accept: Option<String>,
    authorization: Option<String>,
}

impl RestRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            accept: None,
            authorization: None,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub(crate) fn accept(mut self, value: impl Into<String>) -> Self {
        self.accept = Some(value.into());
        self
    }

    /// Sets the raw `Authorization` header value (`token <key>`,
    /// `Bearer <token>`, ...).
    pub(crate) fn authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }
}

/// HTTP session against a single Black Duck base address.
///
/// Holds one connection-pooling `reqwest::Client` for the whole process
/// and classifies every response into the shared error taxonomy.
pub(crate) struct SessionClient {
    client: Client,
    base_url: String,
}

impl SessionClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a session client for the given base address.
    ///
    /// # Arguments
    /// * `base_url` - Server base address; a trailing slash is tolerated
    ///
    /// # Errors
    /// Returns an error when the underlying HTTP client cannot be built.
    pub(crate) fn new(base_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("blackduck-report/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends one request and decodes the response.
    ///
    /// Classification order: a 401 status fails with an authentication
    /// error before anything else is looked at; then the content type is
    /// checked when `require_json` is set; then a success status decodes
    /// the body against `TSuccess` (an empty or undecodable body is a
    /// malformed response) while a non-success status decodes the body
    /// against `TError` and surfaces it together with the status code.
    ///
    /// # Arguments
    /// * `request` - The exchange to perform
    /// * `require_json` - Reject responses whose content type is not JSON
    /// * `cancel` - Cancellation token observed for the whole exchange
    ///
    /// # Errors
    /// Transport failures surface as network errors; cancellation mid-flight
    /// surfaces as a cancellation error.
    pub(crate) async fn send<TSuccess, TError>(
        &self,
        request: RestRequest,
        require_json: bool,
        cancel: &CancellationToken,
    ) -> Result<TSuccess>
    where
        TSuccess: DeserializeOwned,
        TError: ErrorPayload,
    {
        // A token cancelled between calls stops the sequence before any
        // connection attempt is made.
        if cancel.is_cancelled() {
            return Err(ReportError::Cancelled.into());
        }

        let url = self.resolve_url(&request.path);

        trace!(
            method = %request.method,
            url = %url,
            query = ?request.query,
            accept = request.accept.as_deref().unwrap_or("-"),
            authorization = if request.authorization.is_some() {
                "<redacted>"
            } else {
                "-"
            },
            "sending request"
        );

        let mut builder = self.client.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(accept) = &request.accept {
            builder = builder.header(header::ACCEPT, accept);
        }
        if let Some(authorization) = &request.authorization {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let content_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let body = response.text().await?;
            Ok::<(StatusCode, String, String), reqwest::Error>((status, content_type, body))
        };

        let (status, content_type, body) = tokio::select! {
            _ = cancel.cancelled() => return Err(ReportError::Cancelled.into()),
            result = exchange => result.map_err(|err| ReportError::Network {
                details: err.to_string(),
            })?,
        };

        trace!(
            status = %status,
            content_type = %content_type,
            body_bytes = body.len(),
            "received response"
        );

        if status == StatusCode::UNAUTHORIZED {
            return Err(ReportError::Authentication.into());
        }

        if require_json && !is_json_content_type(&content_type) {
            return Err(ReportError::MalformedResponse {
                reason: format!(
                    "unexpected content type '{}' (HTTP {})",
                    content_type,
                    status.as_u16()
                ),
            }
            .into());
        }

        if status.is_success() {
            if body.trim().is_empty() {
                return Err(ReportError::MalformedResponse {
                    reason: "response body is empty".to_string(),
                }
                .into());
            }
            let value = serde_json::from_str::<TSuccess>(&body).map_err(|err| {
                ReportError::MalformedResponse {
                    reason: format!("could not decode response body: {}", err),
                }
            })?;
            return Ok(value);
        }

        let payload: TError = serde_json::from_str(&body).unwrap_or_default();
        Err(payload.into_report_error(status.as_u16()).into())
    }

    fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }
}

/// The platform answers with `application/vnd.blackducksoftware.…+json`
/// variants, so any vendor `+json` suffix counts as JSON.
fn is_json_content_type(content_type: &str) -> bool {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    media_type == "application/json" || media_type.ends_with("+json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_json_content_type_plain_json() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
    }

    #[test]
    fn test_is_json_content_type_vendor_suffix() {
        assert!(is_json_content_type(
            "application/vnd.blackducksoftware.internal-1+json"
        ));
        assert!(is_json_content_type(
            "application/vnd.blackducksoftware.project-detail-4+json; charset=UTF-8"
        ));
    }

    #[test]
    fn test_is_json_content_type_rejects_others() {
        assert!(!is_json_content_type("text/html"));
        assert!(!is_json_content_type("application/octet-stream"));
        assert!(!is_json_content_type(""));
    }

    #[test]
    fn test_resolve_url_joins_relative_path() {
        let client = SessionClient::new("https://blackduck.example.com/").unwrap();
        assert_eq!(
            client.resolve_url("/api/tokens/authenticate"),
            "https://blackduck.example.com/api/tokens/authenticate"
        );
    }

    #[test]
    fn test_resolve_url_keeps_absolute_locator() {
        let client = SessionClient::new("https://blackduck.example.com").unwrap();
        let href = "https://other.example.com/api/projects/p1/versions/v1";
        assert_eq!(client.resolve_url(href), href);
    }

    #[test]
    fn test_rest_request_preserves_repeated_query_keys() {
        let request = RestRequest::get("/api/x")
            .query("filter", "bomInclusion:false")
            .query("filter", "bomMatchInclusion:false")
            .query("limit", "200");
        assert_eq!(
            request.query,
            vec![
                ("filter".to_string(), "bomInclusion:false".to_string()),
                ("filter".to_string(), "bomMatchInclusion:false".to_string()),
                ("limit".to_string(), "200".to_string()),
            ]
        );
    }
}
