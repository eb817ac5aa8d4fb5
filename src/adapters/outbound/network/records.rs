use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::rest_client::ErrorPayload;
use crate::shared::error::ReportError;

// Wire-shaped records for the Black Duck REST API.
//
// The platform omits fields freely, so every field is optional-tolerant:
// `Option` where absence is meaningful, `#[serde(default)]` elsewhere.
// Domain aggregates are built from these by the mapper, never used directly.

/// Body of a successful `POST /api/tokens/authenticate` call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub(crate) bearer_token: String,
    #[serde(default)]
    pub(crate) expires_in_milliseconds: i64,
}

/// Structured error body the platform returns on non-success statuses.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiError {
    #[serde(default)]
    pub(crate) error_message: Option<String>,
    #[serde(default)]
    pub(crate) error_code: Option<String>,
    #[serde(default)]
    pub(crate) log_ref: Option<String>,
}

impl ErrorPayload for ApiError {
    fn into_report_error(self, status: u16) -> ReportError {
        ReportError::Server {
            status,
            message: self
                .error_message
                .unwrap_or_else(|| "no error message provided".to_string()),
            code: self.error_code.unwrap_or_else(|| "unknown".to_string()),
            log_ref: self.log_ref.unwrap_or_else(|| "none".to_string()),
        }
    }
}

/// Resource locator block attached to most platform records.
#[derive(Debug, Deserialize)]
pub(crate) struct Meta {
    #[serde(default)]
    pub(crate) href: Option<String>,
}

/// Per-severity counters under `riskProfile.categories.VULNERABILITY`.
///
/// The platform spells these keys in uppercase. Counters are signed on the
/// wire; the mapper clamps them to zero.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct VulnerabilityCategory {
    #[serde(default, rename = "CRITICAL")]
    pub(crate) critical: Option<i64>,
    #[serde(default, rename = "HIGH")]
    pub(crate) high: Option<i64>,
    #[serde(default, rename = "MEDIUM")]
    pub(crate) medium: Option<i64>,
    #[serde(default, rename = "LOW")]
    pub(crate) low: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RiskCategories {
    #[serde(default, rename = "VULNERABILITY")]
    pub(crate) vulnerability: Option<VulnerabilityCategory>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RiskProfile {
    #[serde(default)]
    pub(crate) categories: Option<RiskCategories>,
}

/// One hit from the project-version search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectVersionRecord {
    #[serde(default)]
    pub(crate) project_name: Option<String>,
    #[serde(default)]
    pub(crate) version_name: Option<String>,
    #[serde(default)]
    pub(crate) last_updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub(crate) risk_profile: Option<RiskProfile>,
    #[serde(default, rename = "_meta")]
    pub(crate) meta: Option<Meta>,
}

impl ProjectVersionRecord {
    /// Resource locator used to fetch this record's sub-resources.
    pub(crate) fn locator(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|meta| meta.href.as_deref())
    }
}

/// One page of project-version search results.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectVersionsPage {
    #[serde(default)]
    pub(crate) total_count: u64,
    #[serde(default)]
    pub(crate) items: Option<Vec<ProjectVersionRecord>>,
}

/// One `{countType, count}` entry under `securityRiskProfile.counts`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RiskCount {
    #[serde(default)]
    pub(crate) count_type: Option<String>,
    #[serde(default)]
    pub(crate) count: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SecurityRiskProfile {
    #[serde(default)]
    pub(crate) counts: Vec<RiskCount>,
}

/// One component from a project version's `/components` sub-resource.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ComponentRecord {
    #[serde(default)]
    pub(crate) component_name: Option<String>,
    #[serde(default)]
    pub(crate) component_version_name: Option<String>,
    #[serde(default)]
    pub(crate) security_risk_profile: Option<SecurityRiskProfile>,
    #[serde(default)]
    pub(crate) match_types: Vec<String>,
}

/// One page of a project version's component list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ComponentsPage {
    #[serde(default)]
    pub(crate) total_count: u64,
    #[serde(default)]
    pub(crate) items: Option<Vec<ComponentRecord>>,
}
