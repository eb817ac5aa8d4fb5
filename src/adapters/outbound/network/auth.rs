use chrono::{DateTime, Duration, Utc};

/// Bearer token issued by a successful login.
///
/// Immutable once issued; a fresh login replaces the stored token wholesale.
/// The TTL the platform reports is converted to an absolute expiry timestamp
/// at parse time so later checks are a plain comparison.
#[derive(Debug, Clone)]
pub(crate) struct AuthToken {
    bearer_token: String,
    expires_at: DateTime<Utc>,
}

impl AuthToken {
    pub(crate) fn new(bearer_token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            bearer_token,
            expires_at,
        }
    }

    pub(crate) fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    pub(crate) fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// True when the platform actually issued a token.
    pub(crate) fn is_logged(&self) -> bool {
        !self.bearer_token.is_empty()
    }

    /// True once `now` has passed the recorded expiry.
    pub(crate) fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Converts a TTL in milliseconds into an absolute expiry timestamp.
pub(crate) fn expiry_from_ttl(now: DateTime<Utc>, milliseconds: i64) -> DateTime<Utc> {
    now + Duration::milliseconds(milliseconds)
}
