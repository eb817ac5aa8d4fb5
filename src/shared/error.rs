use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the report was generated and delivered
    Success = 0,
    /// Runtime failure (login failure, network error, project not found, etc.)
    RuntimeFailure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RuntimeFailure => write!(f, "Runtime Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for report generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Authentication failed (HTTP 401)\n\n💡 Hint: Please verify that the Black Duck API token is valid and has not been revoked")]
    Authentication,

    #[error("Malformed server response: {reason}")]
    MalformedResponse { reason: String },

    #[error("Server rejected the request (HTTP {status}): {message}\nError code: {code}\nLog reference: {log_ref}")]
    Server {
        status: u16,
        message: String,
        code: String,
        log_ref: String,
    },

    #[error("Network error: {details}\n\n💡 Hint: Please verify that the Black Duck server URL is reachable from this machine")]
    Network { details: String },

    /// Precondition violation for dashboard fetches
    #[error("Not logged in: a dashboard fetch was attempted before login")]
    NotLoggedIn,

    #[error("Project not found: {name}\n\n💡 Hint: Project names are matched case-insensitively; please verify the project exists on the server")]
    ProjectNotFound { name: String },

    #[error("Project version not found: {version}")]
    VersionNotFound { version: String },

    #[error("Operation cancelled")]
    Cancelled,
}
