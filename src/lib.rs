//! blackduck-report - Black Duck security report generator
//!
//! This library logs into a Black Duck server, fetches the vulnerability
//! dashboard for a project, and renders deterministic console and markdown
//! security reports, following hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report_generation`): Pure domain models and report renderers
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Markdown** (`markdown`): Validated markdown document model
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use blackduck_report::prelude::*;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn generate() -> Result<()> {
//! // Create adapters
//! let dashboard_repository =
//!     BlackDuckClient::new("https://blackduck.example.com", "api-key")?;
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(dashboard_repository);
//!
//! // Execute
//! let request = ReportRequest::new("Foo".to_string(), Some("1.0".to_string()));
//! let response = use_case.execute(request, &CancellationToken::new()).await?;
//!
//! println!("{}", response.console_report);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod markdown;
pub mod ports;
pub mod report_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::network::BlackDuckClient;
    pub use crate::adapters::outbound::output::{ConsolePresenter, GithubOutputPresenter};
    pub use crate::application::dto::{ReportRequest, ReportResponse};
    pub use crate::application::factories::{PresenterFactory, PresenterType};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::markdown::Document;
    pub use crate::ports::outbound::{DashboardRepository, ReportPresenter};
    pub use crate::report_generation::domain::{Component, Project, Vulnerabilities};
    pub use crate::report_generation::services::{ConsoleRenderer, MarkdownRenderer};
    pub use crate::shared::Result;
}
