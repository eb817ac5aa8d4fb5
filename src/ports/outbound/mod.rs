/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach external systems (the scanning platform's REST API, the
/// console, CI output files).
pub mod dashboard_repository;
pub mod report_presenter;

pub use dashboard_repository::DashboardRepository;
pub use report_presenter::ReportPresenter;
