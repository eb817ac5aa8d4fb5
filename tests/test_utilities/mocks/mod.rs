/// Mock implementations for testing
mod mock_dashboard_repository;
mod mock_report_presenter;

pub use mock_dashboard_repository::MockDashboardRepository;
pub use mock_report_presenter::MockReportPresenter;
