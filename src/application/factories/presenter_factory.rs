use crate::adapters::outbound::output::{ConsolePresenter, GithubOutputPresenter};
use crate::ports::outbound::ReportPresenter;
use std::path::PathBuf;

/// Environment variable naming the CI output file for step outputs
const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Console,
    GithubOutput(PathBuf),
}

impl PresenterType {
    /// Selects the markdown delivery channel from the environment
    ///
    /// The CI output file wins when `GITHUB_OUTPUT` is set and non-empty;
    /// otherwise the report goes to the console.
    pub fn from_environment() -> Self {
        match std::env::var(GITHUB_OUTPUT_ENV) {
            Ok(path) if !path.is_empty() => PresenterType::GithubOutput(PathBuf::from(path)),
            _ => PresenterType::Console,
        }
    }
}

/// Factory for creating report presenters
///
/// This factory encapsulates the creation logic for the presenter
/// implementations, following the Factory Pattern. It belongs in the
/// application layer as it orchestrates the selection of infrastructure
/// adapters based on the execution environment.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Arguments
    /// * `presenter_type` - The type of presenter to create
    ///
    /// # Returns
    /// A boxed ReportPresenter trait object appropriate for the specified type
    ///
    /// # Examples
    /// ```
    /// use blackduck_report::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Console);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn ReportPresenter> {
        match presenter_type {
            PresenterType::Console => Box::new(ConsolePresenter::new()),
            PresenterType::GithubOutput(path) => Box::new(GithubOutputPresenter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_console_presenter() {
        let presenter = PresenterFactory::create(PresenterType::Console);
        assert!(presenter.present("hello\n").is_ok());
    }

    #[test]
    fn test_create_github_output_presenter() {
        let path = PathBuf::from("/tmp/test_github_output.txt");
        let _presenter = PresenterFactory::create(PresenterType::GithubOutput(path));
    }

    #[test]
    fn test_presenter_type_equality() {
        assert_eq!(PresenterType::Console, PresenterType::Console);

        let file1 = PresenterType::GithubOutput(PathBuf::from("/tmp/output1"));
        let file2 = PresenterType::GithubOutput(PathBuf::from("/tmp/output1"));
        assert_eq!(file1, file2);

        let file3 = PresenterType::GithubOutput(PathBuf::from("/tmp/output2"));
        assert_ne!(file1, file3);
    }
}
