/// Output adapters for report delivery
mod console_presenter;
mod github_output_presenter;

pub use console_presenter::ConsolePresenter;
pub use github_output_presenter::GithubOutputPresenter;
