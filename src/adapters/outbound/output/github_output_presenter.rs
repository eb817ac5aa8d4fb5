use crate::ports::outbound::ReportPresenter;
use crate::shared::Result;
use anyhow::Context;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// GithubOutputPresenter adapter for the GitHub Actions output channel
///
/// Appends the report to the file named by `GITHUB_OUTPUT` using the
/// multi-line output syntax, so a later workflow step can read it as
/// `steps.<id>.outputs.blackduck-scan-security-report`. The file is opened
/// in append mode: earlier steps may have written outputs already.
pub struct GithubOutputPresenter {
    output_path: PathBuf,
}

impl GithubOutputPresenter {
    const PROPERTY_NAME: &'static str = "blackduck-scan-security-report";
    const DELIMITER: &'static str = "EOF";

    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn format_block(content: &str) -> String {
        let mut block = String::with_capacity(content.len() + 64);
        block.push_str(Self::PROPERTY_NAME);
        block.push_str("<<");
        block.push_str(Self::DELIMITER);
        block.push('\n');
        block.push_str(content);
        if !content.ends_with('\n') {
            block.push('\n');
        }
        block.push_str(Self::DELIMITER);
        block.push('\n');
        block
    }
}

impl ReportPresenter for GithubOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.output_path)
            .with_context(|| {
                format!(
                    "Failed to open the GitHub output file {}",
                    self.output_path.display()
                )
            })?;

        file.write_all(Self::format_block(content).as_bytes())
            .with_context(|| {
                format!(
                    "Failed to append the report to {}",
                    self.output_path.display()
                )
            })?;

        Ok(())
    }
}
