use crate::ports::outbound::ReportPresenter;
use crate::shared::Result;
use std::io::{self, Write};

/// ConsolePresenter adapter for writing the report to stdout
///
/// Used when no CI output channel is configured.
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPresenter for ConsolePresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
