use blackduck_report::prelude::*;

/// Mock ReportPresenter for testing that captures presented content
#[derive(Default, Clone)]
pub struct MockReportPresenter {
    pub presented: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockReportPresenter {
    pub fn new() -> Self {
        Self {
            presented: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub fn get_presented(&self) -> Vec<String> {
        self.presented.lock().unwrap().clone()
    }

    pub fn presented_count(&self) -> usize {
        self.presented.lock().unwrap().len()
    }
}

impl ReportPresenter for MockReportPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.presented.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
