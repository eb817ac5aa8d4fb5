use crate::shared::Result;

/// ReportPresenter port for delivering a rendered report
///
/// This port abstracts the delivery channel (stdout, a CI output file)
/// for a fully rendered report document.
pub trait ReportPresenter {
    /// Delivers the rendered report to its destination
    ///
    /// # Arguments
    /// * `content` - The rendered report text
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
