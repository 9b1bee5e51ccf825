/// ProgressReporter port for user-facing diagnostics
///
/// This port abstracts progress reporting (e.g., to stderr) so that
/// stdout stays reserved for the formatted facts.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a position
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the operation
    fn report_warning(&self, message: &str);

    /// Reports detail only shown in verbose mode
    fn report_detail(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
