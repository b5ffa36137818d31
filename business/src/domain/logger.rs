/// Logging seam for the menu core. The domain never talks to a logging crate directly.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);

    /// Reports an operation the catalog refused, tagged with the error code.
    fn rejected(&self, action: &str, code: &dyn std::fmt::Display) {
        self.warn(&format!("Rejected {}: {}", action, code));
    }
}
