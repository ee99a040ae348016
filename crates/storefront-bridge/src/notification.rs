/// How loudly a backend failure is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The request made sense but had no result, e.g. a launch link pointing
    /// at a product that does not exist.
    Warning,
    /// The backend could not do what was asked (network, disk).
    Error,
}

/// A toast shown by the frontend.
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    pub severity: Severity,
    pub message: String,
}

impl NotificationMessage {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}
