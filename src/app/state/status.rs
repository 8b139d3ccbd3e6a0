use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusState {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: StatusSeverity,
}

impl StatusState {
    pub fn new(severity: StatusSeverity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
            severity,
        }
    }
}
