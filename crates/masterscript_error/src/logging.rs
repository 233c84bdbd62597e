//! Logging setup error types.

/// Failures while installing the tracing subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LoggingErrorKind {
    /// The directory holding the log file could not be created
    #[display("Failed to create log directory {}", _0)]
    Directory(String),
    /// The log file could not be opened for appending
    #[display("Failed to open log file {}", _0)]
    File(String),
    /// Another global subscriber is already in place
    #[display("Failed to install subscriber: {}", _0)]
    Subscriber(String),
}

/// Logging error with source location tracking.
///
/// # Examples
///
/// ```
/// use masterscript_error::{LoggingError, LoggingErrorKind};
///
/// let err = LoggingError::new(LoggingErrorKind::File("/ro/masterscript.log".to_string()));
/// assert!(format!("{}", err).starts_with("Logging Error"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Logging Error: {} at line {} in {}", kind, line, file)]
pub struct LoggingError {
    /// Error kind
    pub kind: LoggingErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl LoggingError {
    /// Create a new LoggingError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LoggingErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
