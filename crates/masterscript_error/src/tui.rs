//! Interactive screen error types.

/// What went wrong while driving the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TuiErrorKind {
    /// Raw mode or the alternate screen could not be entered
    #[display("Failed to set up terminal: {}", _0)]
    TerminalSetup(String),
    /// The terminal could not be handed back in its original state
    #[display("Failed to restore terminal: {}", _0)]
    TerminalRestore(String),
    /// Polling or reading a terminal event failed
    #[display("Failed to read event: {}", _0)]
    EventRead(String),
    /// The input reader thread is gone, so no more keys will arrive
    #[display("Input reader stopped")]
    InputClosed,
    /// A frame could not be drawn
    #[display("Failed to draw screen: {}", _0)]
    Rendering(String),
}

/// Interactive screen error with source location tracking.
///
/// # Examples
///
/// ```
/// use masterscript_error::{TuiError, TuiErrorKind};
///
/// let err = TuiError::new(TuiErrorKind::InputClosed);
/// assert!(format!("{}", err).contains("Input reader stopped"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("TUI Error: {} at line {} in {}", kind, line, file)]
pub struct TuiError {
    /// Error kind
    pub kind: TuiErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl TuiError {
    /// Create a new TuiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TuiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for interactive screen operations.
pub type TuiResult<T> = Result<T, TuiError>;
