//! Export error types.

/// Export failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExportErrorKind {
    /// Nothing to render
    #[display("Render target is missing or empty")]
    MissingTarget,
    /// Font missing, unreadable, or lacking glyphs for the text
    #[display("Font unusable: {}", _0)]
    Font(String),
    /// PDF backend failed to produce a document
    #[display("PDF backend failed: {}", _0)]
    Backend(String),
    /// The screenplay could not be serialized
    #[display("Failed to serialize screenplay: {}", _0)]
    Serialize(String),
    /// Writing the artifact failed
    #[display("I/O error: {}", _0)]
    Io(String),
}

/// Export error with source location tracking.
///
/// # Examples
///
/// ```
/// use masterscript_error::{ExportError, ExportErrorKind};
///
/// let err = ExportError::new(ExportErrorKind::Backend("canvas exploded".to_string()));
/// assert!(format!("{}", err).contains("canvas exploded"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// Error kind
    pub kind: ExportErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ExportError {
    /// Create a new ExportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<std::io::Error> for ExportError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ExportErrorKind::Io(err.to_string()))
    }
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
