//! Top-level error wrapper types.

use crate::{ConfigError, ExportError, GenerationError, LoggingError, TuiError, ValidationError};

/// Every failure the workspace can surface.
///
/// # Examples
///
/// ```
/// use masterscript_error::{MasterscriptError, ExportError, ExportErrorKind};
///
/// let export_err = ExportError::new(ExportErrorKind::MissingTarget);
/// let err: MasterscriptError = export_err.into();
/// assert!(format!("{}", err).contains("Export Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MasterscriptErrorKind {
    /// User input or payload validation failed
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Generative service call failed
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Text or PDF export failed
    #[from(ExportError)]
    Export(ExportError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Logging could not be set up
    #[from(LoggingError)]
    Logging(LoggingError),
    /// Terminal UI error
    #[from(TuiError)]
    Tui(TuiError),
}

/// MasterScript error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("MasterScript Error: {}", _0)]
pub struct MasterscriptError(Box<MasterscriptErrorKind>);

impl MasterscriptError {
    /// Create a new error from a kind.
    pub fn new(kind: MasterscriptErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MasterscriptErrorKind {
        &self.0
    }
}

impl<T> From<T> for MasterscriptError
where
    T: Into<MasterscriptErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for MasterScript operations.
pub type MasterscriptResult<T> = std::result::Result<T, MasterscriptError>;
