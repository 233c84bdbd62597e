//! Errors raised while requesting a screenplay from the generative service.

/// Generation failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// API key not found in environment
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Failed to build the HTTP client
    #[display("Failed to create HTTP client: {}", _0)]
    ClientCreation(String),
    /// Network or transport level failure
    #[display("Request failed: {}", _0)]
    Transport(String),
    /// Service answered with a non-success status
    #[display("HTTP {} error: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Body or reason returned by the service
        message: String,
    },
    /// Service answered without any candidate text
    #[display("No content generated")]
    EmptyResponse,
    /// Candidate text was not a screenplay-shaped JSON document
    #[display("Malformed screenplay payload: {}", _0)]
    MalformedPayload(String),
    /// Payload parsed but violated screenplay invariants
    #[display("Invalid screenplay: {}", _0)]
    InvalidScreenplay(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use masterscript_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("No content"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
