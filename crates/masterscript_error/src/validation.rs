//! Validation errors for user input and screenplay payloads.

/// Specific validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Concept was empty or whitespace only
    #[display("Concept must not be blank")]
    BlankConcept,
    /// A required text field was empty
    #[display("Field '{}' must not be empty", _0)]
    EmptyField(String),
    /// Scene number was zero
    #[display("Scene at position {} has non-positive number {}", index, number)]
    NonPositiveSceneNumber {
        /// Position of the scene in the list
        index: usize,
        /// The offending scene number
        number: u32,
    },
    /// Two characters share a name
    #[display("Character '{}' appears more than once in the roster", _0)]
    DuplicateCharacter(String),
    /// Screenplay carried no characters
    #[display("Screenplay has no characters")]
    NoCharacters,
    /// Screenplay carried no scenes
    #[display("Screenplay has no scenes")]
    NoScenes,
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use masterscript_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::BlankConcept);
/// assert_eq!(err.kind, ValidationErrorKind::BlankConcept);
/// assert!(format!("{}", err).contains("blank"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of validation failure
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
