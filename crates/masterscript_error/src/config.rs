//! Configuration error types.

/// Why the layered configuration could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A file named with `--config` does not exist
    #[display("Configuration file not found: {}", _0)]
    MissingFile(String),
    /// A source could not be read or merged
    #[display("Failed to read configuration sources: {}", _0)]
    Load(String),
    /// The merged settings do not match the expected sections
    #[display("Invalid configuration: {}", _0)]
    Parse(String),
}

/// Configuration error with source location tracking.
///
/// # Examples
///
/// ```
/// use masterscript_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingFile("studio.toml".to_string()));
/// assert!(format!("{}", err).contains("studio.toml"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// Error kind
    pub kind: ConfigErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
