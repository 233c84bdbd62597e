//! Error types for the MasterScript screenplay generator.
//!
//! Every domain follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific failure
//! - `*Error` struct wraps the kind with the source location it was raised at
//! - constructors use `#[track_caller]` so the location is captured automatically
//!
//! # Examples
//!
//! ```
//! use masterscript_error::{MasterscriptResult, ValidationError, ValidationErrorKind};
//!
//! fn check(concept: &str) -> MasterscriptResult<()> {
//!     if concept.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::BlankConcept))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("   ").is_err());
//! assert!(check("tea-stall dispute").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod export;
mod generation;
mod logging;
mod tui;
mod validation;

pub use config::{ConfigError, ConfigErrorKind, ConfigResult};
pub use error::{MasterscriptError, MasterscriptErrorKind, MasterscriptResult};
pub use export::{ExportError, ExportErrorKind, ExportResult};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use logging::{LoggingError, LoggingErrorKind};
pub use tui::{TuiError, TuiErrorKind, TuiResult};
pub use validation::{ValidationError, ValidationErrorKind};
