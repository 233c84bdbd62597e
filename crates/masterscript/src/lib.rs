//! MasterScript - Bengali rural drama screenplay generator.
//!
//! Turns a one-line story concept into a structured screenplay with a
//! Gemini model, renders it for the terminal, and exports it as a plain-text
//! transcript or a paginated PDF.
//!
//! # Architecture
//!
//! - `masterscript_error` - Error types
//! - `masterscript_core` - Screenplay model and concept validation
//! - `masterscript_models` - Gemini client, prompt and response schema
//! - `masterscript_render` - Document rendering, text and PDF export
//! - `masterscript_tui` - Application controller and terminal interface
//!
//! This crate re-exports everything and adds configuration loading and
//! logging setup for the `masterscript` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;

pub use config::{DEFAULT_CONFIG, MasterscriptConfig};
pub use observability::{LogTarget, default_log_file, init_logging};

pub use masterscript_core::*;
pub use masterscript_error::*;
pub use masterscript_models::*;
pub use masterscript_render::*;
pub use masterscript_tui::*;
