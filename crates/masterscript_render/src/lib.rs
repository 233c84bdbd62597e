//! Screenplay rendering and export.
//!
//! [`render`] turns a [`Screenplay`](masterscript_core::Screenplay) into a
//! styled [`Document`] that both the terminal view and the PDF exporter draw.
//! The [`export`] module serializes a screenplay to the plain-text transcript
//! and a laid-out document to PDF.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
pub mod export;
mod renderer;

pub use document::{Align, Block, BlockKind, Document, Line, TextStyle};
pub use renderer::{RenderOptions, render};
