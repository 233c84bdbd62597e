//! Serializers from a screenplay (or its rendered document) to files.

mod json;
mod pdf;
mod text;

pub use pdf::{
    Margins, Orientation, Page, PdfBackend, PdfExporter, PdfOptions, PlacedLine, PrintPdfBackend,
    find_bengali_font, layout,
};
pub use json::{to_json, write_json};
pub use text::{to_text, write_text};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::RenderOptions;

/// The `[export]` configuration section.
///
/// # Example
///
/// ```toml
/// [export]
/// output_dir = "scripts"
/// brand = "MasterScript Gen"
/// attribution = "Md A Salam With MasterScript Gen"
///
/// [export.pdf]
/// scale = 2.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported files are written to
    pub output_dir: PathBuf,
    /// Branding shared by the renderer and the text transcript
    #[serde(flatten)]
    pub render: RenderOptions,
    /// PDF page setup
    pub pdf: PdfOptions,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            render: RenderOptions::default(),
            pdf: PdfOptions::default(),
        }
    }
}

/// Suffix appended to every exported file stem.
pub const FILE_SUFFIX: &str = "_MasterScript";

/// File name for an exported screenplay: `<title>_MasterScript.<ext>`.
///
/// Characters that are not allowed in file names on common platforms are
/// replaced with `_`; a blank title becomes `Untitled`.
///
/// # Examples
///
/// ```
/// use masterscript_render::export::export_file_name;
///
/// assert_eq!(export_file_name("চায়ের দোকান", "txt"), "চায়ের দোকান_MasterScript.txt");
/// assert_eq!(export_file_name("a/b: c?", "pdf"), "a_b_ c__MasterScript.pdf");
/// assert_eq!(export_file_name("  ", "txt"), "Untitled_MasterScript.txt");
/// ```
pub fn export_file_name(title: &str, extension: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = if stem.is_empty() { "Untitled" } else { stem.as_str() };
    format!("{stem}{FILE_SUFFIX}.{extension}")
}
