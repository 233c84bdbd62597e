//! PDF export.
//!
//! Export runs in two passes over a rendered [`Document`]: [`layout`] wraps
//! and paginates the blocks, then a [`PdfBackend`] draws the placed lines.
//! Both passes run on a blocking task so the caller's event loop stays free.

mod backend;
mod fonts;
mod layout;

pub use backend::{PdfBackend, PrintPdfBackend};
pub use fonts::find_bengali_font;
pub use layout::{Page, PlacedLine, layout};

use masterscript_error::{ExportError, ExportErrorKind, ExportResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::export_file_name;
use crate::Document;

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Taller than wide
    #[default]
    Portrait,
    /// Wider than tall
    Landscape,
}

/// Page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: f32,
    /// Right margin
    pub right: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Left margin
    pub left: f32,
}

impl Margins {
    /// Same margin on every side.
    pub fn uniform(mm: f32) -> Self {
        Self {
            top: mm,
            right: mm,
            bottom: mm,
            left: mm,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(15.0)
    }
}

/// Page geometry and typography for PDF export.
///
/// # Example
///
/// ```toml
/// [export.pdf]
/// orientation = "portrait"
/// scale = 2.0
/// font_path = "/usr/share/fonts/truetype/noto/NotoSansBengali-Regular.ttf"
///
/// [export.pdf.margins]
/// top = 15.0
/// right = 15.0
/// bottom = 15.0
/// left = 15.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    /// Sheet width in millimetres before orientation is applied
    pub paper_width_mm: f32,
    /// Sheet height in millimetres before orientation is applied
    pub paper_height_mm: f32,
    /// Page orientation
    pub orientation: Orientation,
    /// Page margins
    pub margins: Margins,
    /// Measurement resolution of the layout pass, in dots per point
    pub scale: f32,
    /// Keep non-splittable blocks whole when they fit on a page
    pub avoid_breaks: bool,
    /// Body text size in points
    pub base_font_size: f32,
    /// TrueType font for all text. Builtin Helvetica when unset, which only
    /// draws Latin text
    pub font_path: Option<PathBuf>,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            paper_width_mm: 210.0,
            paper_height_mm: 297.0,
            orientation: Orientation::Portrait,
            margins: Margins::default(),
            scale: 2.0,
            avoid_breaks: true,
            base_font_size: 11.0,
            font_path: None,
        }
    }
}

impl PdfOptions {
    /// Page `(width, height)` in millimetres after orientation.
    pub fn page_size_mm(&self) -> (f32, f32) {
        let (short, long) = if self.paper_width_mm <= self.paper_height_mm {
            (self.paper_width_mm, self.paper_height_mm)
        } else {
            (self.paper_height_mm, self.paper_width_mm)
        };
        match self.orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }

    /// Width of the area between the side margins.
    pub fn content_width_mm(&self) -> f32 {
        self.page_size_mm().0 - self.margins.left - self.margins.right
    }

    /// Height of the area between the top and bottom margins.
    pub fn content_height_mm(&self) -> f32 {
        self.page_size_mm().1 - self.margins.top - self.margins.bottom
    }
}

/// Writes rendered documents to PDF files.
#[derive(Clone)]
pub struct PdfExporter {
    backend: Arc<dyn PdfBackend>,
    options: PdfOptions,
}

impl std::fmt::Debug for PdfExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfExporter")
            .field("backend", &self.backend.name())
            .field("options", &self.options)
            .finish()
    }
}

impl PdfExporter {
    /// Exporter drawing with the given backend.
    pub fn new(backend: Arc<dyn PdfBackend>, options: PdfOptions) -> Self {
        Self { backend, options }
    }

    /// Exporter using [`PrintPdfBackend`].
    pub fn printpdf(options: PdfOptions) -> Self {
        Self::new(Arc::new(PrintPdfBackend), options)
    }

    /// Export options in use.
    pub fn options(&self) -> &PdfOptions {
        &self.options
    }

    /// Lay out and draw `document`, writing `<dir>/<title>_MasterScript.pdf`.
    ///
    /// # Errors
    ///
    /// [`ExportErrorKind::MissingTarget`] for an empty document, backend
    /// errors as reported by the backend, and I/O errors while writing.
    #[instrument(skip(self, document), fields(title = %document.title, backend = self.backend.name()))]
    pub async fn export(&self, document: Document, dir: &Path) -> ExportResult<PathBuf> {
        if document.is_empty() {
            return Err(ExportError::new(ExportErrorKind::MissingTarget));
        }

        let path = dir.join(export_file_name(&document.title, "pdf"));
        let backend = Arc::clone(&self.backend);
        let options = self.options.clone();

        let bytes = tokio::task::spawn_blocking(move || {
            let pages = layout(&document, &options);
            backend.render(&document.title, &pages, &options)
        })
        .await
        .map_err(|e| {
            error!(error = %e, "PDF render task failed to complete");
            ExportError::new(ExportErrorKind::Backend(e.to_string()))
        })??;

        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&path, &bytes).await?;
        info!(path = %path.display(), bytes = bytes.len(), "PDF written");
        Ok(path)
    }
}
