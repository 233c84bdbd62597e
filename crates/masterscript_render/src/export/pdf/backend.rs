//! PDF drawing backends.

use masterscript_error::{ExportError, ExportErrorKind, ExportResult};
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, Rgb};
use tracing::{debug, instrument, warn};

use super::fonts::{ExternalFont, Source, check_coverage, runs};
use super::{Page, PdfOptions};
use crate::TextStyle;

/// Draws laid-out pages into a PDF byte stream.
///
/// Implementations receive finished pages: wrapping and pagination are
/// already done, so a backend only places text at the given coordinates.
pub trait PdfBackend: Send + Sync {
    /// Backend name for logs.
    fn name(&self) -> &'static str;

    /// Produce the PDF bytes for `pages`.
    fn render(&self, title: &str, pages: &[Page], options: &PdfOptions) -> ExportResult<Vec<u8>>;
}

/// Backend built on the `printpdf` crate.
///
/// Text the selected font cannot draw is an [`ExportErrorKind::Font`] error
/// rather than a blank run in the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintPdfBackend;

fn font_error(err: impl std::fmt::Display) -> ExportError {
    ExportError::new(ExportErrorKind::Font(err.to_string()))
}

/// Builtin Helvetica pair plus an optional TrueType face that takes
/// precedence for every character it covers.
struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    external: Option<(ExternalFont, IndirectFontRef)>,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference, options: &PdfOptions) -> ExportResult<Self> {
        let external = match &options.font_path {
            Some(path) => {
                let font = ExternalFont::from_file(path)?;
                let reference = doc
                    .add_external_font(font.data.as_slice())
                    .map_err(font_error)?;
                Some((font, reference))
            }
            None => {
                warn!("No font_path configured, only Latin text can be drawn");
                None
            }
        };
        Ok(Self {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(font_error)?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(font_error)?,
            external,
        })
    }

    fn name(&self) -> String {
        match &self.external {
            Some((font, _)) => format!("{} (with Helvetica fallback)", font.name),
            None => "builtin Helvetica".to_string(),
        }
    }

    fn pick(&self, source: Source, style: TextStyle) -> &IndirectFontRef {
        match (&self.external, source) {
            (Some((_, reference)), Source::External) => reference,
            _ => match style {
                TextStyle::Title
                | TextStyle::Heading
                | TextStyle::Subheading
                | TextStyle::Speaker => &self.bold,
                _ => &self.regular,
            },
        }
    }
}

fn color(style: TextStyle) -> Color {
    let (r, g, b) = match style {
        TextStyle::Title | TextStyle::Heading => (0.10, 0.10, 0.18),
        TextStyle::Marker => (0.70, 0.55, 0.20),
        TextStyle::Cue | TextStyle::Label => (0.45, 0.45, 0.50),
        TextStyle::Muted => (0.60, 0.60, 0.65),
        _ => (0.0, 0.0, 0.0),
    };
    Color::Rgb(Rgb::new(r, g, b, None))
}

impl PdfBackend for PrintPdfBackend {
    fn name(&self) -> &'static str {
        "printpdf"
    }

    #[instrument(skip(self, pages, options), fields(pages = pages.len()))]
    fn render(&self, title: &str, pages: &[Page], options: &PdfOptions) -> ExportResult<Vec<u8>> {
        let (width, height) = options.page_size_mm();
        let (doc, first_page, first_layer) =
            PdfDocument::new(title, Mm(width), Mm(height), "Layer 1");
        let fonts = Fonts::load(&doc, options)?;
        let face = fonts
            .external
            .as_ref()
            .map(|(font, _)| font.face())
            .transpose()?;
        check_coverage(face.as_ref(), &fonts.name(), pages)?;

        for (index, page) in pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(Mm(width), Mm(height), "Layer 1")
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            for line in &page.lines {
                if line.text.is_empty() {
                    continue;
                }
                layer.set_fill_color(color(line.style));
                // one text object per line; each Tj advances the cursor for the next run
                layer.begin_text_section();
                layer.set_text_cursor(Mm(line.x_mm), Mm(height - line.y_mm));
                for (source, run) in runs(face.as_ref(), &line.text) {
                    let font = fonts.pick(source, line.style);
                    layer.set_font(font, line.size_pt);
                    layer.write_text(run, font);
                }
                layer.end_text_section();
            }
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| ExportError::new(ExportErrorKind::Backend(e.to_string())))?;
        debug!(bytes = bytes.len(), "PDF drawn");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::PlacedLine;

    #[test]
    fn renders_pdf_header() {
        let pages = vec![Page {
            lines: vec![PlacedLine {
                text: "THE END".into(),
                style: TextStyle::Title,
                size_pt: 24.0,
                x_mm: 20.0,
                y_mm: 30.0,
            }],
        }];
        let bytes = PrintPdfBackend
            .render("t", &pages, &PdfOptions::default())
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        // "THE END" as a WinAnsi hex string operand
        let stream = String::from_utf8_lossy(&bytes);
        assert!(stream.contains("<54484520454E44>"));
    }

    #[test]
    fn builtin_font_rejects_bengali_text() {
        let pages = vec![Page {
            lines: vec![PlacedLine {
                text: "চায়ের দোকানে বাকি".into(),
                style: TextStyle::Title,
                size_pt: 24.0,
                x_mm: 20.0,
                y_mm: 30.0,
            }],
        }];
        let err = PrintPdfBackend
            .render("t", &pages, &PdfOptions::default())
            .unwrap_err();
        assert!(matches!(err.kind, ExportErrorKind::Font(_)));
    }

    #[test]
    fn font_without_bengali_glyphs_is_rejected() {
        // any installed Latin-only face will do
        let path = std::path::Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf");
        if !path.exists() {
            return;
        }
        let options = PdfOptions {
            font_path: Some(path.to_path_buf()),
            ..PdfOptions::default()
        };
        let pages = vec![Page {
            lines: vec![PlacedLine {
                text: "সালাম".into(),
                style: TextStyle::Speaker,
                size_pt: 12.0,
                x_mm: 20.0,
                y_mm: 30.0,
            }],
        }];
        let err = PrintPdfBackend.render("t", &pages, &options).unwrap_err();
        assert!(matches!(err.kind, ExportErrorKind::Font(_)));
    }

    #[test]
    fn missing_font_file_is_font_error() {
        let options = PdfOptions {
            font_path: Some("/nonexistent/masterscript-font.ttf".into()),
            ..PdfOptions::default()
        };
        let err = PrintPdfBackend
            .render("t", &[Page::default()], &options)
            .unwrap_err();
        assert!(matches!(err.kind, ExportErrorKind::Font(_)));
    }
}
