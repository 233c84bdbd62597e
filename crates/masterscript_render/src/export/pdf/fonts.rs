//! Font coverage, text runs and Bengali font discovery.

use masterscript_error::{ExportError, ExportErrorKind, ExportResult};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use super::Page;

/// Font files known to carry Bengali glyphs, relative to a font directory.
const BENGALI_FONT_FILES: &[&str] = &[
    "truetype/noto/NotoSansBengali-Regular.ttf",
    "truetype/noto/NotoSerifBengali-Regular.ttf",
    "noto/NotoSansBengali-Regular.ttf",
    "google-noto/NotoSansBengali-Regular.ttf",
    "NotoSansBengali-Regular.ttf",
    "truetype/lohit-bengali/Lohit-Bengali.ttf",
    "lohit-bengali/Lohit-Bengali.ttf",
    "truetype/fonts-beng-extra/MuktiNarrow.ttf",
    "HindSiliguri-Regular.ttf",
    "Nirmala.ttf",
    "vrinda.ttf",
];

/// Directories searched by [`find_bengali_font`], user fonts first.
fn font_roots() -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = dirs::font_dir().into_iter().collect();
    roots.extend(
        [
            "/usr/share/fonts",
            "/usr/local/share/fonts",
            "/Library/Fonts",
            "C:\\Windows\\Fonts",
        ]
        .iter()
        .map(PathBuf::from),
    );
    roots
}

/// First installed font file that can draw Bengali text.
///
/// Candidates are checked for actual Bengali glyphs, so a file with a
/// matching name but a different script is skipped.
#[instrument]
pub fn find_bengali_font() -> Option<PathBuf> {
    let found = font_roots()
        .iter()
        .flat_map(|root| BENGALI_FONT_FILES.iter().map(move |file| root.join(file)))
        .find(|path| draws_bengali(path));
    debug!(font = ?found, "Bengali font lookup");
    found
}

fn draws_bengali(path: &Path) -> bool {
    std::fs::read(path)
        .ok()
        .and_then(|bytes| {
            ttf_parser::Face::parse(&bytes, 0)
                .ok()
                .map(|face| face.glyph_index('ক').is_some())
        })
        .unwrap_or(false)
}

/// Characters outside the Latin-1 block that WinAnsi still encodes.
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•\u{2013}\u{2014}˜™š›œžŸ";

fn win_ansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}') || WIN_ANSI_EXTRAS.contains(c)
}

/// Whitespace and joiners produce no ink, so they never need a glyph.
fn invisible(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{200B}'..='\u{200D}')
}

/// Which font a run of text is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    /// The configured TrueType face
    External,
    /// Builtin Helvetica (WinAnsi)
    Builtin,
}

/// A loaded TrueType file.
#[derive(Debug, Clone)]
pub(crate) struct ExternalFont {
    pub(crate) name: String,
    pub(crate) data: Vec<u8>,
}

impl ExternalFont {
    /// Read and parse a TrueType file.
    pub(crate) fn from_file(path: &Path) -> ExportResult<Self> {
        let name = path.display().to_string();
        let data = std::fs::read(path).map_err(|e| file_error(&name, e))?;
        ttf_parser::Face::parse(&data, 0).map_err(|e| file_error(&name, e))?;
        Ok(Self { name, data })
    }

    pub(crate) fn face(&self) -> ExportResult<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, 0).map_err(|e| file_error(&self.name, e))
    }
}

fn file_error(name: &str, err: impl std::fmt::Display) -> ExportError {
    ExportError::new(ExportErrorKind::Font(format!("{}: {}", name, err)))
}

/// Source for one visible character, preferring the external face.
fn source_for(face: Option<&ttf_parser::Face<'_>>, c: char) -> Option<Source> {
    match face {
        Some(face) if face.glyph_index(c).is_some() => Some(Source::External),
        _ if win_ansi(c) => Some(Source::Builtin),
        _ => None,
    }
}

/// Fail on the first visible character no available font can draw.
///
/// printpdf drops such characters silently, which would leave blank runs in
/// the output.
pub(crate) fn check_coverage(
    face: Option<&ttf_parser::Face<'_>>,
    font_name: &str,
    pages: &[Page],
) -> ExportResult<()> {
    for line in pages.iter().flat_map(|page| &page.lines) {
        let missing = line
            .text
            .chars()
            .find(|&c| !invisible(c) && source_for(face, c).is_none());
        if let Some(c) = missing {
            return Err(ExportError::new(ExportErrorKind::Font(format!(
                "{} has no glyph for '{}' (U+{:04X}) in \"{}\"; set export.pdf.font_path to a Bengali TrueType font",
                font_name,
                c,
                u32::from(c),
                line.text
            ))));
        }
    }
    Ok(())
}

/// Split `text` into runs that share a font.
///
/// Whitespace stays with the run it appears in, so a space between two
/// Bengali words does not switch fonts.
pub(crate) fn runs<'t>(
    face: Option<&ttf_parser::Face<'_>>,
    text: &'t str,
) -> Vec<(Source, &'t str)> {
    let mut runs = Vec::new();
    let mut current: Option<(Source, usize)> = None;

    for (index, c) in text.char_indices() {
        if invisible(c) {
            continue;
        }
        let source = source_for(face, c).unwrap_or(Source::Builtin);
        match current {
            Some((active, _)) if active == source => {}
            Some((active, start)) => {
                runs.push((active, &text[start..index]));
                current = Some((source, index));
            }
            None => current = Some((source, 0)),
        }
    }

    match current {
        Some((active, start)) => runs.push((active, &text[start..])),
        None if !text.is_empty() => runs.push((Source::Builtin, text)),
        None => {}
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextStyle;
    use crate::export::PlacedLine;

    fn page(text: &str) -> Vec<Page> {
        vec![Page {
            lines: vec![PlacedLine {
                text: text.into(),
                style: TextStyle::Body,
                size_pt: 11.0,
                x_mm: 15.0,
                y_mm: 20.0,
            }],
        }]
    }

    #[test]
    fn builtin_accepts_latin_and_typography() {
        let text = "Café \u{2013} \u{201C}Premium\u{201D} Copy © 2025";
        assert!(check_coverage(None, "Helvetica", &page(text)).is_ok());
    }

    #[test]
    fn builtin_rejects_bengali() {
        let err =
            check_coverage(None, "Helvetica", &page("MasterScript চায়ের দোকান")).unwrap_err();
        match err.kind {
            ExportErrorKind::Font(message) => {
                assert!(message.contains("U+099A"), "{message}");
                assert!(message.contains("font_path"));
            }
            other => panic!("expected font error, got {other:?}"),
        }
    }

    #[test]
    fn joiners_and_spaces_need_no_glyph() {
        assert!(check_coverage(None, "Helvetica", &page("a\u{200D} \u{A0}b")).is_ok());
    }

    #[test]
    fn latin_text_is_one_builtin_run() {
        assert_eq!(runs(None, "THE END"), vec![(Source::Builtin, "THE END")]);
        assert_eq!(runs(None, "   "), vec![(Source::Builtin, "   ")]);
        assert!(runs(None, "").is_empty());
    }

    #[test]
    fn unparsable_font_file_is_font_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        let err = ExternalFont::from_file(&path).unwrap_err();
        assert!(matches!(err.kind, ExportErrorKind::Font(_)));
    }

    #[test]
    fn bengali_and_latin_split_into_runs() {
        let Some(path) = find_bengali_font() else {
            return;
        };
        let font = ExternalFont::from_file(&path).unwrap();
        let face = font.face().unwrap();
        let text = "দৃশ্য - 1";
        let split = runs(Some(&face), text);
        assert_eq!(split.iter().map(|(_, run)| *run).collect::<String>(), text);
        assert_eq!(split[0].0, Source::External);
    }
}
