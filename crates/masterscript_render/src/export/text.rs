//! Plain-text transcript export.

use masterscript_core::Screenplay;
use masterscript_error::ExportResult;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use super::export_file_name;
use crate::RenderOptions;

const SEPARATOR: &str = "--------------------------------";

/// Serialize a screenplay to the plain-text transcript.
///
/// Output is deterministic: the same screenplay and options always produce
/// byte-identical text, and every text field appears unaltered.
///
/// # Examples
///
/// ```
/// use masterscript_core::ScreenplayBuilder;
/// use masterscript_render::{RenderOptions, export::to_text};
///
/// let screenplay = ScreenplayBuilder::default()
///     .title("Dispute")
///     .summary("A quarrel.")
///     .build()
///     .unwrap();
/// let text = to_text(&screenplay, &RenderOptions::default());
/// assert!(text.starts_with("MasterScript Gen | Dispute\n"));
/// ```
pub fn to_text(screenplay: &Screenplay, options: &RenderOptions) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "{} | {}\nরচনায়: {}\n\n",
        options.brand,
        screenplay.title,
        options.attribution_for(screenplay)
    );

    out.push_str("চরিত্র পরিচিতি:\n");
    for c in &screenplay.characters {
        let _ = writeln!(
            out,
            "{} ({} বছর): {}. কস্টিউম: {}",
            c.name, c.age, c.description, c.costume
        );
    }

    let _ = write!(out, "\nকাহিনী সংক্ষেপ: {}\n\n", screenplay.summary);
    out.push_str("\nমূল চিত্রনাট্য:\n");

    for scene in &screenplay.scenes {
        let _ = write!(
            out,
            "\nদৃশ্য - {}: {} [{}]\n",
            scene.scene_number, scene.location, scene.time
        );
        let _ = writeln!(out, "অ্যাকশন: {}", scene.action);
        for line in &scene.dialogues {
            match line.cue() {
                Some(cue) => {
                    let _ = writeln!(out, "{}: ({}) {}", line.character, cue, line.text);
                }
                None => {
                    let _ = writeln!(out, "{}: {}", line.character, line.text);
                }
            }
        }
        if let Some(note) = scene.note() {
            let _ = writeln!(out, "নোট: {}", note);
        }
        out.push_str(SEPARATOR);
        out.push('\n');
    }

    out
}

/// Write the transcript as `<dir>/<title>_MasterScript.txt` and return the path.
#[instrument(skip(screenplay, options), fields(title = %screenplay.title, dir = %dir.display()))]
pub async fn write_text(
    screenplay: &Screenplay,
    dir: &Path,
    options: &RenderOptions,
) -> ExportResult<PathBuf> {
    let path = dir.join(export_file_name(&screenplay.title, "txt"));
    let text = to_text(screenplay, options);
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&path, text.as_bytes()).await?;
    info!(path = %path.display(), bytes = text.len(), "Text transcript written");
    Ok(path)
}
