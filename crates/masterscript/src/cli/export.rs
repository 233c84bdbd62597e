//! Export command handler and shared artifact writer.

use masterscript::{
    ExportError, MasterscriptConfig, MasterscriptResult, Screenplay,
    export::{ExportConfig, PdfExporter, write_json, write_text},
    parse_screenplay, render,
};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use super::ExportFormat;
use super::commands::Artifacts;

/// Write the requested artifacts for a screenplay into `dir`.
#[instrument(skip(screenplay, export), fields(title = %screenplay.title, dir = %dir.display()))]
pub(crate) async fn write_artifacts(
    screenplay: &Screenplay,
    export: &ExportConfig,
    dir: &Path,
    artifacts: Artifacts,
) -> MasterscriptResult<Vec<PathBuf>> {
    let mut written = Vec::new();

    if artifacts.json {
        written.push(write_json(screenplay, dir).await?);
    }

    if artifacts.text {
        written.push(write_text(screenplay, dir, &export.render).await?);
    }

    if artifacts.pdf {
        let exporter = PdfExporter::printpdf(export.pdf.clone());
        let document = render(screenplay, &export.render);
        written.push(exporter.export(document, dir).await?);
    }

    info!(files = written.len(), "Artifacts written");
    Ok(written)
}

/// Export a saved screenplay JSON file.
#[instrument(skip(config), fields(path = %path.display()))]
pub async fn run_export(
    config: &MasterscriptConfig,
    path: &Path,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> MasterscriptResult<Vec<PathBuf>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(ExportError::from)?;
    let screenplay = parse_screenplay(&json)?;

    let dir = output.unwrap_or_else(|| config.export.output_dir.clone());
    write_artifacts(&screenplay, &config.export, &dir, format.into()).await
}
