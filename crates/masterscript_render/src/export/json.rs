//! Screenplay JSON, readable back by `masterscript export`.

use masterscript_core::Screenplay;
use masterscript_error::{ExportError, ExportErrorKind, ExportResult};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use super::export_file_name;

/// Pretty-printed JSON with the same camelCase keys the model returns.
pub fn to_json(screenplay: &Screenplay) -> ExportResult<String> {
    serde_json::to_string_pretty(screenplay)
        .map_err(|e| ExportError::new(ExportErrorKind::Serialize(e.to_string())))
}

/// Write `<dir>/<title>_MasterScript.json` and return the path.
#[instrument(skip(screenplay), fields(title = %screenplay.title, dir = %dir.display()))]
pub async fn write_json(screenplay: &Screenplay, dir: &Path) -> ExportResult<PathBuf> {
    let json = to_json(screenplay)?;
    let path = dir.join(export_file_name(&screenplay.title, "json"));
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&path, json.as_bytes()).await?;
    info!(path = %path.display(), bytes = json.len(), "Screenplay JSON written");
    Ok(path)
}
