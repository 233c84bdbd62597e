//! TUI launch command handler.

use masterscript::{
    Controller, GeminiClient, MasterscriptConfig, MasterscriptResult, export::PdfExporter, run_tui,
};
use std::sync::Arc;

/// Launch the interactive screen.
pub async fn launch_tui(config: MasterscriptConfig) -> MasterscriptResult<()> {
    // fail before the terminal switches to the alternate screen
    let client = GeminiClient::new(config.gemini.clone(), config.prompt.clone())?;

    tracing::info!(model = %config.gemini.model, "Launching TUI");

    let exporter = PdfExporter::printpdf(config.export.pdf.clone());
    let (controller, events) = Controller::new(Arc::new(client), exporter, config.export, config.tui);
    run_tui(controller, events).await?;

    Ok(())
}
