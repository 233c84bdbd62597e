//! Headless generation command handler.

use masterscript::{
    Concept, GeminiClient, MasterscriptConfig, MasterscriptResult, ScreenplayGenerator,
    ValidationError, ValidationErrorKind,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{info, instrument};

use super::OutputFormat;
use super::export::write_artifacts;

/// Generate one screenplay and write the requested artifacts.
#[instrument(skip(config, concept))]
pub async fn run_generate(
    config: &MasterscriptConfig,
    concept: Option<String>,
    seed: Option<u64>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> MasterscriptResult<Vec<PathBuf>> {
    let text = match concept {
        Some(concept) => concept,
        None => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            config
                .tui
                .pick_preset(&mut rng)
                .map(str::to_string)
                .ok_or_else(|| ValidationError::new(ValidationErrorKind::BlankConcept))?
        }
    };
    let concept = Concept::parse(&text)?;
    info!(concept = %concept, "Generating screenplay");

    let client = GeminiClient::new(config.gemini.clone(), config.prompt.clone())?;
    let screenplay = client.generate(&concept).await?;

    let dir = output.unwrap_or_else(|| config.export.output_dir.clone());
    write_artifacts(&screenplay, &config.export, &dir, format.into()).await
}
