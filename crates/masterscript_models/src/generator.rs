//! The generation seam used by the application controller.

use async_trait::async_trait;
use masterscript_core::{Concept, Screenplay};
use masterscript_error::GenerationResult;

/// Anything that can turn a story concept into a screenplay.
///
/// Each call is a single attempt; callers decide whether to offer a retry.
#[async_trait]
pub trait ScreenplayGenerator: Send + Sync {
    /// Request one screenplay for the concept.
    async fn generate(&self, concept: &Concept) -> GenerationResult<Screenplay>;

    /// Model identifier (e.g., "gemini-3-pro-preview").
    fn model_name(&self) -> &str;
}
