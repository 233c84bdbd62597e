//! Generative model integration for MasterScript.
//!
//! The [`ScreenplayGenerator`] trait is the seam between the application
//! controller and the remote service. [`GeminiClient`] implements it against
//! the Google Gemini REST API with a strict JSON response schema.
//!
//! # Example
//!
//! ```no_run
//! use masterscript_core::Concept;
//! use masterscript_models::{GeminiClient, GeminiConfig, PromptConfig, ScreenplayGenerator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(GeminiConfig::default(), PromptConfig::default())?;
//! let concept = Concept::parse("চায়ের দোকানে বাকির ঝগড়া")?;
//! let screenplay = client.generate(&concept).await?;
//! println!("{}", screenplay.title);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod generator;
mod prompt;
mod schema;

pub use gemini::{
    Candidate, Content, GeminiClient, GeminiConfig, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, Part, ThinkingConfig, parse_screenplay,
};
pub use generator::ScreenplayGenerator;
pub use prompt::{CastMember, PromptConfig, bengali_digits, build_prompt};
pub use schema::screenplay_schema;
