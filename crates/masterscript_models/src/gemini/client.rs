//! Gemini REST client for screenplay generation.

use async_trait::async_trait;
use masterscript_core::{Concept, Screenplay};
use masterscript_error::{GenerationError, GenerationErrorKind, GenerationResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ThinkingConfig,
};
use crate::{PromptConfig, ScreenplayGenerator, build_prompt, screenplay_schema};

/// Connection settings for the Gemini API.
///
/// # Example
///
/// ```toml
/// [gemini]
/// model = "gemini-3-pro-preview"
/// thinking_budget = 8000
/// api_key_env = "GEMINI_API_KEY"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Model identifier
    pub model: String,
    /// API root, without the `models/...` suffix
    pub base_url: String,
    /// Thinking budget in tokens; `None` leaves the model default
    pub thinking_budget: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-pro-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            thinking_budget: Some(8000),
            temperature: None,
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Screenplay generator backed by Gemini `generateContent`.
///
/// One request per [`ScreenplayGenerator::generate`] call, no retries. The
/// answer must be a JSON document matching the screenplay schema; anything
/// else becomes a [`GenerationError`].
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    config: GeminiConfig,
    prompt: PromptConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client, reading the API key from `config.api_key_env`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::MissingApiKey`] when the variable is
    /// unset or empty.
    #[instrument(name = "gemini_client_new", skip_all, fields(model = %config.model))]
    pub fn new(config: GeminiConfig, prompt: PromptConfig) -> GenerationResult<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GenerationError::new(GenerationErrorKind::MissingApiKey(
                    config.api_key_env.clone(),
                ))
            })?;
        Self::with_api_key(api_key, config, prompt)
    }

    /// Create a client with an explicit API key.
    #[instrument(name = "gemini_client_with_api_key", skip_all, fields(model = %config.model))]
    pub fn with_api_key(
        api_key: impl Into<String>,
        config: GeminiConfig,
        prompt: PromptConfig,
    ) -> GenerationResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("masterscript/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            config,
            prompt,
        })
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        let model = self
            .config
            .model
            .strip_prefix("models/")
            .unwrap_or(&self.config.model);
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Build the request body for a concept.
    pub fn build_request(&self, concept: &Concept) -> GenerationResult<GenerateContentRequest> {
        let generation_config = GenerationConfig::builder()
            .response_schema(screenplay_schema())
            .thinking_config(self.config.thinking_budget.map(ThinkingConfig::new))
            .temperature(self.config.temperature)
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string())))?;

        GenerateContentRequest::builder()
            .contents(vec![Content::user_text(build_prompt(concept, &self.prompt))])
            .generation_config(generation_config)
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string())))
    }
}

/// Parse and validate a screenplay JSON document returned by the service.
///
/// Any deviation from the schema is an error; there is no partial recovery.
///
/// # Examples
///
/// ```
/// use masterscript_models::parse_screenplay;
///
/// assert!(parse_screenplay("{\"title\": \"x\"}").is_err());
/// assert!(parse_screenplay("not json").is_err());
/// ```
#[track_caller]
pub fn parse_screenplay(text: &str) -> GenerationResult<Screenplay> {
    let screenplay: Screenplay = serde_json::from_str(text.trim()).map_err(|e| {
        GenerationError::new(GenerationErrorKind::MalformedPayload(e.to_string()))
    })?;

    screenplay.validate().map_err(|e| {
        GenerationError::new(GenerationErrorKind::InvalidScreenplay(e.kind.to_string()))
    })?;

    Ok(screenplay)
}

#[async_trait]
impl ScreenplayGenerator for GeminiClient {
    #[instrument(skip(self, concept), fields(model = %self.config.model, concept_chars = concept.as_str().chars().count()))]
    async fn generate(&self, concept: &Concept) -> GenerationResult<Screenplay> {
        let body = self.build_request(concept)?;
        let url = self.endpoint();
        debug!(url = %url, "Sending Gemini generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini request rejected");
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::MalformedPayload(format!(
                "Failed to decode response envelope: {}",
                e
            )))
        })?;

        let text = payload
            .text()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))?;

        let screenplay = parse_screenplay(&text)?;

        let unknown = screenplay.unknown_speakers();
        if !unknown.is_empty() {
            warn!(speakers = ?unknown, "Dialogue speakers missing from the character roster");
        }
        debug!(
            title = %screenplay.title,
            characters = screenplay.characters.len(),
            scenes = screenplay.scenes.len(),
            "Screenplay generated"
        );

        Ok(screenplay)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(model: &str) -> GeminiClient {
        let config = GeminiConfig {
            model: model.to_string(),
            base_url: "http://localhost:1234/v1beta/".to_string(),
            ..GeminiConfig::default()
        };
        GeminiClient::with_api_key("key", config, PromptConfig::default()).unwrap()
    }

    #[test]
    fn endpoint_strips_models_prefix_and_trailing_slash() {
        assert_eq!(
            client("models/gemini-2.5-flash").endpoint(),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(
            client("gemini-3-pro-preview").endpoint(),
            "http://localhost:1234/v1beta/models/gemini-3-pro-preview:generateContent"
        );
    }

    #[test]
    fn request_carries_schema_and_budget() {
        let concept = Concept::parse("flood").unwrap();
        let request = client("m").build_request(&concept).unwrap();
        assert_eq!(
            request.generation_config().response_schema(),
            &screenplay_schema()
        );
        assert_eq!(
            request
                .generation_config()
                .thinking_config()
                .as_ref()
                .map(|t| *t.thinking_budget()),
            Some(8000)
        );
    }

    #[test]
    fn parse_rejects_payload_without_scenes() {
        let err = parse_screenplay(
            r#"{"title":"t","summary":"s","characters":[{"name":"a","age":1,"description":"","costume":""}],"scenes":[]}"#,
        )
        .unwrap_err();
        assert!(matches!(err.kind, GenerationErrorKind::InvalidScreenplay(_)));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_screenplay("{\"title\": ").unwrap_err();
        assert!(matches!(err.kind, GenerationErrorKind::MalformedPayload(_)));
    }
}
