//! Gemini `generateContent` data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A text fragment of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
pub struct Part {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Set on thought summaries, which are not part of the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thought: Option<bool>,
}

impl Part {
    /// Creates a plain text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            thought: None,
        }
    }
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
pub struct Content {
    /// Turn author ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Message fragments
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    /// Creates a user turn holding a single text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::from_text(text)],
        }
    }
}

/// Thinking budget for models that reason before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    /// Token budget for thinking
    thinking_budget: u32,
}

impl ThinkingConfig {
    /// Creates a thinking configuration with the given budget.
    pub fn new(thinking_budget: u32) -> Self {
        Self { thinking_budget }
    }
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Output MIME type
    #[builder(default = "\"application/json\".to_string()")]
    response_mime_type: String,
    /// Output schema
    response_schema: serde_json::Value,
    /// Reasoning budget
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl GenerationConfig {
    /// Creates a new builder for `GenerationConfig`.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }
}

/// Body of `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns
    contents: Vec<Content>,
    /// Generation parameters
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Creates a new builder for `GenerateContentRequest`.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// One answer candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Answer content
    #[serde(default)]
    content: Option<Content>,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Response of `generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Answer candidates, usually one
    #[serde(default)]
    candidates: Vec<Candidate>,
    /// Model version that served the request
    #[serde(default)]
    model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Answer text of the first candidate, excluding thought parts.
    ///
    /// Returns `None` when there is no candidate or the text is blank.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter(|p| p.thought != Some(true))
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}
