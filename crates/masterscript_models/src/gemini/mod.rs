//! Google Gemini REST integration.
//!
//! A single `generateContent` call per screenplay, with the response forced to
//! `application/json` and constrained by [`crate::screenplay_schema`].

mod client;
mod dto;

pub use client::{GeminiClient, GeminiConfig, parse_screenplay};
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    ThinkingConfig,
};
